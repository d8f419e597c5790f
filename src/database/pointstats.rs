use anyhow::{Context, Result};
use rusqlite::{params, params_from_iter};

use super::connection::DbConn;
use super::models::{PointStat, StatRow};
use crate::query::RenderedQuery;

pub fn insert_point_stat(conn: &mut DbConn, point: &PointStat) -> Result<()> {
    let sql = "INSERT INTO pointstats (match_id, player_id, player_name, case1, case2, game_service, game_winner, won_next_game, points_won, points_lost) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

    conn.execute(
        sql,
        params![
            point.match_id,
            point.player_id,
            point.player_name,
            point.case1,
            point.case2,
            point.game_service,
            point.game_winner,
            point.won_next_game,
            point.points_won,
            point.points_lost
        ],
    )
    .context("Failed to insert point stat")
    .map(|_| ())
}

fn parse_stat_row(row: &rusqlite::Row) -> rusqlite::Result<StatRow> {
    Ok(StatRow {
        player_id: row.get("player_id")?,
        player_name: row.get("player_name")?,
        total_case1: row.get("total_case1")?,
        total_case1_won: row.get("total_case1_won")?,
        total_case2: row.get("total_case2")?,
        total_case2_won: row.get("total_case2_won")?,
        total_case3: row.get("total_case3")?,
        total_case3_won: row.get("total_case3_won")?,
        total_case4: row.get("total_case4")?,
        total_case4_won: row.get("total_case4_won")?,
    })
}

pub fn query_stat_rows(conn: &mut DbConn, query: &RenderedQuery) -> Result<Vec<StatRow>> {
    let mut stmt = conn
        .prepare(&query.sql)
        .context("Failed to prepare stats query")?;
    let rows = stmt
        .query_map(params_from_iter(query.params.iter()), parse_stat_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read stats rows")?;

    Ok(rows)
}
