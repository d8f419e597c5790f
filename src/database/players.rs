use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Player;
use crate::stats::TourType;

pub fn insert_player(conn: &mut DbConn, tour: TourType, player: &Player) -> Result<()> {
    let sql = format!(
        "INSERT INTO {} (id, name, current_rank) VALUES (?1, ?2, ?3)",
        tour.players_table()
    );

    conn.execute(&sql, params![player.id, player.name, player.current_rank])
        .with_context(|| format!("Failed to insert {} player {}", tour.as_str(), player.id))
        .map(|_| ())
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        current_rank: row.get(2)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, tour: TourType, id: i64) -> Result<Option<Player>> {
    let sql = format!(
        "SELECT id, name, current_rank FROM {} WHERE id = ?1",
        tour.players_table()
    );

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}
