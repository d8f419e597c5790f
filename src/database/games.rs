use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::{Game, MatchInfo};
use crate::stats::TourType;

pub fn insert_game(conn: &mut DbConn, tour: TourType, game: &Game) -> Result<()> {
    let sql = format!(
        "INSERT INTO {} (id, tournament_id, round_id, date, player1_id, player2_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        tour.games_table()
    );

    conn.execute(
        &sql,
        params![
            game.id,
            game.tournament_id,
            game.round_id,
            game.date,
            game.player1_id,
            game.player2_id
        ],
    )
    .with_context(|| format!("Failed to insert {} game {}", tour.as_str(), game.id))
    .map(|_| ())
}

pub fn insert_match_info(conn: &mut DbConn, info: &MatchInfo) -> Result<()> {
    let sql = "INSERT INTO match_info (match_id, tournament_type, player_id1, player_id2, tournament_id, round_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    conn.execute(
        sql,
        params![
            info.match_id,
            info.tournament_type.as_str(),
            info.player_id1,
            info.player_id2,
            info.tournament_id,
            info.round_id
        ],
    )
    .context("Failed to insert match info")
    .map(|_| ())
}
