use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::Tournament;
use crate::stats::TourType;

pub fn insert_tournament(conn: &mut DbConn, tour: TourType, tournament: &Tournament) -> Result<()> {
    let sql = format!(
        "INSERT INTO {} (id, court_id, rank_id) VALUES (?1, ?2, ?3)",
        tour.tournaments_table()
    );

    conn.execute(
        &sql,
        params![tournament.id, tournament.court_id, tournament.rank_id],
    )
    .with_context(|| format!("Failed to insert {} tournament {}", tour.as_str(), tournament.id))
    .map(|_| ())
}
