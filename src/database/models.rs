use chrono::NaiveDateTime;
use serde::Serialize;

use crate::stats::TourType;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    /// `"First Last"` for singles, `"A/B"` for a doubles pairing.
    pub name: String,
    pub current_rank: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub id: i64,
    pub court_id: Option<i64>,
    pub rank_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub tournament_id: i64,
    pub round_id: i64,
    pub date: Option<NaiveDateTime>,
    pub player1_id: i64,
    pub player2_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchInfo {
    pub match_id: i64,
    pub tournament_type: TourType,
    pub player_id1: i64,
    pub player_id2: i64,
    pub tournament_id: i64,
    pub round_id: i64,
}

/// One played point, seen from `player_id`'s side.
#[derive(Debug, Clone, PartialEq)]
pub struct PointStat {
    pub match_id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub case1: bool,
    pub case2: bool,
    /// Player slot (1 or 2) serving the game.
    pub game_service: i64,
    /// Player slot (1 or 2) that won the game.
    pub game_winner: i64,
    pub won_next_game: Option<bool>,
    pub points_won: i64,
    pub points_lost: i64,
}

// Aggregated per-player row, serialized with the column names as keys
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub player_id: i64,
    pub player_name: String,
    pub total_case1: i64,
    pub total_case1_won: i64,
    pub total_case2: i64,
    pub total_case2_won: i64,
    pub total_case3: i64,
    pub total_case3_won: i64,
    pub total_case4: i64,
    pub total_case4_won: i64,
}
