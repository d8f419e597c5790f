use chrono::{NaiveDate, NaiveTime};

use super::request::StatsRequest;
use crate::query::{col, param, Predicate, Select};

/// How rusqlite's chrono support stores a `NaiveDateTime` with no fraction.
const STORED_DATETIME: &str = "%F %T";

fn midnight(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).format(STORED_DATETIME).to_string()
}

/// Match ids played in the requested year (optionally at a given court type or
/// tournament rank category) that involve at least one candidate player from
/// the `players` CTE and have a consistent `match_info` record.
pub fn match_selection(request: &StatsRequest, players: &'static str) -> Select {
    let tour = request.tour;
    let year_start = midnight(request.year.start);
    let year_end = midnight(request.year.end);

    let mut select = Select::table_as(tour.games_table(), "gm")
        .join("match_info", "mt")
        .column(col("mt.match_id"), Some("match_id"))
        .filter(col("gm.date").is_not_null())
        .filter(col("gm.date").gt_eq(param(year_start)))
        .filter(col("gm.date").lt(param(year_end)));

    if let Some(tournaments) = tournament_selection(request) {
        select = select.filter(col("gm.tournament_id").in_select(tournaments));
    }

    select
        .filter(involves_candidate(players))
        .filter(match_info_linkage(request))
}

/// `None` when neither court nor rank category was asked for.
fn tournament_selection(request: &StatsRequest) -> Option<Select> {
    let mut conditions = Vec::new();
    if let Some(court_id) = request.court_id {
        conditions.push(col("court_id").eq(param(court_id)));
    }
    if let Some(rank) = request.rank {
        conditions.push(col("rank_id").eq(param(rank)));
    }

    if conditions.is_empty() {
        return None;
    }

    Some(
        Select::table(request.tour.tournaments_table())
            .column(col("id"), None)
            .filter(Predicate::All(conditions)),
    )
}

fn involves_candidate(players: &'static str) -> Predicate {
    let candidates = || Select::table(players).column(col("id"), None);
    col("gm.player1_id")
        .in_select(candidates())
        .or(col("gm.player2_id").in_select(candidates()))
}

fn match_info_linkage(request: &StatsRequest) -> Predicate {
    Predicate::All(vec![
        col("mt.tournament_type").eq(param(request.tour.as_str().to_string())),
        col("mt.player_id1").eq(col("gm.player1_id")),
        col("mt.player_id2").eq(col("gm.player2_id")),
        col("mt.tournament_id").eq(col("gm.tournament_id")),
        col("mt.round_id").eq(col("gm.round_id")),
    ])
}
