use super::request::{Group, StatsRequest};
use crate::query::{col, param, Select};

/// Doubles pairings are stored as `"Player A/Player B"`.
pub const PAIRING_NAME_PATTERN: &str = "%/%";

/// Candidate player ids for the request's grouping. The ranking bucket only
/// narrows singles; doubles pairings carry no ranking of their own.
pub fn player_selection(request: &StatsRequest) -> Select {
    let pattern = param(PAIRING_NAME_PATTERN.to_string());
    let name_filter = match request.group {
        Group::Singles => col("name").not_like(pattern),
        Group::Doubles => col("name").like(pattern),
    };

    let select = Select::table(request.tour.players_table())
        .column(col("id"), None)
        .filter(name_filter);

    match (request.group, request.ranking) {
        (Group::Singles, Some(bucket)) => {
            let (start, end) = bucket.bounds();
            select.filter(col("current_rank").between(param(start), param(end)))
        }
        _ => select,
    }
}
