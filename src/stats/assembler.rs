use super::cases::aggregate_point_stats;
use super::matches::match_selection;
use super::players::player_selection;
use super::request::StatsRequest;
use super::sort::SortKey;
use crate::query::{param, Query, Select};

const PLAYERS: &str = "players";
const MATCHES: &str = "matches";
const STATS: &str = "stats";

/// players -> matches -> per-player stats -> sorted page.
pub fn build_stats_query(request: &StatsRequest) -> Query {
    let sort = SortKey::new(request.sort_by, request.sort_order);

    let mut page = Select::table(STATS);
    for (expr, order) in sort.order_terms() {
        page = page.order_by(expr, order);
    }
    let page = page
        .limit(param(request.page_size))
        .offset(param(request.offset()));

    Query::new(page)
        .with(PLAYERS, player_selection(request))
        .with(MATCHES, match_selection(request, PLAYERS))
        .with(STATS, aggregate_point_stats(PLAYERS, MATCHES))
}
