//! Serve-situation win/loss statistics per player.
//!
//! A request is normalized into a [`StatsRequest`], turned into one CTE query
//! (candidate players, candidate matches, per-player case aggregation, sorted
//! page) and run once against a [`StatsSource`].

pub mod assembler;
pub mod cases;
pub mod errors;
pub mod matches;
pub mod players;
pub mod request;
pub mod sort;
pub mod source;

pub use assembler::build_stats_query;
pub use cases::{truncated_win_rate, Case};
pub use errors::{StatsError, StatsResult};
pub use request::{CalendarYear, Group, RankingBucket, StatsParams, StatsRequest, TourType};
pub use sort::SortKey;
pub use source::{StatsResponse, StatsService, StatsSource};
