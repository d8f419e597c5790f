use crate::database::DbPool;
use crate::stats::StatsService;

pub mod stats;

pub struct AppState {
    pub stats: StatsService<DbPool>,
}
