use anyhow::Result;
use log::{debug, error};
use serde::Serialize;

use super::assembler::build_stats_query;
use super::errors::{StatsError, StatsResult};
use super::request::{StatsParams, StatsRequest};
use crate::config::settings::StatsSettings;
use crate::database::{self, DbPool, StatRow};
use crate::query::RenderedQuery;

/// Anything that can run a rendered read-only stats query.
pub trait StatsSource {
    fn fetch_stats(&self, query: &RenderedQuery) -> Result<Vec<StatRow>>;
}

impl StatsSource for DbPool {
    fn fetch_stats(&self, query: &RenderedQuery) -> Result<Vec<StatRow>> {
        let mut conn = database::get_connection(self)?;
        database::pointstats::query_stat_rows(&mut conn, query)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub data: Vec<StatRow>,
}

pub struct StatsService<S> {
    source: S,
    settings: StatsSettings,
}

impl<S: StatsSource> StatsService<S> {
    pub fn new(source: S, settings: StatsSettings) -> Self {
        Self { source, settings }
    }

    pub fn get_stats(&self, params: StatsParams) -> StatsResult<StatsResponse> {
        let request = StatsRequest::from_params(params, &self.settings)?;
        self.run(&request)
    }

    pub fn run(&self, request: &StatsRequest) -> StatsResult<StatsResponse> {
        let query = build_stats_query(request).render();
        debug!(
            "pbp stats: tour={} sortBy={} ({} bound params)\n{}",
            request.tour.as_str(),
            request.sort_by.as_str(),
            query.params.len(),
            query.sql
        );

        let data = self.source.fetch_stats(&query).map_err(|e| {
            error!("pbp stats query failed: {:?}", e);
            StatsError::QueryFailed(e)
        })?;

        Ok(StatsResponse { data })
    }
}
