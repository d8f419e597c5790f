use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("unsupported sort key `{0}`, expected one of case1, case2, case3, case4")]
    UnsupportedSortKey(String),

    #[error("stats query failed")]
    QueryFailed(#[source] anyhow::Error),
}

impl StatsError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        StatsError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Whether the caller sent a bad request, as opposed to the data source
    /// failing.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, StatsError::QueryFailed(_))
    }
}

pub type StatsResult<T> = Result<T, StatsError>;
