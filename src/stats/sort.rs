use super::cases::Case;
use crate::query::{col, Expr, SortOrder};

/// Ordering for a stats page: the case's truncated win rate, ties broken by
/// how many points qualified for that case, both in the same direction.
/// Rows still tied fall back to ascending player id so pages never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub case: Case,
    pub order: SortOrder,
}

impl SortKey {
    pub fn new(case: Case, order: SortOrder) -> Self {
        Self { case, order }
    }

    pub fn order_terms(&self) -> Vec<(Expr, SortOrder)> {
        vec![
            (self.case.ratio_expr(), self.order),
            (col(self.case.total_column()), self.order),
            (col("player_id"), SortOrder::Asc),
        ]
    }
}
