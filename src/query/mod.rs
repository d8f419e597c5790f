//! Structured SQL building: predicates, selects and CTE queries are assembled
//! as values and rendered to SQLite text with every value bound as a
//! positional parameter.

pub mod expr;
pub mod render;
pub mod select;

pub use expr::{col, param, CompareOp, Expr, Predicate};
pub use render::RenderedQuery;
pub use select::{Projection, Query, Select, SortOrder, TableRef};
