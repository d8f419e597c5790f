pub mod connection;
pub mod games;
pub mod models;
pub mod players;
pub mod pointstats;
pub mod setup;
pub mod tournaments;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use models::*;
