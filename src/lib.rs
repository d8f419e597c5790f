pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod query;
pub mod services;
pub mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

use crate::cli::{Command, QueryArgs};
use crate::config::settings::AppConfig;
use crate::services::server::ServerService;
use crate::stats::StatsService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_query(args: QueryArgs) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let service = StatsService::new(pool, config.stats);

    let response = service.get_stats(args.into())?;
    let json = serde_json::to_string_pretty(&response).context("Failed to encode stats")?;
    println!("{json}");
    Ok(())
}

pub fn handle_init_schema() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.server.database_path)?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::init_schema(&mut conn)
}
