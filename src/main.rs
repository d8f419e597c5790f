use anyhow::Result;

use pbp_stats::cli::Command;
use pbp_stats::{handle_init_schema, handle_query, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(port),
        Command::Query(args) => handle_query(args),
        Command::InitSchema => handle_init_schema(),
    }
}
