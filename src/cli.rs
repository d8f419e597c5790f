use clap::{Args, Parser, Subcommand};

use crate::stats::StatsParams;

#[derive(Parser, Debug)]
#[command(author, version, about = "tennis point-by-point stats backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Run one stats query against the database and print the JSON response
    Query(QueryArgs),
    /// Create missing tables and indexes
    InitSchema,
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct QueryArgs {
    /// Tour type: atp or wta
    #[arg(long = "type")]
    pub tour: Option<String>,
    /// singles or doubles
    #[arg(long)]
    pub group: Option<String>,
    /// Ranking bucket (1 = ranks 1-100, 2 = 101-200, ...)
    #[arg(long)]
    pub ranking: Option<i64>,
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub courtid: Option<i64>,
    /// Tournament rank category
    #[arg(long)]
    pub rank: Option<i64>,
    /// case1, case2, case3 or case4
    #[arg(long)]
    pub sort_by: Option<String>,
    /// ASC or DESC
    #[arg(long)]
    pub sort_order: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub page_number: Option<i64>,
    #[arg(long)]
    pub page_size: Option<i64>,
}

impl From<QueryArgs> for StatsParams {
    fn from(args: QueryArgs) -> Self {
        StatsParams {
            tour: args.tour,
            page_number: args.page_number,
            page_size: args.page_size,
            group: args.group,
            ranking: args.ranking,
            year: args.year,
            court_id: args.courtid,
            rank: args.rank,
            sort_by: args.sort_by,
            sort_order: args.sort_order,
        }
    }
}
