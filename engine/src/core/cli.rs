use clap::{Parser, Subcommand};

use super::constants::{ENV_API_URL, ENV_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "prevently")]
#[command(version, about = "Market sentiment filter engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the sentiment API
    #[arg(long, global = true, env = ENV_API_URL)]
    pub api_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a filter query and print the serialized API request
    Parse {
        /// Filter query, e.g. `domain:finance AND company:"Acme Corp"`
        query: String,
    },
    /// Parse a filter query and run it against the analytics endpoint
    Query {
        /// Filter query, e.g. `sentiment:negative AND date:2024-01-01..2024-01-31`
        query: String,
    },
    /// List the available market domains
    Domains,
    /// List the known company names
    Companies,
}

pub fn parse() -> Cli {
    Cli::parse()
}
