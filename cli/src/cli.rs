use std::num::NonZeroU32;

use clap::{Parser, Subcommand};

use catfact_core::{ClientConfig, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
#[command(name = "catfact", version, about = "Random cat facts from the Cat Fact API")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL, help = "API base URL")]
    pub base_url: String,
    #[arg(long, global = true, help = "Request timeout in seconds (transport default if unset)")]
    pub timeout_secs: Option<u64>,
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print one random fact
    Fact {
        #[arg(long, help = "Longest acceptable fact, in characters")]
        max_length: Option<u32>,
    },
    /// List cat breeds
    Breeds {
        #[arg(long, help = "Maximum number of breeds to return (at least 1)")]
        limit: Option<NonZeroU32>,
    },
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
