//! CLI interface for Daybook

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "daybook")]
#[command(version = "0.1.0")]
#[command(about = "Personal notes and calendar backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new daybook.toml configuration file
    Init,

    /// Start the HTTP API server
    Serve {
        /// Host to bind to (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Reset the database and fill it with sample data
    Seed {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
