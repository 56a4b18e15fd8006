use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quill")]
#[command(
    author,
    version,
    about = "A minimal GraphQL API for blog drafts and published posts"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs into this directory (daily rotation)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on (falls back to the PORT env var, then 8080)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL document against a freshly seeded store
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query or mutation document
        document: String,
    },

    /// Print the schema in GraphQL SDL
    Schema,
}
