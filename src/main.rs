use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use quill::cli::{Cli, Commands};
use quill::graphql::build_schema;
use quill::store::PostStore;
use quill::{config, graphql, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_dir.as_deref());

    match cli.command {
        Commands::Serve { port } => {
            let port = match port {
                Some(p) => p,
                None => config::port_from_env()?,
            };
            let schema = build_schema(Arc::new(PostStore::seeded()));

            tokio::runtime::Runtime::new()?.block_on(async {
                let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

                println!(
                    "{} at http://localhost:{}",
                    "GraphQL server ready".green(),
                    port
                );
                println!("GraphiQL playground: http://localhost:{}", port);

                graphql::run_server(schema, listener).await
            })?;
            Ok(())
        }
        Commands::Query { document } => {
            let schema = build_schema(Arc::new(PostStore::seeded()));
            let response = tokio::runtime::Runtime::new()?
                .block_on(async { schema.execute(document.as_str()).await });

            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Commands::Schema => {
            let schema = build_schema(Arc::new(PostStore::new()));
            println!("{}", schema.sdl());
            Ok(())
        }
    }
}
