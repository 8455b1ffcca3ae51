//! Opttab MCP - demonstration client
//!
//! Walks through the Opttab AI model API using the credentials from the
//! configuration file. An alternative config path may be passed as the
//! first argument. A missing config file is created with placeholder
//! credentials to edit.

use opttab_mcp::{App, Config, Error};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opttab_mcp=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Http { status, body }) => {
            println!("API Error: {}", status);
            println!("Response: {}", body);
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> opttab_mcp::Result<()> {
    // Load configuration
    let config = Config::load_or_init(std::env::args_os().nth(1).map(PathBuf::from))?;

    let app = App::new(config)?;
    app.run(&mut std::io::stdout()).await
}
