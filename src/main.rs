//! Entry point for the attendance and leave services.
//!
//! ```bash
//! employee-management attendance   # attendance tracking service
//! employee-management leave        # leave management service
//! ```

use employee_management::config;
use employee_management::server::{self, ServiceKind};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Employee attendance and leave services.
#[derive(Parser)]
#[command(name = "employee-management")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the attendance tracking service
    Attendance,
    /// Run the leave management service
    Leave,
}

impl From<Commands> for ServiceKind {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Attendance => ServiceKind::Attendance,
            Commands::Leave => ServiceKind::Leave,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config, cli.command.into()).await
}

fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
