//! Seed script: populates the domain stores with the demo clinic.
//!
//! Run with: cargo run --bin seed-data -- run [domain]
//!
//! With no domain argument, seeds all four domains in dependency order
//! (auth, hr, inventory, marketing). With a domain argument, seeds only
//! that domain. Refuses to run when the environment is production.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use clinicore_api::config;
use clinicore_api::fixtures::FixtureSet;
use clinicore_api::seed::{Domain, SeedOrchestrator};

#[derive(Parser)]
#[command(name = "seed-data", about = "Seed the clinic domain stores with demo data", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed all domains, or a single one
    Run {
        /// One of: auth, hr, inventory, marketing
        domain: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    let cfg = config::load_config().context("failed to load configuration")?;
    let orchestrator = SeedOrchestrator::new(cfg, FixtureSet::demo());

    match cli.command {
        Commands::Run { domain: None } => {
            info!("=== Clinicore demo seed: all domains ===");
            let overall = orchestrator.run_all().await?;
            info!(
                created = overall.total_created(),
                skipped = overall.total_skipped(),
                appended = overall.total_appended(),
                "=== Seed complete ==="
            );
        }
        Commands::Run {
            domain: Some(name),
        } => {
            // Unknown domain names are a usage error: nothing is attempted.
            let domain = match Domain::parse(&name) {
                Ok(domain) => domain,
                Err(err) => {
                    error!("{err}");
                    eprintln!("usage: seed-data run [auth|hr|inventory|marketing]");
                    std::process::exit(2);
                }
            };

            info!(domain = %domain, "=== Clinicore demo seed: single domain ===");
            let report = orchestrator.run_one(domain).await?;
            info!(
                domain = %domain,
                created = report.created,
                skipped = report.skipped,
                appended = report.appended,
                "=== Seed complete ==="
            );
        }
    }

    Ok(())
}
