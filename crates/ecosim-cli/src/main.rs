//! Demonstration driver: seeds the demo ecosystem, shows its status,
//! advances it and shows the status again.

mod telemetry;

use anyhow::Result;
use clap::Parser;
use ecosim_core::{ReproductionPolicy, SimulationConfig};
use ecosim_world::seed::demo_population;
use ecosim_world::{Ecosystem, StatusReport};
use tracing::info;

#[derive(Parser)]
#[command(name = "ecosim")]
#[command(version)]
#[command(about = "Animals, plants and microorganisms living through simulated days")]
struct Cli {
    /// Number of days to simulate (overrides ECOSIM_DAYS)
    #[arg(short, long)]
    days: Option<u64>,

    /// What happens to offspring: announce, deferred or disabled
    /// (overrides ECOSIM_REPRODUCTION)
    #[arg(short, long)]
    reproduction: Option<ReproductionPolicy>,

    /// Print status snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_logging(cli.log_json)?;

    let config = resolve_config(&cli)?;
    let mut ecosystem = Ecosystem::from_specs(config, demo_population())?;

    let days = ecosystem.config().days;
    info!(
        days = days,
        reproduction = %ecosystem.config().reproduction,
        "Starting ecosim"
    );

    print_status(&ecosystem.display_status(), cli.json)?;

    let summary = ecosystem.run(days);
    if !cli.json {
        for report in &summary.days {
            for line in report.narration() {
                println!("{}", line);
            }
        }
    }

    print_status(&ecosystem.display_status(), cli.json)?;

    info!(
        population = summary.final_stats.total,
        total_energy = summary.final_stats.total_energy,
        "Simulation finished"
    );

    Ok(())
}

/// Defaults, then environment, then flags. A flag that is given stops the
/// matching variable from being read at all.
fn resolve_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config = SimulationConfig::default()
        .apply_env_except(cli.days.is_some(), cli.reproduction.is_some())?;

    if let Some(days) = cli.days {
        config.days = days;
    }
    if let Some(policy) = cli.reproduction {
        config.reproduction = policy;
    }
    Ok(config)
}

fn print_status(status: &StatusReport, json: bool) -> Result<()> {
    if json {
        println!("{}", status.to_json()?);
    } else {
        print!("{}", status);
    }
    Ok(())
}
