//! Deterrence Bargaining Simulation
//!
//! Thin driver around the engine: runs rounds until the requested count or
//! until fewer than two countries remain, printing a status table per round
//! and optionally writing every interaction record to a JSONL file.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use deterrence_core::events::{InteractionOutcome, RoundReport};
use deterrence_core::{RecordLogger, RunStats, SimConfig, Simulation};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "deterrence_sim")]
#[command(about = "A deterrence bargaining simulation with imperfect information")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of rounds to simulate
    #[arg(long, default_value_t = 5)]
    rounds: u32,

    /// Number of countries (overrides the config file)
    #[arg(long)]
    countries: Option<u32>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every interaction record to this JSONL file
    #[arg(long)]
    records_out: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(countries) = args.countries {
        config.num_countries = countries;
    }

    println!("Deterrence Bargaining Simulation");
    println!("================================");
    println!("Seed: {}", args.seed);
    println!("Countries: {}", config.num_countries);
    println!("Rounds: {}", args.rounds);

    let mut sim = Simulation::new(config, args.seed)?;
    let mut stats = RunStats::new(sim.roster().total_active_value());
    let mut logger = match &args.records_out {
        Some(path) => RecordLogger::new(path)?,
        None => RecordLogger::null(),
    };

    println!("\nInitial state:");
    print_status(&sim);

    for _ in 0..args.rounds {
        if !sim.has_viable_pairing() {
            println!("\nNot enough active countries to continue.");
            break;
        }

        let report = sim.run_round()?;
        logger.log_round(&report)?;
        print_round(&report);
        print_status(&sim);
        stats.record_round(&report);
    }

    logger.flush()?;
    if let Some(path) = &args.records_out {
        println!("\nWrote {} records to {}", logger.record_count(), path.display());
    }

    let summary = stats.summary(sim.run_id(), sim.seed(), sim.roster().active_count() as u32);
    println!("\nRun summary:");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

/// Prints the current status of every country.
fn print_status(sim: &Simulation) {
    println!("{:-<44}", "");
    println!("{:<12} {:>15}   {:<10}", "Country", "Private Value", "Status");
    println!("{:-<44}", "");
    for country in sim.roster().countries() {
        let status = if country.active { "Active" } else { "Removed" };
        println!(
            "{:<12} {:>15.2}   {:<10}",
            country.id.to_string(),
            country.private_value,
            status
        );
    }
}

/// Prints the outcome lines for one round.
fn print_round(report: &RoundReport) {
    println!("\nRound {} ({:?} era) results:", report.round, report.era);

    for record in &report.records {
        match &record.outcome {
            InteractionOutcome::BargainStruck {
                first_gain,
                second_gain,
                ..
            } => {
                println!(
                    "  {} and {} bargained (+{:.2} / +{:.2})",
                    record.first, record.second, first_gain, second_gain
                );
            }
            InteractionOutcome::AttackSucceeded {
                attacker,
                defender,
                attacker_value,
                ..
            } => {
                println!(
                    "  {} conquered {} (value now {:.2}); {} removed",
                    attacker, defender, attacker_value, defender
                );
            }
            InteractionOutcome::AttackRepelled {
                attacker,
                defender,
                attacker_value,
                defender_value,
                ..
            } => {
                println!(
                    "  {} attacked {} but was repelled ({:.2} / {:.2})",
                    attacker, defender, attacker_value, defender_value
                );
            }
        }
    }

    let agg = &report.aggregates;
    println!(
        "  totals: {} interactions, {} bargains, {} attacks, {} eliminated, value {:.2} -> {:.2} ({:+.2}%)",
        agg.interactions_executed,
        agg.bargains,
        agg.attacks,
        report.eliminated.len(),
        agg.total_value_start,
        agg.total_value_end,
        agg.percent_change()
    );
}
