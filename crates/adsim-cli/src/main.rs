//! AdSim command-line runner
//!
//! Runs one A/B simulation from default form values plus overrides and
//! prints the report.

mod overrides;

use adsim_engine::SimulationSession;
use adsim_report::{JsonRenderer, ReportRenderer, SimulationReport, TextRenderer};
use adsim_types::ScenarioInput;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::overrides::{apply_overrides, Overrides};

#[derive(Parser, Debug)]
#[command(name = "adsim", version, about = "Compare two marketing scenarios")]
struct Args {
    /// Overrides for scenario A, e.g. `spend=20000,ctr=3.1` (repeatable)
    #[arg(long = "a", value_name = "KEY=VALUE,...")]
    scenario_a: Vec<Overrides>,

    /// Overrides for scenario B (repeatable)
    #[arg(long = "b", value_name = "KEY=VALUE,...")]
    scenario_b: Vec<Overrides>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let scenario_a = apply_overrides(ScenarioInput::default(), &args.scenario_a)?;
    let scenario_b = apply_overrides(ScenarioInput::default(), &args.scenario_b)?;
    scenario_a.validate()?;
    scenario_b.validate()?;

    let mut session = SimulationSession::new();
    let report = SimulationReport::build(session.run(scenario_a, scenario_b))?;
    tracing::info!(fingerprint = %report.fingerprint, "simulation complete");

    let rendered = if args.json {
        JsonRenderer.render(&report)?
    } else {
        TextRenderer.render(&report)?
    };
    print!("{rendered}");
    Ok(())
}
