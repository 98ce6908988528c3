//! # Round Robin Simulator - Entry Point
//! src/main.rs
//!
//! Carga los procesos, corre la simulación e imprime los promedios.
//! Stdout lleva solo el reporte; logs y errores van a stderr.

use rr_sim::config::{Config, OutputFormat};
use rr_sim::error::AppError;
use rr_sim::logging;
use rr_sim::metrics::{combined_to_json, render_sweep_text, SimulationSummary};
use rr_sim::process::load_processes;
use rr_sim::scheduler::{sweep, Simulator};

fn run(config: &Config) -> Result<(), AppError> {
    config.validate().map_err(AppError::Config)?;

    let records = load_processes(&config.input)?;
    let report = Simulator::new(records.clone(), config.quantum)?.run_detailed()?;
    let summary = SimulationSummary::from_report(report, config.details);

    let results = if config.sweep.is_empty() {
        Vec::new()
    } else {
        sweep(&records, &config.sweep)
    };

    match config.format {
        OutputFormat::Text => {
            print!("{}", summary.render_text());
            if !results.is_empty() {
                println!();
                print!("{}", render_sweep_text(&results));
            }
        }
        OutputFormat::Json if results.is_empty() => println!("{}", summary.to_json()?),
        OutputFormat::Json => println!("{}", combined_to_json(&summary, &results)?),
    }

    Ok(())
}

fn main() {
    let config = Config::new();

    if let Err(e) = logging::init(config.log_level.to_level_filter()) {
        eprintln!("⚠️  Logger not installed: {}", e);
    }

    log::info!(
        "input={} quantum={} format={:?}",
        config.input.display(),
        config.quantum,
        config.format
    );

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
