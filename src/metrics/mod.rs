//! # Métricas
//! src/metrics/mod.rs
//!
//! Promedios y formateo del resultado de la simulación.

pub mod report;

pub use report::{combined_to_json, render_sweep_text, SimulationSummary};
