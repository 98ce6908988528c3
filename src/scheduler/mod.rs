//! # Planificador Round Robin
//! src/scheduler/mod.rs
//!
//! Núcleo de la simulación: cola ready, simulador por ticks y barrido de
//! quantums.

pub mod error;
pub mod queue;
pub mod simulator;
pub mod sweep;

pub use error::{ConfigurationError, SimulationError};
pub use queue::ReadyQueue;
pub use simulator::{
    ProcessOutcome, Running, SimulationReport, SimulationTotals, Simulator, Slice,
};
pub use sweep::{sweep, SweepResult};
