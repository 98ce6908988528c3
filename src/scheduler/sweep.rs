//! # Barrido de Quantums
//! src/scheduler/sweep.rs
//!
//! Evalúa la misma lista de procesos con varios quantums, un thread por
//! quantum. Cada corrida trabaja sobre su propia copia de los procesos.

use crate::process::ProcessRecord;
use crate::scheduler::error::SimulationError;
use crate::scheduler::simulator::{SimulationTotals, Simulator};
use std::thread;

/// Resultado de una corrida del barrido
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub quantum: u32,
    pub outcome: Result<SimulationTotals, SimulationError>,
}

/// Corre una simulación por quantum en paralelo.
///
/// Los resultados vuelven en el mismo orden que `quanta`.
pub fn sweep(records: &[ProcessRecord], quanta: &[u32]) -> Vec<SweepResult> {
    log::info!("sweeping {} quantum value(s)", quanta.len());

    thread::scope(|scope| {
        let handles: Vec<_> = quanta
            .iter()
            .map(|&quantum| {
                let records = records.to_vec();
                scope.spawn(move || SweepResult {
                    quantum,
                    outcome: Simulator::new(records, quantum).and_then(Simulator::run),
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
