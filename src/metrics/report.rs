//! # Reporte de la Simulación
//! src/metrics/report.rs
//!
//! Convierte los totales enteros del simulador en promedios y los
//! formatea como texto o JSON.

use crate::scheduler::{ProcessOutcome, SimulationReport, SimulationTotals, Slice, SweepResult};
use serde::Serialize;
use std::fmt::Write;

/// Resumen listo para imprimir
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub quantum: u32,
    pub process_count: usize,
    pub total_waiting_time: u64,
    pub total_response_time: u64,
    pub average_waiting_time: f64,
    pub average_response_time: f64,

    /// Detalle por proceso (solo con --details)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processes: Option<Vec<ProcessOutcome>>,

    /// Línea de tiempo de la CPU (solo con --details)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<Slice>>,
}

impl SimulationSummary {
    pub fn from_totals(quantum: u32, totals: SimulationTotals) -> Self {
        Self {
            quantum,
            process_count: totals.process_count,
            total_waiting_time: totals.total_waiting_time,
            total_response_time: totals.total_response_time,
            average_waiting_time: totals.average_waiting_time(),
            average_response_time: totals.average_response_time(),
            processes: None,
            timeline: None,
        }
    }

    pub fn from_report(report: SimulationReport, details: bool) -> Self {
        let mut summary = Self::from_totals(report.quantum, report.totals);
        if details {
            summary.processes = Some(report.outcomes);
            summary.timeline = Some(report.timeline);
        }
        summary
    }

    /// Formato de texto: las dos líneas de promedios y, si hay, el detalle
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Average waiting time: {:.2}", self.average_waiting_time);
        let _ = writeln!(out, "Average response time: {:.2}", self.average_response_time);

        if let Some(processes) = &self.processes {
            out.push('\n');
            out.push_str(&render_process_table(processes));
        }
        if let Some(timeline) = &self.timeline {
            out.push('\n');
            out.push_str(&render_timeline(timeline));
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn render_process_table(processes: &[ProcessOutcome]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "┌────────┬─────────┬───────┬────────────┬─────────┬──────────┐");
    let _ = writeln!(out, "│ PID    │ Arrival │ Burst │ Completion │ Waiting │ Response │");
    let _ = writeln!(out, "├────────┼─────────┼───────┼────────────┼─────────┼──────────┤");
    for p in processes {
        let _ = writeln!(
            out,
            "│ {:<6} │ {:>7} │ {:>5} │ {:>10} │ {:>7} │ {:>8} │",
            p.id, p.arrival_time, p.burst_time, p.completion_time, p.waiting_time, p.response_time
        );
    }
    let _ = writeln!(out, "└────────┴─────────┴───────┴────────────┴─────────┴──────────┘");
    out
}

fn render_timeline(timeline: &[Slice]) -> String {
    let mut out = String::from("Timeline:\n");
    for slice in timeline {
        let _ = writeln!(
            out,
            "  [{:>4}, {:>4})  P{}",
            slice.start, slice.end, slice.process_id
        );
    }
    out
}

/// Fila del barrido para JSON
#[derive(Debug, Clone, Serialize)]
struct SweepEntry {
    quantum: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<SimulationSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn sweep_entries(results: &[SweepResult]) -> Vec<SweepEntry> {
    results
        .iter()
        .map(|r| match &r.outcome {
            Ok(totals) => SweepEntry {
                quantum: r.quantum,
                summary: Some(SimulationSummary::from_totals(r.quantum, *totals)),
                error: None,
            },
            Err(e) => SweepEntry {
                quantum: r.quantum,
                summary: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

/// Tabla de texto con una fila por quantum
pub fn render_sweep_text(results: &[SweepResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "┌──────────┬─────────────┬──────────────┐");
    let _ = writeln!(out, "│ Quantum  │ Avg Waiting │ Avg Response │");
    let _ = writeln!(out, "├──────────┼─────────────┼──────────────┤");
    for result in results {
        match &result.outcome {
            Ok(totals) => {
                let _ = writeln!(
                    out,
                    "│ {:>8} │ {:>11.2} │ {:>12.2} │",
                    result.quantum,
                    totals.average_waiting_time(),
                    totals.average_response_time()
                );
            }
            Err(e) => {
                let _ = writeln!(out, "│ {:>8} │ error: {}", result.quantum, e);
            }
        }
    }
    let _ = writeln!(out, "└──────────┴─────────────┴──────────────┘");
    out
}

/// Corrida principal + barrido en un solo documento JSON
#[derive(Debug, Serialize)]
struct CombinedReport<'a> {
    run: &'a SimulationSummary,
    sweep: Vec<SweepEntry>,
}

pub fn combined_to_json(
    summary: &SimulationSummary,
    results: &[SweepResult],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CombinedReport {
        run: summary,
        sweep: sweep_entries(results),
    })
}
