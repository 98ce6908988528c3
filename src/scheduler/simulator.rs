//! # Simulador Round Robin
//! src/scheduler/simulator.rs
//!
//! Avanza un reloj lógico de a una unidad por vez. En cada tick:
//!
//! 1. Encola los procesos cuyo arribo es igual al reloj (en orden de entrada)
//! 2. Si el proceso en CPU agotó su quantum, lo rota al final de la cola
//! 3. Si la CPU está libre, despacha el frente de la cola
//! 4. En el primer despacho de un proceso suma su tiempo de respuesta
//! 5. Ejecuta una unidad de trabajo
//! 6. Si el proceso terminó, suma su tiempo de espera
//!
//! Los arribos de un tick entran a la cola antes que el proceso rotado por
//! quantum en ese mismo tick.

use crate::process::{ProcessRecord, ProcessState, ProcessStatus};
use crate::scheduler::error::{ConfigurationError, SimulationError};
use crate::scheduler::queue::ReadyQueue;
use serde::Serialize;

/// Totales de una corrida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationTotals {
    pub total_waiting_time: u64,
    pub total_response_time: u64,
    pub process_count: usize,
}

impl SimulationTotals {
    pub fn average_waiting_time(&self) -> f64 {
        self.total_waiting_time as f64 / self.process_count as f64
    }

    pub fn average_response_time(&self) -> f64 {
        self.total_response_time as f64 / self.process_count as f64
    }
}

/// Resultado de un proceso al final de la corrida
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessOutcome {
    pub id: u32,
    pub arrival_time: u32,
    pub burst_time: u32,

    /// Tick del primer despacho (None si nunca se despachó)
    pub first_dispatch: Option<u64>,

    pub completion_time: u64,
    pub waiting_time: u64,
    pub response_time: u64,
}

/// Intervalo continuo `[start, end)` de CPU asignado a un proceso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub process_id: u32,

    /// Posición del proceso en la entrada
    pub index: usize,

    pub start: u64,
    pub end: u64,
}

impl Slice {
    /// Unidades de CPU consumidas en el intervalo
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// Totales + detalle por proceso + línea de tiempo de la CPU
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub quantum: u32,
    pub totals: SimulationTotals,
    pub outcomes: Vec<ProcessOutcome>,
    pub timeline: Vec<Slice>,
}

/// Proceso ocupando la CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Running {
    pub index: usize,

    /// Unidades consumidas desde el último despacho
    pub slice_used: u32,
}

/// Una corrida de simulación: dueña exclusiva de los estados y la cola
#[derive(Debug, Clone)]
pub struct Simulator {
    records: Vec<ProcessRecord>,
    states: Vec<ProcessState>,
    quantum: u32,

    queue: ReadyQueue,
    running: Option<Running>,
    clock: u64,

    /// Índices con ráfaga > 0 ordenados por (arribo, posición)
    arrival_order: Vec<usize>,
    next_arrival: usize,

    /// Contador vivo de procesos incompletos
    incomplete: usize,

    total_waiting_time: u64,
    total_response_time: u64,

    /// Un intervalo por despacho; de aquí salen respuesta y finalización
    timeline: Vec<Slice>,
}

impl Simulator {
    /// Prepara una corrida
    ///
    /// # Errores
    ///
    /// `ConfigurationError` si la lista está vacía o el quantum es 0
    pub fn new(records: Vec<ProcessRecord>, quantum: u32) -> Result<Self, SimulationError> {
        if records.is_empty() {
            return Err(ConfigurationError::EmptyProcessList.into());
        }
        if quantum == 0 {
            return Err(ConfigurationError::ZeroQuantum.into());
        }

        let states: Vec<ProcessState> = records.iter().map(ProcessState::from_record).collect();

        // sort_by_key es estable: empates de arribo quedan en orden de entrada
        let mut arrival_order: Vec<usize> = (0..records.len())
            .filter(|&i| records[i].burst_time > 0)
            .collect();
        arrival_order.sort_by_key(|&i| records[i].arrival_time);

        let clock = arrival_order
            .first()
            .map(|&i| records[i].arrival_time)
            .or_else(|| records.iter().map(|r| r.arrival_time).min())
            .map(u64::from)
            .unwrap_or(0);

        let incomplete = arrival_order.len();
        let len = records.len();

        log::debug!(
            "simulator ready: {} processes ({} with work), quantum={}, start t={}",
            len,
            incomplete,
            quantum,
            clock
        );

        Ok(Self {
            records,
            states,
            quantum,
            queue: ReadyQueue::with_capacity(len),
            running: None,
            clock,
            arrival_order,
            next_arrival: 0,
            incomplete,
            total_waiting_time: 0,
            total_response_time: 0,
            timeline: Vec::new(),
        })
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn states(&self) -> &[ProcessState] {
        &self.states
    }

    pub fn running(&self) -> Option<Running> {
        self.running
    }

    pub fn ready_queue(&self) -> &ReadyQueue {
        &self.queue
    }

    pub fn is_finished(&self) -> bool {
        self.incomplete == 0
    }

    /// Totales acumulados hasta el momento
    pub fn totals(&self) -> SimulationTotals {
        SimulationTotals {
            total_waiting_time: self.total_waiting_time,
            total_response_time: self.total_response_time,
            process_count: self.records.len(),
        }
    }

    /// Ejecuta un tick completo. No hace nada si ya terminó.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        if self.is_finished() {
            return Ok(());
        }

        self.admit_arrivals()?;
        self.rotate_expired()?;
        let index = self.dispatch_if_idle()?;
        self.record_first_response(index);
        self.execute(index);

        log::trace!(
            "t={} ran P{} (remaining {}), queue={}",
            self.clock,
            self.records[index].id,
            self.states[index].remaining_time,
            self.queue.len()
        );

        self.clock += 1;
        Ok(())
    }

    /// Corre hasta terminar y retorna solo los totales
    pub fn run(self) -> Result<SimulationTotals, SimulationError> {
        self.run_detailed().map(|report| report.totals)
    }

    /// Corre hasta terminar y arma el reporte completo
    pub fn run_detailed(mut self) -> Result<SimulationReport, SimulationError> {
        while !self.is_finished() {
            self.step()?;
        }

        let totals = self.totals();
        log::info!(
            "simulation finished at t={}: waiting={}, response={}, processes={}",
            self.clock,
            totals.total_waiting_time,
            totals.total_response_time,
            totals.process_count
        );

        // (primer despacho, fin del último intervalo) por proceso
        let mut spans: Vec<Option<(u64, u64)>> = vec![None; self.records.len()];
        for slice in &self.timeline {
            let span = spans[slice.index].get_or_insert((slice.start, slice.end));
            span.1 = slice.end;
        }

        let outcomes = self
            .records
            .iter()
            .zip(spans)
            .map(|(record, span)| {
                let arrival = u64::from(record.arrival_time);
                // Ráfaga 0: completo desde su arribo, sin espera ni respuesta
                let first_dispatch = span.map(|(first, _)| first);
                let completion_time = span.map_or(arrival, |(_, last)| last);

                ProcessOutcome {
                    id: record.id,
                    arrival_time: record.arrival_time,
                    burst_time: record.burst_time,
                    first_dispatch,
                    completion_time,
                    waiting_time: completion_time - arrival - u64::from(record.burst_time),
                    response_time: first_dispatch.map_or(0, |t| t - arrival),
                }
            })
            .collect();

        Ok(SimulationReport {
            quantum: self.quantum,
            totals,
            outcomes,
            timeline: self.timeline,
        })
    }

    fn violation(&self, detail: String) -> SimulationError {
        SimulationError::InvariantViolation {
            clock: self.clock,
            incomplete: self.incomplete,
            detail,
        }
    }

    fn admit_arrivals(&mut self) -> Result<(), SimulationError> {
        while let Some(&index) = self.arrival_order.get(self.next_arrival) {
            let arrival = u64::from(self.records[index].arrival_time);
            if arrival > self.clock {
                break;
            }
            if arrival < self.clock {
                let detail = format!(
                    "P{} arrival t={} was skipped by the clock",
                    self.records[index].id, arrival
                );
                return Err(self.violation(detail));
            }

            self.queue.push_back(index).map_err(|e| self.violation(e))?;
            self.states[index].status = ProcessStatus::Ready;
            self.next_arrival += 1;

            log::debug!("t={} P{} arrived", self.clock, self.records[index].id);
        }
        Ok(())
    }

    fn rotate_expired(&mut self) -> Result<(), SimulationError> {
        let Some(running) = self.running else {
            return Ok(());
        };
        if running.slice_used < self.quantum {
            return Ok(());
        }

        let index = running.index;
        self.queue.push_back(index).map_err(|e| self.violation(e))?;
        self.states[index].status = ProcessStatus::Ready;
        self.running = None;

        log::debug!(
            "t={} P{} quantum expired, re-queued with {} remaining",
            self.clock,
            self.records[index].id,
            self.states[index].remaining_time
        );
        Ok(())
    }

    fn dispatch_if_idle(&mut self) -> Result<usize, SimulationError> {
        if let Some(running) = self.running {
            return Ok(running.index);
        }

        let Some(index) = self.queue.pop_front() else {
            return Err(self.violation("ready queue is empty".to_string()));
        };

        self.states[index].status = ProcessStatus::Running;
        self.running = Some(Running {
            index,
            slice_used: 0,
        });
        self.timeline.push(Slice {
            process_id: self.records[index].id,
            index,
            start: self.clock,
            end: self.clock,
        });

        log::debug!("t={} dispatch P{}", self.clock, self.records[index].id);
        Ok(index)
    }

    fn record_first_response(&mut self, index: usize) {
        let state = &mut self.states[index];
        if state.has_started {
            return;
        }
        state.has_started = true;

        let response = self.clock - u64::from(self.records[index].arrival_time);
        self.total_response_time += response;
    }

    fn execute(&mut self, index: usize) {
        let state = &mut self.states[index];
        if state.is_complete() {
            return;
        }
        state.remaining_time -= 1;

        if let Some(running) = self.running.as_mut() {
            running.slice_used += 1;
        }
        if let Some(slice) = self.timeline.last_mut() {
            slice.end = self.clock + 1;
        }

        if !state.is_complete() {
            return;
        }

        // Completó en este tick
        state.status = ProcessStatus::Complete;
        let record = &self.records[index];
        let completion = self.clock + 1;
        let waiting = completion - u64::from(record.arrival_time) - u64::from(record.burst_time);

        self.total_waiting_time += waiting;
        self.incomplete -= 1;
        self.running = None;

        log::debug!(
            "t={} P{} complete (waiting {})",
            completion,
            record.id,
            waiting
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32, arrival: u32, burst: u32) -> ProcessRecord {
        ProcessRecord::new(id, arrival, burst)
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = Simulator::new(vec![], 3).unwrap_err();
        assert_eq!(
            err,
            SimulationError::Configuration(ConfigurationError::EmptyProcessList)
        );
    }

    #[test]
    fn test_zero_quantum_rejected() {
        let err = Simulator::new(vec![p(1, 0, 3)], 0).unwrap_err();
        assert_eq!(err, SimulationError::Configuration(ConfigurationError::ZeroQuantum));
    }

    #[test]
    fn test_single_process() {
        let totals = Simulator::new(vec![p(1, 0, 5)], 3).unwrap().run().unwrap();
        assert_eq!(totals.total_waiting_time, 0);
        assert_eq!(totals.total_response_time, 0);
        assert_eq!(totals.process_count, 1);
    }

    #[test]
    fn test_quantum_equal_to_burst() {
        let totals = Simulator::new(vec![p(1, 0, 4), p(2, 0, 4)], 4)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(totals.total_waiting_time, 4);
        assert_eq!(totals.total_response_time, 4);
        assert_eq!(format!("{:.2}", totals.average_waiting_time()), "2.00");
        assert_eq!(format!("{:.2}", totals.average_response_time()), "2.00");
    }

    #[test]
    fn test_rotation_trace() {
        // P1 [0,2) P2 [2,4) P1 [4,6) P2 [6,7) P1 [7,8)
        let report = Simulator::new(vec![p(1, 0, 5), p(2, 1, 3)], 2)
            .unwrap()
            .run_detailed()
            .unwrap();

        let slices: Vec<(u32, u64, u64)> = report
            .timeline
            .iter()
            .map(|s| (s.process_id, s.start, s.end))
            .collect();
        assert_eq!(
            slices,
            vec![(1, 0, 2), (2, 2, 4), (1, 4, 6), (2, 6, 7), (1, 7, 8)]
        );

        assert_eq!(report.outcomes[0].completion_time, 8);
        assert_eq!(report.outcomes[0].waiting_time, 3);
        assert_eq!(report.outcomes[1].completion_time, 7);
        assert_eq!(report.outcomes[1].waiting_time, 3);
        assert_eq!(report.outcomes[1].response_time, 1);

        assert_eq!(report.totals.total_waiting_time, 6);
        assert_eq!(report.totals.total_response_time, 1);
    }

    #[test]
    fn test_arrival_queues_ahead_of_expired_process() {
        // P2 llega en t=2, justo cuando P1 agota su quantum: P2 va primero
        let report = Simulator::new(vec![p(1, 0, 4), p(2, 2, 2), p(3, 1, 1)], 2)
            .unwrap()
            .run_detailed()
            .unwrap();

        let order: Vec<u32> = report.timeline.iter().map(|s| s.process_id).collect();
        // t=1 llega P3; t=2 llega P2 y luego se rota P1 => cola [P3, P2, P1]
        assert_eq!(order, vec![1, 3, 2, 1]);
    }

    #[test]
    fn test_simultaneous_arrivals_keep_input_order() {
        let report = Simulator::new(vec![p(9, 0, 1), p(4, 0, 1), p(6, 0, 1)], 5)
            .unwrap()
            .run_detailed()
            .unwrap();

        let order: Vec<u32> = report.timeline.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![9, 4, 6]);
        assert_eq!(report.totals.total_response_time, 0 + 1 + 2);
        assert_eq!(report.totals.total_waiting_time, 0 + 1 + 2);
    }

    #[test]
    fn test_clock_starts_at_minimum_arrival() {
        let sim = Simulator::new(vec![p(1, 5, 2), p(2, 3, 2)], 1).unwrap();
        assert_eq!(sim.clock(), 3);

        let report = sim.run_detailed().unwrap();
        assert_eq!(report.timeline[0].process_id, 2);
        assert_eq!(report.timeline[0].start, 3);
    }

    #[test]
    fn test_outcomes_follow_timeline() {
        let report = Simulator::new(vec![p(1, 0, 5), p(2, 1, 3)], 2)
            .unwrap()
            .run_detailed()
            .unwrap();

        for (index, outcome) in report.outcomes.iter().enumerate() {
            let slices: Vec<&Slice> = report.timeline.iter().filter(|s| s.index == index).collect();
            assert_eq!(outcome.first_dispatch, Some(slices[0].start));
            assert_eq!(outcome.completion_time, slices[slices.len() - 1].end);

            let busy: u64 = slices.iter().map(|s| s.duration()).sum();
            assert_eq!(busy, u64::from(outcome.burst_time));
        }

        assert_eq!(report.outcomes[0].completion_time, 8);
        assert_eq!(report.outcomes[1].first_dispatch, Some(2));

        let waiting: u64 = report.outcomes.iter().map(|o| o.waiting_time).sum();
        let response: u64 = report.outcomes.iter().map(|o| o.response_time).sum();
        assert_eq!(waiting, report.totals.total_waiting_time);
        assert_eq!(response, report.totals.total_response_time);
    }

    #[test]
    fn test_zero_burst_is_never_dispatched() {
        let report = Simulator::new(vec![p(1, 0, 0), p(2, 0, 3)], 2)
            .unwrap()
            .run_detailed()
            .unwrap();

        assert!(report.timeline.iter().all(|s| s.process_id != 1));
        assert_eq!(report.outcomes[0].waiting_time, 0);
        assert_eq!(report.outcomes[0].response_time, 0);
        assert_eq!(report.outcomes[0].first_dispatch, None);
        assert_eq!(report.totals.total_waiting_time, 0);
        assert_eq!(report.totals.total_response_time, 0);
    }

    #[test]
    fn test_zero_burst_does_not_anchor_clock() {
        // El único proceso en t=0 no tiene trabajo: el reloj arranca en t=4
        let sim = Simulator::new(vec![p(1, 0, 0), p(2, 4, 2)], 2).unwrap();
        assert_eq!(sim.clock(), 4);
        let totals = sim.run().unwrap();
        assert_eq!(totals.total_waiting_time, 0);
        assert_eq!(totals.process_count, 2);
    }

    #[test]
    fn test_all_zero_burst() {
        let sim = Simulator::new(vec![p(1, 2, 0), p(2, 1, 0)], 3).unwrap();
        assert!(sim.is_finished());
        let totals = sim.run().unwrap();
        assert_eq!(totals.total_waiting_time, 0);
        assert_eq!(totals.total_response_time, 0);
    }

    #[test]
    fn test_idle_gap_is_invariant_violation() {
        let err = Simulator::new(vec![p(1, 0, 2), p(2, 10, 1)], 2)
            .unwrap()
            .run()
            .unwrap_err();

        assert!(err.is_invariant_violation());
        match err {
            SimulationError::InvariantViolation {
                clock,
                incomplete,
                detail,
            } => {
                assert_eq!(clock, 2);
                assert_eq!(incomplete, 1);
                assert!(detail.contains("ready queue is empty"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_step_state_transitions() {
        let mut sim = Simulator::new(vec![p(1, 0, 2), p(2, 1, 1)], 1).unwrap();
        assert_eq!(sim.states()[1].status, ProcessStatus::NotArrived);

        sim.step().unwrap();
        assert_eq!(sim.clock(), 1);
        assert_eq!(sim.states()[0].status, ProcessStatus::Running);
        assert_eq!(sim.states()[0].remaining_time, 1);

        // t=1: llega P2, P1 rota detrás de P2
        sim.step().unwrap();
        assert_eq!(sim.states()[1].status, ProcessStatus::Complete);
        assert_eq!(sim.states()[0].status, ProcessStatus::Ready);
        assert_eq!(sim.ready_queue().iter().collect::<Vec<_>>(), vec![0]);
        assert!(sim.running().is_none());

        sim.step().unwrap();
        assert!(sim.is_finished());

        // Pasos extra no cambian nada
        let before = sim.totals();
        sim.step().unwrap();
        assert_eq!(sim.totals(), before);
        assert_eq!(sim.clock(), 3);
    }

    #[test]
    fn test_large_arrival_times_do_not_overflow() {
        let totals = Simulator::new(vec![p(1, u32::MAX, 2), p(2, u32::MAX, 2)], 1)
            .unwrap()
            .run()
            .unwrap();
        // P1 [M,M+1) P2 [M+1,M+2) P1 [M+2,M+3) P2 [M+3,M+4)
        assert_eq!(totals.total_response_time, 1);
        assert_eq!(totals.total_waiting_time, 1 + 2);
    }
}
