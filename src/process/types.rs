//! # Tipos del Modelo de Procesos
//! src/process/types.rs
//!
//! Define el registro inmutable de entrada y el estado mutable que el
//! simulador le agrega a cada proceso durante una corrida.

use serde::{Deserialize, Serialize};

/// Estado lógico de un proceso dentro de la simulación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Todavía no llegó su tiempo de arribo
    NotArrived,

    /// En la cola ready esperando CPU
    Ready,

    /// Ocupando la CPU
    Running,

    /// Terminó su ráfaga (estado terminal)
    Complete,
}

/// Registro de entrada: identidad del proceso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Identificador (solo se usa para reportes)
    pub id: u32,

    /// Tick en el que el proceso pasa a ser elegible
    pub arrival_time: u32,

    /// Unidades de CPU que necesita en total
    pub burst_time: u32,
}

impl ProcessRecord {
    pub fn new(id: u32, arrival_time: u32, burst_time: u32) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// Estado mutable de un proceso, propiedad exclusiva del simulador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessState {
    /// Unidades de CPU que todavía debe
    pub remaining_time: u32,

    /// Se vuelve true la primera vez que se despacha
    pub has_started: bool,

    pub status: ProcessStatus,
}

impl ProcessState {
    /// Crea el estado inicial a partir del registro.
    ///
    /// Un proceso con ráfaga 0 nace completo: nunca entra a la cola.
    pub fn from_record(record: &ProcessRecord) -> Self {
        let status = if record.burst_time == 0 {
            ProcessStatus::Complete
        } else {
            ProcessStatus::NotArrived
        };

        Self {
            remaining_time: record.burst_time,
            has_started: false,
            status,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_record() {
        let record = ProcessRecord::new(7, 3, 5);
        let state = ProcessState::from_record(&record);

        assert_eq!(state.remaining_time, 5);
        assert!(!state.has_started);
        assert_eq!(state.status, ProcessStatus::NotArrived);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_zero_burst_starts_complete() {
        let state = ProcessState::from_record(&ProcessRecord::new(1, 0, 0));
        assert_eq!(state.status, ProcessStatus::Complete);
        assert!(state.is_complete());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ProcessStatus::NotArrived).unwrap();
        assert_eq!(json, "\"not_arrived\"");
        let json = serde_json::to_string(&ProcessStatus::Complete).unwrap();
        assert_eq!(json, "\"complete\"");
    }

    #[test]
    fn test_record_roundtrip_json() {
        let record = ProcessRecord::new(2, 10, 4);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"arrival_time\":10"));

        let back: ProcessRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
