//! # Modelo de Procesos
//! src/process/mod.rs
//!
//! Registros de entrada, estado por proceso y lectura del archivo.

pub mod loader;
pub mod types;

pub use loader::{load_processes, parse_processes, parse_quantum, LoadError};
pub use types::{ProcessRecord, ProcessState, ProcessStatus};
