//! # Round Robin Simulator
//! src/lib.rs
//!
//! Simulador de planificación de CPU Round Robin sobre un conjunto fijo de
//! procesos conocidos de antemano. Calcula el tiempo de espera y el tiempo
//! de respuesta promedio para un quantum dado.
//!
//! ## Arquitectura
//!
//! - `process`: Registros de procesos, estado de simulación y loader del archivo
//! - `scheduler`: Cola ready, simulador paso a paso y barrido de quantums
//! - `metrics`: Reporte final (promedios, detalle por proceso, JSON)
//! - `config`: Argumentos CLI y variables de entorno
//! - `logging`: Logger mínimo sobre la fachada `log`
//! - `error`: Errores de la aplicación y códigos de salida
//!
//! ## Ejemplo de uso
//!
//! ```
//! use rr_sim::process::ProcessRecord;
//! use rr_sim::scheduler::Simulator;
//!
//! let records = vec![
//!     ProcessRecord::new(1, 0, 4),
//!     ProcessRecord::new(2, 0, 4),
//! ];
//! let totals = Simulator::new(records, 4).unwrap().run().unwrap();
//! assert_eq!(totals.total_waiting_time, 4);
//! assert_eq!(totals.total_response_time, 4);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod process;
pub mod scheduler;
