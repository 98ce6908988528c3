//! # Configuración del Simulador
//! src/config.rs
//!
//! Argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./rr_sim processes.txt 3
//! ./rr_sim processes.txt 3 --details --format json
//! ./rr_sim processes.txt 3 --sweep 1,2,4,8
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! RR_LOG=debug RR_FORMAT=json ./rr_sim processes.txt 3
//! ```

use crate::process::parse_quantum;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Formato de salida del reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Nivel de log (se escribe en stderr)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Valida el quantum con las mismas reglas del loader
fn quantum_arg(s: &str) -> Result<u32, String> {
    parse_quantum(s).map_err(|e| e.to_string())
}

/// Configuración del simulador Round Robin
#[derive(Debug, Clone, Parser)]
#[command(name = "rr_sim")]
#[command(about = "Simulador de planificación Round Robin")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Archivo con la lista de procesos
    pub input: PathBuf,

    /// Longitud del quantum (decimal no negativo)
    #[arg(value_parser = quantum_arg)]
    pub quantum: u32,

    /// Formato de salida
    #[arg(long, value_enum, default_value = "text", env = "RR_FORMAT")]
    pub format: OutputFormat,

    /// Incluye detalle por proceso y línea de tiempo
    #[arg(long, env = "RR_DETAILS")]
    pub details: bool,

    /// Quantums extra a evaluar en paralelo (separados por coma)
    #[arg(long, value_delimiter = ',', value_parser = quantum_arg, env = "RR_SWEEP")]
    pub sweep: Vec<u32>,

    /// Nivel de log
    #[arg(long = "log-level", value_enum, default_value = "warn", env = "RR_LOG")]
    pub log_level: LogLevel,
}

impl Config {
    /// Parsea los argumentos del proceso
    pub fn new() -> Self {
        Config::parse()
    }

    /// Valida la configuración
    ///
    /// El quantum principal en 0 lo reporta el simulador; aquí solo se
    /// revisa lo que el simulador no ve.
    pub fn validate(&self) -> Result<(), String> {
        if self.sweep.contains(&0) {
            return Err("Sweep quantum values must be >= 1".to_string());
        }
        if self.input.as_os_str().is_empty() {
            return Err("Input path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("processes.txt"),
            quantum: 1,
            format: OutputFormat::Text,
            details: false,
            sweep: Vec::new(),
            log_level: LogLevel::Warn,
        }
    }
}
