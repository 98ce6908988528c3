//! # Errores de la Aplicación
//! src/error.rs
//!
//! Une los errores de cada capa y decide el código de salida del proceso.

use crate::process::LoadError;
use crate::scheduler::SimulationError;

/// Código de salida para entrada o configuración inválida
pub const EXIT_INVALID: i32 = 22; // EINVAL

/// Código de salida genérico
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug)]
pub enum AppError {
    /// Configuración CLI inválida
    Config(String),

    /// No se pudo cargar la lista de procesos
    Load(LoadError),

    /// La simulación falló
    Simulation(SimulationError),

    /// No se pudo serializar el reporte
    Output(serde_json::Error),
}

impl AppError {
    /// Código de salida asociado
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Load(LoadError::Io(e)) => e.raw_os_error().unwrap_or(EXIT_FAILURE),
            AppError::Config(_) | AppError::Load(_) => EXIT_INVALID,
            AppError::Simulation(e) if e.is_configuration() => EXIT_INVALID,
            AppError::Simulation(_) | AppError::Output(_) => EXIT_FAILURE,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            AppError::Load(e) => write!(f, "{}", e),
            AppError::Simulation(e) => write!(f, "{}", e),
            AppError::Output(e) => write!(f, "Cannot serialize report: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(_) => None,
            AppError::Load(e) => Some(e),
            AppError::Simulation(e) => Some(e),
            AppError::Output(e) => Some(e),
        }
    }
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        AppError::Load(e)
    }
}

impl From<SimulationError> for AppError {
    fn from(e: SimulationError) -> Self {
        AppError::Simulation(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Output(e)
    }
}
