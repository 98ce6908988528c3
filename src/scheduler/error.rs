//! # Errores del Simulador
//! src/scheduler/error.rs

/// Configuración inválida: la simulación no debe correr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Lista de procesos vacía
    EmptyProcessList,

    /// Quantum de longitud 0
    ZeroQuantum,
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::EmptyProcessList => write!(f, "Process list is empty"),
            ConfigurationError::ZeroQuantum => write!(f, "Quantum length must be >= 1"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Errores que puede reportar una corrida
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Entrada o quantum inválidos
    Configuration(ConfigurationError),

    /// Estado imposible para una entrada bien formada
    /// (ej: despachar con la cola ready vacía)
    InvariantViolation {
        clock: u64,
        incomplete: usize,
        detail: String,
    },
}

impl SimulationError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, SimulationError::Configuration(_))
    }

    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, SimulationError::InvariantViolation { .. })
    }
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::Configuration(e) => write!(f, "Configuration error: {}", e),
            SimulationError::InvariantViolation {
                clock,
                incomplete,
                detail,
            } => write!(
                f,
                "Invariant violation at t={}: {} ({} process(es) incomplete)",
                clock, detail, incomplete
            ),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Configuration(e) => Some(e),
            SimulationError::InvariantViolation { .. } => None,
        }
    }
}

impl From<ConfigurationError> for SimulationError {
    fn from(e: ConfigurationError) -> Self {
        SimulationError::Configuration(e)
    }
}
