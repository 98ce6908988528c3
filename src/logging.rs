//! # Logger
//! src/logging.rs
//!
//! Configura `env_logger` como backend de la fachada `log`. Escribe
//! `LEVEL - mensaje` en stderr para no mezclarse con el reporte en stdout.

use env_logger::{Builder, Target};
use log::{LevelFilter, SetLoggerError};
use std::io::Write;

/// Arma el builder con el formato y destino del simulador
fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} - {}", record.level(), record.args()));
    builder
}

/// Instala el logger. Solo puede llamarse una vez por proceso.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    builder(level).try_init()
}
