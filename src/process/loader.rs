//! # Loader del Archivo de Procesos
//! src/process/loader.rs
//!
//! Lee la lista de procesos desde un archivo de texto.
//!
//! ## Formato
//!
//! ```text
//! 3
//! 1, 0, 7
//! 2, 2, 4
//! 3, 4, 1
//! ```
//!
//! Un entero es cualquier secuencia de dígitos ASCII; todo lo demás actúa
//! como separador. El primer entero es la cantidad N de procesos y luego
//! vienen N tripletas `(id, arribo, ráfaga)`. Lo que siga a la última
//! tripleta se ignora.

use crate::process::types::ProcessRecord;
use regex::bytes::Regex;
use std::fs;
use std::path::Path;

/// Errores al cargar procesos o el quantum
#[derive(Debug)]
pub enum LoadError {
    /// No se pudo abrir o leer el archivo
    Io(std::io::Error),

    /// Se acabó la entrada buscando otro entero
    UnexpectedEof { expected: &'static str, index: usize },

    /// El número no cabe en u32
    IntegerOverflow(String),

    /// El quantum no es un decimal no negativo puro
    InvalidQuantum(String),

    /// No compiló el patrón de enteros
    Pattern(regex::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Cannot read process list: {}", e),
            LoadError::UnexpectedEof { expected, index } => write!(
                f,
                "Reached end of file while looking for another integer ({} of process {})",
                expected, index
            ),
            LoadError::IntegerOverflow(s) => write!(f, "Integer out of range: {}", s),
            LoadError::InvalidQuantum(s) => write!(f, "Invalid quantum length: {:?}", s),
            LoadError::Pattern(e) => write!(f, "Invalid integer pattern: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<regex::Error> for LoadError {
    fn from(e: regex::Error) -> Self {
        LoadError::Pattern(e)
    }
}

/// Secuencias de dígitos ASCII (no `\d`, que acepta dígitos Unicode)
const DIGIT_RUNS: &str = r"[0-9]+";

/// Convierte una secuencia de dígitos ASCII a u32, detectando overflow
fn digits_to_u32(digits: &[u8]) -> Result<u32, LoadError> {
    digits
        .iter()
        .try_fold(0u32, |acc, &b| {
            acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
        })
        .ok_or_else(|| LoadError::IntegerOverflow(String::from_utf8_lossy(digits).into_owned()))
}

/// Iterador de enteros sobre la entrada cruda
struct IntStream<'r, 'h> {
    matches: regex::bytes::Matches<'r, 'h>,
}

impl<'r, 'h> IntStream<'r, 'h> {
    fn new(pattern: &'r Regex, data: &'h [u8]) -> Self {
        Self {
            matches: pattern.find_iter(data),
        }
    }

    fn next_int(&mut self, expected: &'static str, index: usize) -> Result<u32, LoadError> {
        match self.matches.next() {
            Some(m) => digits_to_u32(m.as_bytes()),
            None => Err(LoadError::UnexpectedEof { expected, index }),
        }
    }
}

/// Parsea la lista de procesos desde el contenido del archivo
///
/// # Errores
///
/// Falla si faltan enteros o alguno no cabe en u32. Una lista con
/// cantidad 0 se acepta aquí; el simulador la rechaza después.
pub fn parse_processes(data: &[u8]) -> Result<Vec<ProcessRecord>, LoadError> {
    let pattern = Regex::new(DIGIT_RUNS)?;
    let mut ints = IntStream::new(&pattern, data);
    let count = ints.next_int("process count", 0)?;

    // La capacidad la limita el tamaño real de la entrada, no el header
    let mut records = Vec::with_capacity((count as usize).min(data.len() / 6 + 1));

    for index in 0..count as usize {
        let id = ints.next_int("id", index)?;
        let arrival_time = ints.next_int("arrival time", index)?;
        let burst_time = ints.next_int("burst time", index)?;
        records.push(ProcessRecord::new(id, arrival_time, burst_time));
    }

    log::debug!("parsed {} process records", records.len());
    Ok(records)
}

/// Lee y parsea el archivo completo
pub fn load_processes<P: AsRef<Path>>(path: P) -> Result<Vec<ProcessRecord>, LoadError> {
    let path = path.as_ref();
    log::info!("loading processes from {}", path.display());

    let data = fs::read(path)?;
    parse_processes(&data)
}

/// Parsea el quantum: solo dígitos ASCII, sin signo ni espacios
pub fn parse_quantum(s: &str) -> Result<u32, LoadError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LoadError::InvalidQuantum(s.to_string()));
    }

    digits_to_u32(s.as_bytes()).map_err(|_| LoadError::InvalidQuantum(s.to_string()))
}
