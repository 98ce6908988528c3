//! # Cola Ready
//! src/scheduler/queue.rs
//!
//! Cola FIFO de índices estables hacia el arreglo de estados del simulador.
//! Un índice solo puede estar una vez en la cola.

use std::collections::VecDeque;

/// Cola FIFO de procesos listos para correr
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    /// Índices en orden de llegada a la cola
    items: VecDeque<usize>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Encola al final.
    ///
    /// Retorna Err si el índice ya estaba encolado.
    pub fn push_back(&mut self, index: usize) -> Result<(), String> {
        if self.contains(index) {
            return Err(format!("Process index {} is already queued", index));
        }
        self.items.push_back(index);
        Ok(())
    }

    /// Saca el proceso del frente
    pub fn pop_front(&mut self) -> Option<usize> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.items.contains(&index)
    }

    /// Recorre la cola del frente hacia el final
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }
}
