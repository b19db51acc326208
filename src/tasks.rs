//! In-flight Requests
//!
//! Tracks the latest request per (action, target). Starting a request for a
//! key supersedes the previous one; a superseded request may still finish
//! but its result is discarded.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskAction {
    Login,
    Register,
    PlaceOrder,
    LoadMenu,
    LoadOrders,
    LoadDashboard,
    CreateMenuItem,
    UpdateMenuItem,
    DeleteMenuItem,
    ChangeOrderStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub action: TaskAction,
    pub target: String,
}

impl TaskKey {
    pub fn new(action: TaskAction, target: impl Into<String>) -> Self {
        Self {
            action,
            target: target.into(),
        }
    }
}

/// Handle for one started request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    key: TaskKey,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct TaskRegistry {
    next_generation: u64,
    latest: HashMap<TaskKey, u64>,
}

impl TaskRegistry {
    /// Start a request, superseding any earlier one with the same key
    pub fn begin(&mut self, key: TaskKey) -> Ticket {
        // Generations never repeat, even after a key is removed
        self.next_generation += 1;
        self.latest.insert(key.clone(), self.next_generation);
        Ticket {
            key,
            generation: self.next_generation,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.key) == Some(&ticket.generation)
    }

    /// Finish a request. Returns `false` when it was superseded and its
    /// result must be dropped.
    pub fn finish(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            log::debug!("[TASKS] Dropping superseded {:?}", ticket.key);
            return false;
        }
        self.latest.remove(&ticket.key);
        true
    }
}

/// Shared registry handle for components
#[derive(Clone, Default)]
pub struct Tasks(Arc<Mutex<TaskRegistry>>);

impl Tasks {
    pub fn begin(&self, action: TaskAction, target: impl Into<String>) -> Ticket {
        self.with(|r| r.begin(TaskKey::new(action, target)))
    }

    pub fn finish(&self, ticket: &Ticket) -> bool {
        self.with(|r| r.finish(ticket))
    }

    fn with<T>(&self, f: impl FnOnce(&mut TaskRegistry) -> T) -> T {
        // Single-threaded executor: a poisoned lock still holds valid data
        let mut guard = self.0.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}
