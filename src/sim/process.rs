use crate::core::state::{Priority, Ticks};

/// Static input for one process: what the simulation is given before any
/// clock tick happens. Runtime state lives in `core::state::Process`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub name: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
}

impl ProcessSpec {
    pub fn new(name: impl Into<String>, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
