use crate::core::{Pid, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Arrived { pid: Pid },
    Dispatched { pid: Pid },
    Preempted { pid: Pid },
    Completed { pid: Pid, at: Ticks },
    // Nothing eligible to run; clock jumped to the next arrival
    IdleJump { to: Ticks },
}
