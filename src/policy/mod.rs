pub mod fcfs;
pub mod hrrn;
pub mod lrtf;
pub mod priority;
pub mod round_robin;
pub mod spn;
pub mod srtf;

use crate::core::state::{Pid, Process, SimCtx, Ticks};
use crate::sim::{ProcessSpec, Sim, SimError};

pub use fcfs::Fcfs;
pub use hrrn::Hrrn;
pub use lrtf::Lrtf;
pub use priority::{HighestPriority, PreemptiveHighestPriority};
pub use round_robin::RoundRobin;
pub use spn::Spn;
pub use srtf::Srtf;

pub type EnqueueFlags = u64;

/// Process entered the system at its arrival time.
pub const ENQ_WAKEUP: EnqueueFlags = 1 << 0;
/// Process was preempted at a slice boundary and goes back to its queue.
pub const ENQ_PREEMPT: EnqueueFlags = 1 << 1;

/// Slice used when a policy has no quantum of its own.
pub const DEFAULT_QUANTUM: Ticks = 1;

pub trait Policy {
    const NAME: &'static str;

    fn init(ctx: &mut SimCtx) -> Self;

    /// Make `pid` runnable. Called once at arrival (`ENQ_WAKEUP`) and, for
    /// preemptive policies, after every expired slice (`ENQ_PREEMPT`) --
    /// always after the arrivals of the current instant.
    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid, flags: EnqueueFlags);

    /// Pick the next process to run once the default ready queue is empty.
    /// Returning `None` leaves the CPU idle.
    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid>;
}

/// Policy selection as exposed to the menu layer; one case per discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Fcfs,
    RoundRobin { quantum: Ticks },
    Spn,
    Srtf,
    Priority,
    PreemptivePriority,
    Hrrn,
    Lrtf,
}

impl PolicyKind {
    /// Map the reference menu numbering (1-8) to a policy. Round Robin
    /// requires a positive quantum; anything else rejects one silently.
    pub fn from_choice(choice: u32, quantum: Option<i64>) -> Result<Self, SimError> {
        match choice {
            1 => Ok(Self::Fcfs),
            2 => match quantum {
                Some(q) if q > 0 => Ok(Self::RoundRobin { quantum: q as Ticks }),
                other => Err(SimError::InvalidQuantum(other.unwrap_or(0))),
            },
            3 => Ok(Self::Spn),
            4 => Ok(Self::Srtf),
            5 => Ok(Self::Priority),
            6 => Ok(Self::PreemptivePriority),
            7 => Ok(Self::Hrrn),
            8 => Ok(Self::Lrtf),
            other => Err(SimError::UnknownPolicy(other)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => Fcfs::NAME,
            Self::RoundRobin { .. } => RoundRobin::NAME,
            Self::Spn => Spn::NAME,
            Self::Srtf => Srtf::NAME,
            Self::Priority => HighestPriority::NAME,
            Self::PreemptivePriority => PreemptiveHighestPriority::NAME,
            Self::Hrrn => Hrrn::NAME,
            Self::Lrtf => Lrtf::NAME,
        }
    }
}

/// Run one full simulation of `kind` over `specs` and return the completed
/// records in arrival-sorted order.
pub fn simulate(kind: PolicyKind, specs: Vec<ProcessSpec>) -> Result<Vec<Process>, SimError> {
    match kind {
        PolicyKind::Fcfs => Ok(Sim::<Fcfs>::new(specs)?.run()),
        PolicyKind::RoundRobin { quantum } => Ok(Sim::<RoundRobin>::with_quantum(specs, quantum)?.run()),
        PolicyKind::Spn => Ok(Sim::<Spn>::new(specs)?.run()),
        PolicyKind::Srtf => Ok(Sim::<Srtf>::new(specs)?.run()),
        PolicyKind::Priority => Ok(Sim::<HighestPriority>::new(specs)?.run()),
        PolicyKind::PreemptivePriority => Ok(Sim::<PreemptiveHighestPriority>::new(specs)?.run()),
        PolicyKind::Hrrn => Ok(Sim::<Hrrn>::new(specs)?.run()),
        PolicyKind::Lrtf => Ok(Sim::<Lrtf>::new(specs)?.run()),
    }
}
