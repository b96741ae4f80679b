pub mod driver;
pub mod event;
pub mod metrics;
pub mod observer;
pub mod state;

pub use driver::{SimCore, TickOutcome};
pub use event::SimEvent;
pub use metrics::{MetricsError, ProcMetrics};
pub use state::{Pid, Priority, ProcState, Process, QueueId, Rank, RunQueue, SimCtx, Ticks};
