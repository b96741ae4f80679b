pub mod core;
pub mod policy;
pub mod report;
pub mod sim;

pub use crate::core::{ProcMetrics, Process, SimEvent};
pub use policy::{simulate, Policy, PolicyKind};
pub use report::Report;
pub use sim::{ProcessSpec, Sim, SimError};
