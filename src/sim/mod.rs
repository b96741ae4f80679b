pub mod driver;
pub mod process;
pub mod workload;

pub use driver::{Sim, SimError};
pub use process::ProcessSpec;
