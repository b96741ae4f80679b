use super::{EnqueueFlags, Policy};
use crate::core::state::{Pid, SimCtx};

/// Round Robin: one shared FIFO, every dispatch bounded by the quantum.
/// FIFO fairness across arrivals and preemptions comes from the enqueue
/// order the simulation layer guarantees: processes arriving during or at
/// the end of a slice enter the queue before the process that was preempted.
pub struct RoundRobin;

impl Policy for RoundRobin {
    const NAME: &'static str = "Round Robin";

    fn init(_ctx: &mut SimCtx) -> Self {
        Self
    }

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid, flags: EnqueueFlags) {
        let _ = flags;
        let slice = ctx.quantum;
        ctx.queue_push_fifo(ctx.ready_queue(), pid, slice);
    }

    fn dispatch(&mut self, _ctx: &mut SimCtx) -> Option<Pid> {
        None
    }
}
