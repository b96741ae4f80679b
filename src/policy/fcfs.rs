use super::{EnqueueFlags, Policy};
use crate::core::state::{Pid, SimCtx};

/// First Come First Serve: arrival order off the default ready queue, each
/// process running uninterrupted for its whole burst.
pub struct Fcfs;

impl Policy for Fcfs {
    const NAME: &'static str = "FCFS";

    fn init(_ctx: &mut SimCtx) -> Self {
        Self
    }

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid, flags: EnqueueFlags) {
        let _ = flags;
        let slice = ctx.proc(pid).remaining;
        ctx.queue_push_fifo(ctx.ready_queue(), pid, slice);
    }

    fn dispatch(&mut self, _ctx: &mut SimCtx) -> Option<Pid> {
        None
    }
}
