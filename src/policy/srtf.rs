use super::{EnqueueFlags, Policy};
use crate::core::state::{Pid, QueueId, Rank, SimCtx};

/// Shortest Remaining Time First: single-unit slices, so the running process
/// re-enters the queue with its decremented remaining time after every tick
/// and competes with anything that arrived at the boundary.
pub struct Srtf {
    run_queue: QueueId,
}

impl Policy for Srtf {
    const NAME: &'static str = "SRTF";

    fn init(ctx: &mut SimCtx) -> Self {
        Self {
            run_queue: ctx.create_ranked_queue(),
        }
    }

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid, flags: EnqueueFlags) {
        let _ = flags;
        let rank = Rank(ctx.proc(pid).remaining as i64, pid as i64, 0);
        ctx.queue_push_ranked(self.run_queue, pid, 1, rank);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        ctx.queue_pop(self.run_queue)
    }
}
