use super::{EnqueueFlags, Policy};
use crate::core::state::{Pid, QueueId, Rank, SimCtx};

/// Shortest Process Next: non-preemptive, minimum original burst among the
/// processes that have arrived, lower index on equal burst.
pub struct Spn {
    run_queue: QueueId,
}

impl Policy for Spn {
    const NAME: &'static str = "SPN";

    fn init(ctx: &mut SimCtx) -> Self {
        Self {
            run_queue: ctx.create_ranked_queue(),
        }
    }

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid, flags: EnqueueFlags) {
        let _ = flags;
        let proc = ctx.proc(pid);
        let rank = Rank(proc.burst as i64, pid as i64, 0);
        let slice = proc.remaining;
        ctx.queue_push_ranked(self.run_queue, pid, slice, rank);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        ctx.queue_pop(self.run_queue)
    }
}
