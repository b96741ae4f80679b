use super::{EnqueueFlags, Policy};
use crate::core::state::{Pid, QueueId, Rank, SimCtx};

/// Highest Priority, non-preemptive: maximum priority among eligible
/// processes runs to completion once chosen; lower index on equal priority.
pub struct HighestPriority {
    run_queue: QueueId,
}

impl Policy for HighestPriority {
    const NAME: &'static str = "Highest Priority";

    fn init(ctx: &mut SimCtx) -> Self {
        Self {
            run_queue: ctx.create_ranked_queue(),
        }
    }

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid, flags: EnqueueFlags) {
        let _ = flags;
        let proc = ctx.proc(pid);
        // Higher priority value is more urgent; negate for smallest-first order
        let rank = Rank(-proc.priority, pid as i64, 0);
        let slice = proc.remaining;
        ctx.queue_push_ranked(self.run_queue, pid, slice, rank);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        ctx.queue_pop(self.run_queue)
    }
}

/// Highest Priority, preemptive: re-evaluated at every unit boundary. Equal
/// priorities fall back to earliest arrival, then lowest index when arrivals
/// are equal too.
pub struct PreemptiveHighestPriority {
    run_queue: QueueId,
}

impl Policy for PreemptiveHighestPriority {
    const NAME: &'static str = "Preemptive Highest Priority";

    fn init(ctx: &mut SimCtx) -> Self {
        Self {
            run_queue: ctx.create_ranked_queue(),
        }
    }

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid, flags: EnqueueFlags) {
        let _ = flags;
        let proc = ctx.proc(pid);
        let rank = Rank(-proc.priority, proc.arrival as i64, pid as i64);
        ctx.queue_push_ranked(self.run_queue, pid, 1, rank);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        ctx.queue_pop(self.run_queue)
    }
}
