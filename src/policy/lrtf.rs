use super::{EnqueueFlags, Policy};
use crate::core::state::{Pid, QueueId, Rank, SimCtx};

/// Longest Remaining Time First: preemptive mirror image of SRTF; maximum
/// remaining time wins every unit boundary, lower index on ties.
pub struct Lrtf {
    run_queue: QueueId,
}

impl Policy for Lrtf {
    const NAME: &'static str = "LRTF";

    fn init(ctx: &mut SimCtx) -> Self {
        Self {
            run_queue: ctx.create_ranked_queue(),
        }
    }

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid, flags: EnqueueFlags) {
        let _ = flags;
        let rank = Rank(-(ctx.proc(pid).remaining as i64), pid as i64, 0);
        ctx.queue_push_ranked(self.run_queue, pid, 1, rank);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        ctx.queue_pop(self.run_queue)
    }
}
