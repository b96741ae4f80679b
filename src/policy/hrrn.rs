use super::{EnqueueFlags, Policy};
use crate::core::state::{Pid, ProcState, SimCtx};

/// Highest Response Ratio Next: non-preemptive. Response ratios of waiting
/// processes grow as the clock advances, so no queue can hold them;
/// eligibility is rescanned at every dispatch instant instead. Ascending
/// scan with a strict comparison keeps the lowest index on equal ratios.
pub struct Hrrn;

impl Policy for Hrrn {
    const NAME: &'static str = "HRRN";

    fn init(_ctx: &mut SimCtx) -> Self {
        Self
    }

    fn enqueue(&mut self, _ctx: &mut SimCtx, _pid: Pid, _flags: EnqueueFlags) {}

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        let now = ctx.now;
        let mut best: Option<(f64, Pid)> = None;

        for proc in &ctx.procs {
            if proc.state != ProcState::Ready {
                continue;
            }
            let waited = (now - proc.arrival) as f64;
            let ratio = (waited + proc.burst as f64) / proc.burst as f64;
            if best.map_or(true, |(top, _)| ratio > top) {
                best = Some((ratio, proc.pid));
            }
        }

        let (_, pid) = best?;
        let slice = ctx.proc(pid).remaining;
        ctx.proc_mut(pid).allocated_slice = Some(slice);
        Some(pid)
    }
}
