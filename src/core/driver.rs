use super::{
    observer::Observer,
    state::{Pid, SimCtx, Ticks},
};
use crate::policy::Policy;
use log::debug;

/// What a single unit-tick did to the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The running process consumed one unit and keeps the CPU.
    Ran(Pid),
    Completed(Pid),
    /// Slice expired with work left; the simulation layer re-enqueues the
    /// process after the next batch of arrivals.
    Preempted(Pid),
    Idle,
}

pub struct SimCore<P: Policy> {
    pub ctx: SimCtx,
    pub policy: P,
    observer: Observer,
}

impl<P: Policy> SimCore<P> {
    pub fn new(quantum: Ticks) -> Self {
        let mut ctx = SimCtx::new(quantum);
        let policy = P::init(&mut ctx);
        let observer = Observer::new();
        Self {
            ctx,
            policy,
            observer,
        }
    }

    /// Give the CPU work if it is idle:
    /// 1. Pull from the default FIFO ready queue
    /// 2. Ask the policy to dispatch from its own queue or scan
    pub fn try_schedule(&mut self) -> Option<Pid> {
        if let Some(pid) = self.ctx.running {
            return Some(pid);
        }

        if let Some(pid) = self.ctx.queue_pop(self.ctx.ready_queue()) {
            self.ctx.set_running(pid);
            debug!("t={} dispatch {}", self.ctx.now, self.ctx.proc(pid).name);
            return Some(pid);
        }

        if let Some(pid) = self.policy.dispatch(&mut self.ctx) {
            self.ctx.set_running(pid);
            debug!("t={} dispatch {}", self.ctx.now, self.ctx.proc(pid).name);
            return Some(pid);
        }

        None
    }

    /// Advance the clock by exactly one unit and charge it to the running
    /// process. Preemption can only happen here, at a unit boundary.
    pub fn tick(&mut self) -> TickOutcome {
        self.ctx.advance_time(1);

        let pid = match self.ctx.running {
            Some(pid) => pid,
            None => return TickOutcome::Idle,
        };

        // Consume one unit of service and of the allocated slice
        {
            let proc = self.ctx.proc_mut(pid);
            proc.remaining = proc.remaining.saturating_sub(1);
            proc.consumed_slice += 1;
        }

        let proc = self.ctx.proc(pid);
        let completed = proc.remaining == 0;
        let slice_expired = !completed
            && proc.consumed_slice
                == proc
                    .allocated_slice
                    .expect("Running process must have an allocated slice");

        let outcome = if completed {
            self.ctx.clear_cpu();
            self.ctx.mark_completed(pid, self.ctx.now);
            TickOutcome::Completed(pid)
        } else if slice_expired {
            self.ctx.clear_cpu();
            self.ctx.mark_ready(pid);
            TickOutcome::Preempted(pid)
        } else {
            TickOutcome::Ran(pid)
        };

        self.observer.observe(&self.ctx);
        outcome
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }
}
