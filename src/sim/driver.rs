use super::process::ProcessSpec;
use crate::{
    core::{
        driver::{SimCore, TickOutcome},
        event::SimEvent,
        state::{Pid, Process, Ticks},
    },
    policy::{Policy, DEFAULT_QUANTUM, ENQ_PREEMPT, ENQ_WAKEUP},
};
use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("process {name} has a burst time of zero")]
    InvalidBurstTime { name: String },
    #[error("round robin requires a positive time quantum, got {0}")]
    InvalidQuantum(i64),
    #[error("unknown policy selection {0}, expected 1-8")]
    UnknownPolicy(u32),
}

pub struct Sim<P: Policy> {
    pub core: SimCore<P>,
    specs: Vec<ProcessSpec>,
    spec_cursor: usize,
    // Held across the tick boundary so the preempted process re-enters its
    // queue after the arrivals of the new instant
    pending_requeue: Option<Pid>,
}

impl<P: Policy> Sim<P> {
    pub fn new(specs: Vec<ProcessSpec>) -> Result<Self, SimError> {
        Self::with_quantum(specs, DEFAULT_QUANTUM)
    }

    pub fn with_quantum(mut specs: Vec<ProcessSpec>, quantum: Ticks) -> Result<Self, SimError> {
        if quantum == 0 {
            return Err(SimError::InvalidQuantum(0));
        }
        if let Some(spec) = specs.iter().find(|spec| spec.burst == 0) {
            return Err(SimError::InvalidBurstTime {
                name: spec.name.clone(),
            });
        }

        // Stable sort: simultaneous arrivals keep their input order, which
        // fixes the index every tie-break refers to
        specs.sort_by_key(|spec| spec.arrival);

        info!(
            "Simulation initialized: policy={}, processes={}, quantum={}",
            P::NAME,
            specs.len(),
            quantum
        );

        Ok(Self {
            core: SimCore::new(quantum),
            specs,
            spec_cursor: 0,
            pending_requeue: None,
        })
    }

    /// Drive the policy until every process has completed; returns the
    /// completed records in arrival-sorted order.
    pub fn run(mut self) -> Vec<Process> {
        while !self.all_completed() {
            let now = self.core.now();
            for event in self.step() {
                debug!("t={now} {event:?}");
            }
        }

        info!(
            "Simulation finished: policy={}, makespan={}",
            P::NAME,
            self.core.now()
        );
        self.core.ctx.procs
    }

    /// One decision boundary: admit arrivals, re-queue a preempted process,
    /// schedule, then advance the clock by one unit (or jump it to the next
    /// arrival when nothing is eligible).
    pub fn step(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        self.handle_arrivals(&mut events);

        if let Some(pid) = self.pending_requeue.take() {
            self.core.policy.enqueue(&mut self.core.ctx, pid, ENQ_PREEMPT);
        }

        let was_idle = self.core.ctx.cpu_is_idle();
        if self.core.try_schedule().is_none() {
            if let Some(next) = self.next_arrival() {
                let now = self.core.now();
                self.core.ctx.advance_time(next - now);
                events.push(SimEvent::IdleJump { to: next });
                self.handle_arrivals(&mut events);
                self.core.try_schedule();
            }
        }
        if was_idle {
            if let Some(pid) = self.core.ctx.running {
                events.push(SimEvent::Dispatched { pid });
            }
        }

        match self.core.tick() {
            TickOutcome::Completed(pid) => {
                events.push(SimEvent::Completed {
                    pid,
                    at: self.core.now(),
                });
            }
            TickOutcome::Preempted(pid) => {
                self.pending_requeue = Some(pid);
                events.push(SimEvent::Preempted { pid });
            }
            TickOutcome::Ran(_) | TickOutcome::Idle => {}
        }

        events
    }

    fn handle_arrivals(&mut self, events: &mut Vec<SimEvent>) {
        let now = self.core.now();

        // Contiguous, since specs are sorted by arrival
        while self.spec_cursor < self.specs.len() && self.specs[self.spec_cursor].arrival <= now {
            let spec = &self.specs[self.spec_cursor];
            let pid = self.core.ctx.admit(
                spec.name.clone(),
                spec.arrival,
                spec.burst,
                spec.priority,
            );
            self.core.ctx.mark_ready(pid);
            self.core.policy.enqueue(&mut self.core.ctx, pid, ENQ_WAKEUP);
            events.push(SimEvent::Arrived { pid });
            self.spec_cursor += 1;
        }
    }

    fn next_arrival(&self) -> Option<Ticks> {
        self.specs.get(self.spec_cursor).map(|spec| spec.arrival)
    }

    pub fn all_completed(&self) -> bool {
        self.spec_cursor == self.specs.len() && self.core.ctx.all_completed()
    }
}
