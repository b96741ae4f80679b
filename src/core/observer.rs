use super::state::{ProcState, SimCtx};

#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;

        if let Some(pid) = ctx.running {
            let proc = ctx.proc(pid);
            debug_assert_eq!(
                proc.state,
                ProcState::Running,
                "ctx.running process {pid} must be Running"
            );
            debug_assert!(
                !ctx.proc_in_any_queue(pid),
                "Running process {pid} must not appear in any run queue"
            );
        }

        for (&pid, &queue_id) in &ctx.proc_to_queue {
            let proc = ctx.proc(pid);
            debug_assert_eq!(
                proc.state,
                ProcState::Ready,
                "Enqueued process {pid} must be Ready"
            );
            if let Some(queue) = ctx.queues.get(queue_id) {
                debug_assert!(
                    queue.contains(pid),
                    "proc_to_queue claims process {pid} in queue {queue_id:?}, but queue does not contain it"
                );
            } else {
                debug_assert!(false, "proc_to_queue references unknown queue {queue_id:?}");
            }
        }

        for proc in &ctx.procs {
            if proc.state == ProcState::Completed {
                debug_assert_eq!(
                    proc.remaining, 0,
                    "Completed process {} has service left",
                    proc.pid
                );
                debug_assert!(
                    proc.completion.is_some() && proc.metrics.is_some(),
                    "Completed process {} missing completion metrics",
                    proc.pid
                );
            }
        }
    }
}
