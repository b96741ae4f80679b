use crate::core::metrics::{self, ProcMetrics};
use keyed_priority_queue::KeyedPriorityQueue;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::collections::VecDeque;

// Index into the process Vec, assigned in arrival-sorted admission order
pub type Pid = usize;
pub type Ticks = u64;
pub type Priority = i64;
new_key_type! {
    pub struct QueueId;
}

/// Selection key for ranked run queues. Policies compose the triple so that
/// the process to run next has the lexicographically smallest key; the last
/// populated component is the arrival-sorted index, which makes keys unique
/// and tie-breaks deterministic.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct Rank(pub i64, pub i64, pub i64);

// KeyedPriorityQueue is a max-heap, so we need to flip-flop Rank's Ord
impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.0, other.1, other.2).cmp(&(self.0, self.1, self.2))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    /// Admitted to the table but not yet arrived.
    Pending,
    Ready,
    Running,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Process {
    pub pid: Pid,
    pub name: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    pub state: ProcState,
    pub remaining: Ticks,
    pub allocated_slice: Option<Ticks>,
    pub consumed_slice: Ticks,
    pub completion: Option<Ticks>,
    pub metrics: Option<ProcMetrics>,
}

impl Process {
    pub fn is_completed(&self) -> bool {
        self.state == ProcState::Completed
    }
}

#[derive(Debug)]
pub enum RunQueue {
    Fifo {
        procs: VecDeque<Pid>,
    },
    Ranked {
        procs: KeyedPriorityQueue<Pid, Rank>,
    },
}

impl RunQueue {
    pub fn new_fifo() -> Self {
        Self::Fifo {
            procs: VecDeque::new(),
        }
    }

    pub fn new_ranked() -> Self {
        Self::Ranked {
            procs: KeyedPriorityQueue::new(),
        }
    }

    pub fn contains(&self, pid: Pid) -> bool {
        match self {
            Self::Fifo { procs } => procs.contains(&pid),
            Self::Ranked { procs } => procs.iter().any(|p| *p.0 == pid),
        }
    }
}

#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub running: Option<Pid>,
    pub procs: Vec<Process>,
    pub queues: SlotMap<QueueId, RunQueue>,
    pub proc_to_queue: FxHashMap<Pid, QueueId>,
    pub ready_queue_id: QueueId,
    pub quantum: Ticks,

    // Incremented upon process completion
    completed: usize,
}

impl SimCtx {
    pub fn new(quantum: Ticks) -> Self {
        let mut queues = SlotMap::with_capacity_and_key(1);

        // Default FIFO ready queue; FCFS and Round Robin live here entirely
        let ready_queue_id = queues.insert(RunQueue::new_fifo());

        Self {
            now: 0,
            running: None,
            procs: Vec::new(),
            queues,
            proc_to_queue: FxHashMap::default(),
            ready_queue_id,
            quantum,
            completed: 0,
        }
    }

    /// Admit a process to the table. Pids are handed out in admission order,
    /// which the simulation layer guarantees is arrival-sorted order.
    pub fn admit(&mut self, name: String, arrival: Ticks, burst: Ticks, priority: Priority) -> Pid {
        let pid = self.procs.len();

        let proc = Process {
            pid,
            name,
            arrival,
            burst,
            priority,
            state: ProcState::Pending,
            remaining: burst,
            allocated_slice: None,
            consumed_slice: 0,
            completion: None,
            metrics: None,
        };

        self.procs.push(proc);
        pid
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn create_ranked_queue(&mut self) -> QueueId {
        self.queues.insert(RunQueue::new_ranked())
    }

    fn queue_push(&mut self, queue_id: QueueId, pid: Pid, slice: Ticks, rank: Option<Rank>) {
        assert!(
            !self.proc_to_queue.contains_key(&pid),
            "Process {pid} already present in some run queue"
        );

        let proc = self.proc_mut(pid);
        debug_assert!(
            proc.state == ProcState::Ready,
            "Process {pid} must be Ready when enqueued"
        );

        proc.allocated_slice = Some(slice);
        let queue = self.queues.get_mut(queue_id).expect("Unknown run queue");

        match queue {
            RunQueue::Fifo { procs } => procs.push_back(pid),
            RunQueue::Ranked { procs } => {
                procs.push(
                    pid,
                    rank.expect("Attempted to push to a ranked queue with no rank"),
                );
            }
        };

        self.proc_to_queue.insert(pid, queue_id);
    }

    pub fn queue_push_fifo(&mut self, queue_id: QueueId, pid: Pid, slice: Ticks) {
        self.queue_push(queue_id, pid, slice, None);
    }

    pub fn queue_push_ranked(&mut self, queue_id: QueueId, pid: Pid, slice: Ticks, rank: Rank) {
        self.queue_push(queue_id, pid, slice, Some(rank));
    }

    pub fn queue_pop(&mut self, queue_id: QueueId) -> Option<Pid> {
        let queue = self.queues.get_mut(queue_id)?;
        let pid = match queue {
            RunQueue::Fifo { procs } => procs.pop_front(),
            RunQueue::Ranked { procs } => procs.pop().map(|p| p.0),
        }?;

        let removed = self.proc_to_queue.remove(&pid);
        debug_assert!(removed.is_some(), "Process {pid} missing queue membership");

        Some(pid)
    }

    pub fn proc_in_any_queue(&self, pid: Pid) -> bool {
        self.proc_to_queue.contains_key(&pid)
    }

    pub fn proc(&self, pid: Pid) -> &Process {
        &self.procs[pid]
    }

    pub fn proc_mut(&mut self, pid: Pid) -> &mut Process {
        &mut self.procs[pid]
    }

    pub fn ready_queue(&self) -> QueueId {
        self.ready_queue_id
    }

    pub fn cpu_is_idle(&self) -> bool {
        self.running.is_none()
    }

    pub fn completed_count(&self) -> usize {
        self.completed
    }

    pub fn all_completed(&self) -> bool {
        self.completed == self.procs.len()
    }

    pub fn mark_ready(&mut self, pid: Pid) {
        let proc = self.proc_mut(pid);
        debug_assert!(
            proc.state != ProcState::Completed,
            "Completed process {} cannot become ready",
            proc.pid
        );
        proc.state = ProcState::Ready;
    }

    pub fn mark_completed(&mut self, pid: Pid, completion: Ticks) {
        debug_assert!(
            !self.proc_to_queue.contains_key(&pid),
            "Completing process {} that is still enqueued",
            pid
        );

        let proc = &mut self.procs[pid];
        debug_assert!(
            proc.state == ProcState::Running,
            "Process {pid} must have been running before marked complete"
        );
        debug_assert_eq!(proc.remaining, 0, "Process {pid} completed with work left");

        proc.state = ProcState::Completed;
        proc.completion = Some(completion);
        proc.metrics = Some(
            metrics::derive(proc.arrival, proc.burst, completion)
                .expect("zero burst is rejected at admission"),
        );
        self.completed += 1;
    }

    pub fn set_running(&mut self, pid: Pid) {
        debug_assert!(
            !self.proc_to_queue.contains_key(&pid),
            "Running process {pid} must not be enqueued"
        );
        debug_assert!(self.running.is_none(), "CPU already running a process");

        self.running = Some(pid);
        let proc = self.proc_mut(pid);
        debug_assert!(
            proc.allocated_slice.is_some(),
            "Dispatched process {pid} has no allocated slice"
        );
        proc.state = ProcState::Running;
        proc.consumed_slice = 0;
    }

    pub fn clear_cpu(&mut self) {
        self.running = None;
    }
}
