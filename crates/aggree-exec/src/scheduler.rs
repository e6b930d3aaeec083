use std::time::Duration;
use std::time::Instant;

use rand::Rng;

use crate::contracts::DeferredTask;
use crate::contracts::TaskTicket;

#[derive(Debug, Clone)]
struct Scheduled {
    ticket: TaskTicket,
    deadline: Instant,
    task: DeferredTask,
}

/// Single-threaded timer queue. The caller supplies the clock, so nothing
/// here sleeps or spawns.
#[derive(Debug, Default)]
pub struct TaskScheduler {
    entries: Vec<Scheduled>,
    next_ticket: u64,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: DeferredTask, now: Instant, delay: Duration) -> TaskTicket {
        self.next_ticket = self.next_ticket.saturating_add(1);
        let ticket = TaskTicket(self.next_ticket);
        tracing::trace!(ticket = ticket.0, task = task.label(), ?delay, "task scheduled");
        self.entries.push(Scheduled {
            ticket,
            deadline: now + delay,
            task,
        });
        ticket
    }

    pub fn cancel(&mut self, ticket: TaskTicket) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.ticket != ticket);
        before != self.entries.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        if dropped > 0 {
            tracing::debug!(dropped, "pending tasks cancelled");
        }
        dropped
    }

    /// Removes and returns every task whose deadline is at or before `now`,
    /// earliest first. Equal deadlines keep scheduling order.
    pub fn poll_due(&mut self, now: Instant) -> Vec<DeferredTask> {
        let (mut due, pending): (Vec<Scheduled>, Vec<Scheduled>) = self
            .entries
            .drain(..)
            .partition(|entry| entry.deadline <= now);
        self.entries = pending;

        due.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.ticket.cmp(&b.ticket)));
        due.into_iter().map(|entry| entry.task).collect()
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }
}

/// Upload processing delay, drawn uniformly from `[min_ms, max_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadDelayPolicy {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for UploadDelayPolicy {
    fn default() -> Self {
        Self {
            min_ms: 2_000,
            max_ms: 5_000,
        }
    }
}

impl UploadDelayPolicy {
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.gen_range(self.min_ms..self.max_ms))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn login(ticket: u64) -> DeferredTask {
        DeferredTask::CompleteLogin { ticket }
    }

    fn upload(id: &str) -> DeferredTask {
        DeferredTask::FinishUpload {
            file_id: id.to_string(),
        }
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let start = Instant::now();
        let mut scheduler = TaskScheduler::new();
        scheduler.schedule(login(1), start, Duration::from_millis(1_500));

        assert!(scheduler.poll_due(start + Duration::from_millis(1_499)).is_empty());
        assert_eq!(
            scheduler.poll_due(start + Duration::from_millis(1_500)),
            vec![login(1)]
        );
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn due_tasks_come_back_in_deadline_order() {
        let start = Instant::now();
        let mut scheduler = TaskScheduler::new();
        scheduler.schedule(upload("file-1"), start, Duration::from_millis(4_000));
        scheduler.schedule(upload("file-2"), start, Duration::from_millis(2_500));
        scheduler.schedule(upload("file-3"), start, Duration::from_millis(2_500));

        let due = scheduler.poll_due(start + Duration::from_secs(5));

        assert_eq!(due, vec![upload("file-2"), upload("file-3"), upload("file-1")]);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let start = Instant::now();
        let mut scheduler = TaskScheduler::new();
        let first = scheduler.schedule(login(1), start, Duration::ZERO);
        scheduler.schedule(upload("file-1"), start, Duration::ZERO);

        assert!(scheduler.cancel(first));
        assert!(!scheduler.cancel(first));
        assert_eq!(scheduler.poll_due(start), vec![upload("file-1")]);

        scheduler.schedule(upload("file-2"), start, Duration::ZERO);
        assert_eq!(scheduler.cancel_all(), 1);
        assert!(scheduler.poll_due(start + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn next_deadline_tracks_earliest_entry() {
        let start = Instant::now();
        let mut scheduler = TaskScheduler::new();
        assert_eq!(scheduler.next_deadline(), None);

        scheduler.schedule(login(1), start, Duration::from_millis(900));
        scheduler.schedule(login(2), start, Duration::from_millis(300));

        assert_eq!(
            scheduler.next_deadline(),
            Some(start + Duration::from_millis(300))
        );
    }

    #[test]
    fn upload_delay_stays_in_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let policy = UploadDelayPolicy::default();
        for _ in 0..200 {
            let delay = policy.draw(&mut rng);
            assert!(delay >= Duration::from_millis(2_000));
            assert!(delay < Duration::from_millis(5_000));
        }
    }

    #[test]
    fn degenerate_window_uses_minimum() {
        let mut rng = StdRng::seed_from_u64(1);
        let policy = UploadDelayPolicy {
            min_ms: 10,
            max_ms: 10,
        };
        assert_eq!(policy.draw(&mut rng), Duration::from_millis(10));
    }
}
