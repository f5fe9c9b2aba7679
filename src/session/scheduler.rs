//! Millisecond task scheduler for a session's timers.
//!
//! The host drives the clock through `advance`; nothing runs on its own. A
//! cancelled task never fires again.

/// Handle returned when a task is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// Work a session schedules for later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    SpawnObstacle,
    ShowGameOver,
}

#[derive(Debug, Clone)]
struct Entry {
    id: TaskId,
    task: ScheduledTask,
    due_ms: u64,
    repeat_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds the clock has advanced so far.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Fire `task` every `interval_ms`, first after one full interval.
    pub fn every(&mut self, interval_ms: u64, task: ScheduledTask) -> TaskId {
        self.push(task, interval_ms, Some(interval_ms.max(1)))
    }

    /// Fire `task` once after `delay_ms`.
    pub fn after(&mut self, delay_ms: u64, task: ScheduledTask) -> TaskId {
        self.push(task, delay_ms, None)
    }

    /// Drop a task. Returns false if it had already fired (one-shot) or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Move the clock forward and collect everything that came due, earliest first.
    ///
    /// A repeating task fires once per elapsed interval, so a long `dt_ms`
    /// can return it several times.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<(TaskId, ScheduledTask)> {
        self.now_ms += dt_ms;
        let mut fired = Vec::new();

        loop {
            let next = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.due_ms <= self.now_ms)
                .min_by_key(|(_, e)| (e.due_ms, e.id.0))
                .map(|(index, _)| index);
            let Some(index) = next else { break };

            let (id, task, repeat_ms) = {
                let entry = &self.entries[index];
                (entry.id, entry.task, entry.repeat_ms)
            };
            fired.push((id, task));
            match repeat_ms {
                Some(interval) => self.entries[index].due_ms += interval,
                None => {
                    self.entries.remove(index);
                }
            }
        }

        fired
    }

    fn push(&mut self, task: ScheduledTask, delay_ms: u64, repeat_ms: Option<u64>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            task,
            due_ms: self.now_ms + delay_ms,
            repeat_ms,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fires_once() {
        let mut s = Scheduler::new();
        let id = s.after(500, ScheduledTask::ShowGameOver);
        assert!(s.advance(499).is_empty());
        assert_eq!(s.advance(1), vec![(id, ScheduledTask::ShowGameOver)]);
        assert!(s.advance(10_000).is_empty());
        assert!(!s.is_scheduled(id));
    }

    #[test]
    fn test_repeating_task_rearms() {
        let mut s = Scheduler::new();
        let id = s.every(2200, ScheduledTask::SpawnObstacle);
        assert!(s.advance(2199).is_empty());
        assert_eq!(s.advance(1).len(), 1);
        assert_eq!(s.advance(2200).len(), 1);
        assert!(s.is_scheduled(id));
    }

    #[test]
    fn test_large_step_fires_repeating_task_per_interval() {
        let mut s = Scheduler::new();
        s.every(100, ScheduledTask::SpawnObstacle);
        assert_eq!(s.advance(350).len(), 3);
        assert_eq!(s.advance(50).len(), 1);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut s = Scheduler::new();
        let id = s.every(100, ScheduledTask::SpawnObstacle);
        assert!(s.cancel(id));
        assert!(s.advance(1000).is_empty());
        assert!(!s.cancel(id));
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut s = Scheduler::new();
        let spawn = s.every(300, ScheduledTask::SpawnObstacle);
        let over = s.after(100, ScheduledTask::ShowGameOver);
        let fired = s.advance(300);
        assert_eq!(
            fired,
            vec![
                (over, ScheduledTask::ShowGameOver),
                (spawn, ScheduledTask::SpawnObstacle)
            ]
        );
    }

    #[test]
    fn test_delay_counts_from_schedule_time() {
        let mut s = Scheduler::new();
        s.advance(1000);
        s.after(500, ScheduledTask::ShowGameOver);
        assert!(s.advance(499).is_empty());
        assert_eq!(s.advance(1).len(), 1);
        assert_eq!(s.now_ms(), 1500);
    }

    #[test]
    fn test_pending_count() {
        let mut s = Scheduler::new();
        assert_eq!(s.pending(), 0);
        let a = s.every(10, ScheduledTask::SpawnObstacle);
        s.after(10, ScheduledTask::ShowGameOver);
        assert_eq!(s.pending(), 2);
        s.cancel(a);
        assert_eq!(s.pending(), 1);
    }
}
