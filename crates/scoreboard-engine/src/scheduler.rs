//! Cooperative timed tasks measured in engine ticks.
//!
//! A task never touches game state. When it comes due it hands back a
//! command, which the engine queues like any other.

use scoreboard_core::commands::Command;

/// Kinds of timed task. At most one of each is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Restart the game clock after a timeout.
    TimeoutResume,
    /// End of the physical play timer.
    PlayTimer,
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    kind: TaskKind,
    due_tick: u64,
    command: Command,
}

#[derive(Debug, Default)]
pub struct TaskScheduler {
    tasks: Vec<ScheduledTask>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `command` to be posted `delay` ticks after `now`.
    /// Replaces any outstanding task of the same kind.
    pub fn schedule(&mut self, kind: TaskKind, now: u64, delay: u32, command: Command) {
        self.cancel(kind);
        self.tasks.push(ScheduledTask {
            kind,
            due_tick: now + u64::from(delay),
            command,
        });
    }

    pub fn cancel(&mut self, kind: TaskKind) {
        self.tasks.retain(|t| t.kind != kind);
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_scheduled(&self, kind: TaskKind) -> bool {
        self.tasks.iter().any(|t| t.kind == kind)
    }

    /// Remove and return the commands of every task due at or before `now`,
    /// in scheduling order.
    pub fn take_due(&mut self, now: u64) -> Vec<Command> {
        let mut due = Vec::new();
        self.tasks.retain(|t| {
            if t.due_tick <= now {
                due.push(t.command.clone());
                false
            } else {
                true
            }
        });
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fires_at_due_tick() {
        let mut scheduler = TaskScheduler::new();
        scheduler.schedule(TaskKind::TimeoutResume, 10, 30, Command::StartClock);
        assert!(scheduler.take_due(39).is_empty());
        assert_eq!(scheduler.take_due(40), vec![Command::StartClock]);
        assert!(
            !scheduler.is_scheduled(TaskKind::TimeoutResume),
            "fired task should be removed"
        );
    }

    #[test]
    fn test_reschedule_replaces_same_kind() {
        let mut scheduler = TaskScheduler::new();
        scheduler.schedule(TaskKind::PlayTimer, 0, 5, Command::PlayTimerElapsed);
        scheduler.schedule(TaskKind::PlayTimer, 3, 5, Command::PlayTimerElapsed);
        assert!(scheduler.take_due(7).is_empty(), "first deadline replaced");
        assert_eq!(scheduler.take_due(8), vec![Command::PlayTimerElapsed]);
        assert!(scheduler.take_due(100).is_empty());
    }

    #[test]
    fn test_cancel_only_named_kind() {
        let mut scheduler = TaskScheduler::new();
        scheduler.schedule(TaskKind::PlayTimer, 0, 5, Command::PlayTimerElapsed);
        scheduler.schedule(TaskKind::TimeoutResume, 0, 30, Command::StartClock);
        scheduler.cancel(TaskKind::TimeoutResume);
        assert!(scheduler.is_scheduled(TaskKind::PlayTimer));
        assert!(!scheduler.is_scheduled(TaskKind::TimeoutResume));
        scheduler.cancel_all();
        assert!(!scheduler.is_scheduled(TaskKind::PlayTimer));
        assert!(scheduler.take_due(u64::MAX).is_empty());
    }
}
