//! Cancellable delayed tasks
//!
//! The interactive loop is single threaded; anything deferred (search
//! debounce, toast dismissal, the menu close animation) is a pending task
//! with a deadline. Scheduling a task replaces the pending task of the same
//! kind only, which gives each purpose its own debounce behavior. The event
//! loop polls input with a timeout of `next_deadline`.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    SearchDebounce,
    ToastDismiss,
    MenuClose,
}

impl TaskKind {
    pub fn delay(&self) -> Duration {
        match self {
            TaskKind::SearchDebounce => Duration::from_millis(300),
            TaskKind::ToastDismiss => Duration::from_secs(3),
            TaskKind::MenuClose => Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: Vec<(TaskKind, Instant)>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` at its fixed delay from `now`, cancelling any pending
    /// task of the same kind.
    pub fn schedule(&mut self, kind: TaskKind, now: Instant) {
        self.cancel(kind);
        self.pending.push((kind, now + kind.delay()));
    }

    pub fn cancel(&mut self, kind: TaskKind) {
        self.pending.retain(|(k, _)| *k != kind);
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.pending.iter().any(|(k, _)| *k == kind)
    }

    /// Nearest deadline, used as the input poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, at)| *at).min()
    }

    /// Remove and return every task whose deadline has passed, in deadline
    /// order.
    pub fn take_due(&mut self, now: Instant) -> Vec<TaskKind> {
        let mut due: Vec<(TaskKind, Instant)> = self
            .pending
            .iter()
            .copied()
            .filter(|(_, at)| *at <= now)
            .collect();
        self.pending.retain(|(_, at)| *at > now);
        due.sort_by_key(|(_, at)| *at);
        due.into_iter().map(|(kind, _)| kind).collect()
    }
}
