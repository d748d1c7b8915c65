use std::sync::{MutexGuard, PoisonError};
use std::time::Instant;

pub struct Mutex<T>(std::sync::Mutex<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Condition variable paired with [`Mutex`].
///
/// Waits re-check their predicate on every wake, so spurious wakeups and
/// notifications meant for the other seat are absorbed here.
pub struct Condvar(std::sync::Condvar);

impl Condvar {
    pub const fn new() -> Self {
        Self(std::sync::Condvar::new())
    }

    pub fn notify_all(&self) {
        self.0.notify_all();
    }

    /// Blocks while `condition` holds, or until `deadline` passes.
    ///
    /// Returns the guard and whether the deadline expired with the condition
    /// still holding. Without a deadline this blocks indefinitely.
    pub fn wait_while<'a, T, F>(
        &self,
        guard: MutexGuard<'a, T>,
        deadline: Option<Instant>,
        condition: F,
    ) -> (MutexGuard<'a, T>, bool)
    where
        F: FnMut(&mut T) -> bool,
    {
        let Some(deadline) = deadline else {
            let guard = self
                .0
                .wait_while(guard, condition)
                .unwrap_or_else(PoisonError::into_inner);
            return (guard, false);
        };

        let timeout = deadline.saturating_duration_since(Instant::now());
        let (guard, result) = self
            .0
            .wait_timeout_while(guard, timeout, condition)
            .unwrap_or_else(PoisonError::into_inner);
        (guard, result.timed_out())
    }
}
