//! Table configuration options.

use core::time::Duration;

/// Default number of game slots.
pub const DEFAULT_CAPACITY: usize = 10;

/// Configuration options for a game table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use std::time::Duration;
/// use bjduel::TableOptions;
///
/// let options = TableOptions::default()
///     .with_capacity(4)
///     .with_wait_timeout(Some(Duration::from_secs(30)))
///     .with_recycle_finished(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of game slots. Fixed for the lifetime of the table.
    pub capacity: usize,
    /// Longest a status call may block before reporting that the caller is
    /// still waiting. `None` blocks until the awaited condition holds.
    pub wait_timeout: Option<Duration>,
    /// Whether a finished game frees its slot once both players have seen
    /// the result.
    pub recycle_finished: bool,
    /// Seed for dealing. `None` picks a random seed.
    pub seed: Option<u64>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            wait_timeout: None,
            recycle_finished: false,
            seed: None,
        }
    }
}

impl TableOptions {
    /// Sets the number of game slots.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::TableOptions;
    ///
    /// let options = TableOptions::default().with_capacity(3);
    /// assert_eq!(options.capacity, 3);
    /// ```
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the status wait deadline.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use bjduel::TableOptions;
    ///
    /// let options = TableOptions::default().with_wait_timeout(Some(Duration::from_millis(50)));
    /// assert_eq!(options.wait_timeout, Some(Duration::from_millis(50)));
    /// ```
    #[must_use]
    pub const fn with_wait_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Sets whether finished games are recycled.
    #[must_use]
    pub const fn with_recycle_finished(mut self, recycle: bool) -> Self {
        self.recycle_finished = recycle;
        self
    }

    /// Sets the dealing seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjduel::TableOptions;
    ///
    /// let options = TableOptions::default().with_seed(7);
    /// assert_eq!(options.seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
