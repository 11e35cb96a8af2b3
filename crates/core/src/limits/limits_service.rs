//! Fixed-window counter limiting transaction submissions.
//!
//! One window per session: up to `max_submissions` attempts per
//! `window` interval. The window rolls over lazily on the next acquire;
//! nothing ticks in the background.

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::warn;

use super::limits_errors::LimitError;

/// Default cap: 10 submissions per rolling window.
const DEFAULT_MAX_SUBMISSIONS: u32 = 10;

/// Default window length in seconds.
const DEFAULT_WINDOW_SECS: u64 = 60;

/// Submission limiter configuration.
#[derive(Clone, Debug)]
pub struct SubmissionLimitConfig {
    /// Maximum submission attempts per window.
    pub max_submissions: u32,
    /// Window length.
    pub window: Duration,
}

impl Default for SubmissionLimitConfig {
    fn default() -> Self {
        Self {
            max_submissions: DEFAULT_MAX_SUBMISSIONS,
            window: Duration::from_secs(DEFAULT_WINDOW_SECS),
        }
    }
}

/// State of the current window.
#[derive(Debug)]
struct Window {
    started_at: Instant,
    used: u32,
}

/// Fixed-window submission limiter.
///
/// Thread-safe via interior mutability, so services can hold it behind an
/// `Arc` without a surrounding lock. A slot is consumed per submission
/// attempt, before the attempt is validated.
pub struct SubmissionLimiter {
    config: SubmissionLimitConfig,
    window: Mutex<Window>,
}

impl SubmissionLimiter {
    /// Creates a limiter with the default 10-per-60s cap.
    pub fn new() -> Self {
        Self::with_config(SubmissionLimitConfig::default())
    }

    pub fn with_config(config: SubmissionLimitConfig) -> Self {
        Self {
            config,
            window: Mutex::new(Window {
                started_at: Instant::now(),
                used: 0,
            }),
        }
    }

    /// Lock the window mutex, recovering from poison if necessary.
    ///
    /// The worst case of recovering is one miscounted window, which is
    /// better than panicking.
    fn lock_window(&self) -> MutexGuard<'_, Window> {
        self.window.lock().unwrap_or_else(|poisoned| {
            warn!("Submission limiter mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Consumes one submission slot, or fails when the window is full.
    pub fn try_acquire(&self) -> Result<(), LimitError> {
        let mut window = self.lock_window();

        if window.started_at.elapsed() >= self.config.window {
            window.started_at = Instant::now();
            window.used = 0;
        }

        if window.used >= self.config.max_submissions {
            return Err(LimitError::LimitReached {
                max: self.config.max_submissions,
                window_secs: self.config.window.as_secs(),
            });
        }

        window.used += 1;
        Ok(())
    }

    /// Slots left in the current window.
    pub fn remaining(&self) -> u32 {
        let window = self.lock_window();
        if window.started_at.elapsed() >= self.config.window {
            return self.config.max_submissions;
        }
        self.config.max_submissions.saturating_sub(window.used)
    }
}

impl Default for SubmissionLimiter {
    fn default() -> Self {
        Self::new()
    }
}
