use thiserror::Error;

/// Errors raised by the submission limiter.
#[derive(Error, Debug)]
pub enum LimitError {
    /// The current window has no submission slots left.
    #[error("Submission limit of {max} per {window_secs}s reached, try again shortly")]
    LimitReached { max: u32, window_secs: u64 },
}
