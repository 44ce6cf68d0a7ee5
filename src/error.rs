use thiserror::Error;

#[derive(Debug, Error)]
pub enum JiggleError {
    #[error("Unable to detect screen information")]
    NoDisplay,
    #[error("Maximum change cannot exceed {ceiling} pixels (got {value})")]
    MaxChangeTooLarge { value: i32, ceiling: i32 },
    #[error("Maximum change must be at least 1 pixel (got {0})")]
    MaxChangeTooSmall(i32),
    #[error("Wait time must be a positive value (got {0})")]
    InvalidWait(f64),
    #[error("Run duration must be longer than zero")]
    InvalidDuration,
    #[error("Could not connect to the input backend: {0}")]
    Backend(String),
    /// Reading the cursor position failed.
    #[error("Could not read cursor position: {0}")]
    InputQuery(String),
    /// Injecting the relative move failed, e.g. no active session.
    #[error("Could not move cursor: {0}")]
    InputInjection(String),
    #[error("Could not write log record: {0}")]
    Log(#[from] std::io::Error),
}

impl JiggleError {
    /// Errors that only cost the current tick.
    pub fn is_per_tick(&self) -> bool {
        matches!(
            self,
            JiggleError::InputQuery(_) | JiggleError::InputInjection(_) | JiggleError::Log(_)
        )
    }
}
