use crate::error::JiggleError;
use std::time::Duration;

/// Hard ceiling for `--max_change`, in pixels.
pub const MAX_CHANGE: i32 = 100;
pub const DEFAULT_MAX_CHANGE: i32 = 10;
pub const DEFAULT_WAIT_SECS: &str = "60";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub max_change: i32,
    pub wait: Duration,
    pub logging: bool,
    pub run_for: Option<Duration>,
}

impl Config {
    pub fn new(
        max_change: i32,
        wait_secs: f64,
        logging: bool,
        run_for: Option<Duration>,
    ) -> Result<Self, JiggleError> {
        let wait = validate(max_change, wait_secs)?;
        if run_for.is_some_and(|d| d.is_zero()) {
            return Err(JiggleError::InvalidDuration);
        }
        Ok(Self {
            max_change,
            wait,
            logging,
            run_for,
        })
    }
}

/// Checks the loop parameters and returns the wait as a `Duration`.
pub fn validate(max_change: i32, wait_secs: f64) -> Result<Duration, JiggleError> {
    if max_change > MAX_CHANGE {
        return Err(JiggleError::MaxChangeTooLarge {
            value: max_change,
            ceiling: MAX_CHANGE,
        });
    }
    if max_change < 1 {
        return Err(JiggleError::MaxChangeTooSmall(max_change));
    }
    if wait_secs.is_nan() || wait_secs <= 0.0 {
        return Err(JiggleError::InvalidWait(wait_secs));
    }
    Duration::try_from_secs_f64(wait_secs).map_err(|_| JiggleError::InvalidWait(wait_secs))
}

/// Parses `--wait_time`: a plain number of seconds, or a duration like `90s` or `5m`.
pub fn parse_wait(value: &str) -> Result<f64, String> {
    if let Ok(secs) = value.trim().parse::<f64>() {
        return Ok(secs);
    }
    humantime::parse_duration(value.trim())
        .map(|d| d.as_secs_f64())
        .map_err(|e| format!("expected seconds or a duration like 90s: {}", e))
}
