use crate::models::Step;
use std::io::{self, Write};

/// Writes one text line per step, e.g.
/// `[2024-01-01 12:00:00] Current Position: (640, 400), Change: (3, -7)`.
pub struct StepLogger {
    out: Option<Box<dyn Write + Send>>,
}

impl StepLogger {
    pub fn stdout() -> Self {
        Self::to_writer(io::stdout())
    }

    pub fn to_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Some(Box::new(out)),
        }
    }

    pub fn disabled() -> Self {
        Self { out: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, step: &Step) -> io::Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };
        writeln!(out, "{}", format_step(step))?;
        out.flush()
    }
}

pub fn format_step(step: &Step) -> String {
    format!(
        "[{}] Current Position: ({}, {}), Change: ({}, {})",
        step.at.format("%Y-%m-%d %H:%M:%S"),
        step.position.x,
        step.position.y,
        step.offset.dx,
        step.offset.dy
    )
}
