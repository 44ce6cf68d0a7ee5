use crate::config::Config;
use crate::error::JiggleError;
use crate::logger::StepLogger;
use crate::models::{Offset, Position, ScreenBounds, Step};
use crate::shutdown::Shutdown;
use crate::system::CursorPort;
use chrono::{DateTime, Local};
use rand::Rng;
use std::time::Instant;
use tracing::{debug, warn};

/// Source of per-tick offsets.
pub trait OffsetSource {
    /// Draws an offset with each axis in `[-max_change, max_change]`.
    fn draw(&mut self, max_change: i32) -> Offset;
}

/// Uniform, independent draws per axis.
pub struct RandomOffsets<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomOffsets<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> OffsetSource for RandomOffsets<R> {
    fn draw(&mut self, max_change: i32) -> Offset {
        Offset::new(
            self.rng.gen_range(-max_change..=max_change),
            self.rng.gen_range(-max_change..=max_change),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Moved(Step),
    /// Zero offset drawn; nothing to move.
    Stayed(Step),
    OutOfBounds(Step),
}

impl TickOutcome {
    pub fn step(&self) -> &Step {
        match self {
            TickOutcome::Moved(step)
            | TickOutcome::Stayed(step)
            | TickOutcome::OutOfBounds(step) => step,
        }
    }
}

pub struct Jiggler<C: CursorPort, O: OffsetSource> {
    pub config: Config,
    pub bounds: ScreenBounds,
    cursor: C,
    offsets: O,
    logger: StepLogger,
}

impl<C: CursorPort, O: OffsetSource> Jiggler<C, O> {
    pub fn new(
        config: Config,
        bounds: ScreenBounds,
        cursor: C,
        offsets: O,
        logger: StepLogger,
    ) -> Self {
        Self {
            config,
            bounds,
            cursor,
            offsets,
            logger,
        }
    }

    /// Reads the cursor, draws an offset and moves if the result stays on screen.
    /// Only in-bounds steps reach the step log, so a logged change is always one
    /// that was applied.
    pub fn tick(&mut self, now: DateTime<Local>) -> Result<TickOutcome, JiggleError> {
        let position: Position = self.cursor.position()?;
        let offset = self.offsets.draw(self.config.max_change);
        let step = Step {
            at: now,
            position,
            offset,
        };

        let candidate = position.offset_by(offset);
        if !self.bounds.contains(candidate) {
            debug!(
                x = candidate.x,
                y = candidate.y,
                "candidate outside screen bounds, skipping move"
            );
            return Ok(TickOutcome::OutOfBounds(step));
        }

        let outcome = if offset.is_zero() {
            TickOutcome::Stayed(step)
        } else {
            self.cursor.move_by(offset)?;
            TickOutcome::Moved(step)
        };

        self.logger.record(&step)?;
        Ok(outcome)
    }

    /// Ticks immediately, then once per wait interval, until `shutdown` fires or
    /// the configured run duration elapses. Returns the number of ticks run.
    pub fn run(&mut self, shutdown: &Shutdown) -> Result<u64, JiggleError> {
        let started = Instant::now();
        let mut ticks = 0;

        loop {
            if let Some(limit) = self.config.run_for {
                if started.elapsed() >= limit {
                    debug!("run duration reached");
                    break;
                }
            }

            match self.tick(Local::now()) {
                Ok(TickOutcome::OutOfBounds(_)) => {}
                Ok(outcome) => {
                    let step = outcome.step();
                    debug!(?step.position, ?step.offset, "tick");
                }
                Err(err) if err.is_per_tick() => warn!(error = %err, "tick failed, skipping"),
                Err(err) => return Err(err),
            }
            ticks += 1;

            let wait = match self.config.run_for {
                Some(limit) => self
                    .config
                    .wait
                    .min(limit.saturating_sub(started.elapsed())),
                None => self.config.wait,
            };
            if shutdown.wait(wait) {
                debug!("shutdown requested");
                break;
            }
        }

        Ok(ticks)
    }
}
