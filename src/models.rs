use crate::error::JiggleError;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    pub fn from_dimensions(width: i32, height: i32) -> Result<Self, JiggleError> {
        if width <= 0 || height <= 0 {
            return Err(JiggleError::NoDisplay);
        }
        Ok(Self { width, height })
    }

    /// Inclusive on both edges: `x == width` is still on screen.
    pub fn contains(&self, position: Position) -> bool {
        (0..=self.width).contains(&position.x) && (0..=self.height).contains(&position.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, offset: Offset) -> Self {
        Self {
            x: self.x.saturating_add(offset.dx),
            y: self.y.saturating_add(offset.dy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// One tick's worth of data, as written to the step log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub at: DateTime<Local>,
    pub position: Position,
    pub offset: Offset,
}
