use crate::error::JiggleError;
use crate::models::{Offset, Position, ScreenBounds};
use enigo::{Coordinate, Enigo, Mouse, Settings};

/// Read and move the system cursor.
pub trait CursorPort {
    fn position(&self) -> Result<Position, JiggleError>;
    fn move_by(&mut self, offset: Offset) -> Result<(), JiggleError>;
}

/// The host desktop, backed by enigo.
pub struct Desktop {
    enigo: Enigo,
}

impl Desktop {
    pub fn connect() -> Result<Self, JiggleError> {
        let enigo =
            Enigo::new(&Settings::default()).map_err(|e| JiggleError::Backend(e.to_string()))?;
        Ok(Self { enigo })
    }

    /// Size of the primary display. Queried once; later display changes are not seen.
    pub fn primary_bounds(&self) -> Result<ScreenBounds, JiggleError> {
        let (width, height) = self.enigo.main_display().map_err(|e| {
            tracing::debug!(error = %e, "main display query failed");
            JiggleError::NoDisplay
        })?;
        ScreenBounds::from_dimensions(width, height)
    }
}

impl CursorPort for Desktop {
    fn position(&self) -> Result<Position, JiggleError> {
        let (x, y) = self
            .enigo
            .location()
            .map_err(|e| JiggleError::InputQuery(e.to_string()))?;
        Ok(Position::new(x, y))
    }

    fn move_by(&mut self, offset: Offset) -> Result<(), JiggleError> {
        self.enigo
            .move_mouse(offset.dx, offset.dy, Coordinate::Rel)
            .map_err(|e| JiggleError::InputInjection(e.to_string()))
    }
}
