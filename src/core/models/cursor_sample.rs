use crate::core::models::{DisplaySurface, ScreenPoint};

/// Cursor position resolved against the surface it falls in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSample {
    pub global_point: ScreenPoint,
    pub surface: DisplaySurface,
    pub local_x: i32,
    pub local_y: i32,
}

impl CursorSample {
    /// Global point after clamping into the surface.
    pub fn clamped_global_point(&self) -> ScreenPoint {
        ScreenPoint {
            x_position: self.surface.x_position + self.local_x,
            y_position: self.surface.y_position + self.local_y,
        }
    }
}
