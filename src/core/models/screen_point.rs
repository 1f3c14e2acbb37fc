/// A point in global desktop coordinates (may be negative on multi-monitor setups).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x_position: i32,
    pub y_position: i32,
}

impl ScreenPoint {
    pub fn at_coordinates(x_position: i32, y_position: i32) -> Self {
        log::trace!(
            "[SCREEN_POINT] creating point at ({}, {})",
            x_position,
            y_position
        );

        Self {
            x_position,
            y_position,
        }
    }

    pub fn default_origin() -> Self {
        log::debug!("[SCREEN_POINT] using default origin (0, 0)");

        Self {
            x_position: 0,
            y_position: 0,
        }
    }

    pub fn offset_by(&self, delta_x: i32, delta_y: i32) -> Self {
        Self {
            x_position: self.x_position.saturating_add(delta_x),
            y_position: self.y_position.saturating_add(delta_y),
        }
    }
}
