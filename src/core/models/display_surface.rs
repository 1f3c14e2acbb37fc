use crate::core::models::ScreenPoint;

/// One physical monitor in global desktop coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySurface {
    pub id: u32,
    pub name: String,
    pub x_position: i32,
    pub y_position: i32,
    pub width: u32,
    pub height: u32,
    pub is_primary: bool,
}

impl DisplaySurface {
    pub fn build(
        id: u32,
        name: impl Into<String>,
        x_position: i32,
        y_position: i32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            x_position,
            y_position,
            width,
            height,
            is_primary: false,
        }
    }

    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x_position as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y_position as i64 + self.height as i64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        let x = point.x_position as i64;
        let y = point.y_position as i64;
        x >= self.x_position as i64
            && x < self.right()
            && y >= self.y_position as i64
            && y < self.bottom()
    }

    /// Nearest point inside the surface. Assumes a non-empty surface.
    pub fn clamp_point(&self, point: ScreenPoint) -> ScreenPoint {
        let max_x = (self.right() - 1).max(self.x_position as i64);
        let max_y = (self.bottom() - 1).max(self.y_position as i64);

        ScreenPoint {
            x_position: (point.x_position as i64).clamp(self.x_position as i64, max_x) as i32,
            y_position: (point.y_position as i64).clamp(self.y_position as i64, max_y) as i32,
        }
    }

    pub fn squared_distance_to(&self, point: ScreenPoint) -> i64 {
        let clamped = self.clamp_point(point);
        let delta_x = point.x_position as i64 - clamped.x_position as i64;
        let delta_y = point.y_position as i64 - clamped.y_position as i64;
        delta_x * delta_x + delta_y * delta_y
    }

    pub fn is_same_monitor(&self, other: &DisplaySurface) -> bool {
        self.id == other.id
            && self.x_position == other.x_position
            && self.y_position == other.y_position
            && self.width == other.width
            && self.height == other.height
    }
}
