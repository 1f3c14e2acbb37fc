use crate::core::errors::ProbeError;
use crate::global_constants::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DEFAULT_ZOOM_FACTOR, MAX_MAGNIFIED_CELLS,
    MAX_VIEWPORT_DIMENSION,
};

/// Magnifier geometry, fixed for the lifetime of a selection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomConfig {
    zoom_factor: u32,
    viewport_width: u32,
    viewport_height: u32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl ZoomConfig {
    pub fn build(
        zoom_factor: u32,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Result<Self, ProbeError> {
        if zoom_factor == 0 {
            return Err(ProbeError::InvalidZoom(
                "zoom factor must be greater than zero".to_string(),
            ));
        }

        if viewport_width > MAX_VIEWPORT_DIMENSION || viewport_height > MAX_VIEWPORT_DIMENSION {
            return Err(ProbeError::InvalidZoom(format!(
                "viewport {}x{} exceeds the {}px limit",
                viewport_width, viewport_height, MAX_VIEWPORT_DIMENSION
            )));
        }

        if viewport_width < zoom_factor || viewport_height < zoom_factor {
            return Err(ProbeError::InvalidZoom(format!(
                "viewport {}x{} cannot hold a single {}px cell",
                viewport_width, viewport_height, zoom_factor
            )));
        }

        // Covering the viewport takes up to one extra partial cell on each side.
        let columns = u64::from(viewport_width / zoom_factor) + 2;
        let rows = u64::from(viewport_height / zoom_factor) + 2;
        if columns * rows > MAX_MAGNIFIED_CELLS {
            return Err(ProbeError::InvalidZoom(format!(
                "zoom {} on a {}x{} viewport draws {} cells, limit is {}",
                zoom_factor,
                viewport_width,
                viewport_height,
                columns * rows,
                MAX_MAGNIFIED_CELLS
            )));
        }

        Ok(Self {
            zoom_factor,
            viewport_width,
            viewport_height,
        })
    }

    pub fn zoom_factor(&self) -> i32 {
        self.zoom_factor as i32
    }

    pub fn viewport_width(&self) -> i32 {
        self.viewport_width as i32
    }

    pub fn viewport_height(&self) -> i32 {
        self.viewport_height as i32
    }

    pub fn half_width(&self) -> i32 {
        self.viewport_width() / 2
    }

    pub fn half_height(&self) -> i32 {
        self.viewport_height() / 2
    }

    /// Source pixels visible horizontally.
    pub fn zoom_width(&self) -> i32 {
        self.viewport_width() / self.zoom_factor()
    }

    /// Source pixels visible vertically.
    pub fn zoom_height(&self) -> i32 {
        self.viewport_height() / self.zoom_factor()
    }

    pub fn zoom_midpoint(&self) -> i32 {
        self.zoom_factor() / 2
    }
}
