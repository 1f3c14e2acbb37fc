use crate::core::errors::ProbeError;
use crate::core::models::PixelColor;

const BYTES_PER_PIXEL: usize = 3;

/// Immutable 24-bit RGB snapshot of one display surface.
#[derive(Clone, PartialEq)]
pub struct PixelBuffer {
    scale_factor: f64,
    width: u32,
    height: u32,
    raw_rgb_data: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("scale_factor", &self.scale_factor)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl PixelBuffer {
    pub fn build_from_rgb(
        scale_factor: f64,
        width_pixels: u32,
        height_pixels: u32,
        raw_rgb_data: Vec<u8>,
    ) -> Result<Self, ProbeError> {
        let expected_length = Self::expected_length(width_pixels, height_pixels, BYTES_PER_PIXEL)?;

        if raw_rgb_data.len() != expected_length {
            return Err(ProbeError::InvalidBuffer(format!(
                "expected {} RGB bytes for {}x{}, got {}",
                expected_length,
                width_pixels,
                height_pixels,
                raw_rgb_data.len()
            )));
        }

        log::debug!(
            "[PIXEL_BUFFER] building buffer: {}x{}, scale={}",
            width_pixels,
            height_pixels,
            scale_factor
        );

        Ok(Self {
            scale_factor,
            width: width_pixels,
            height: height_pixels,
            raw_rgb_data,
        })
    }

    /// Drops the alpha channel of a capture backend's RGBA frame.
    pub fn build_from_rgba(
        scale_factor: f64,
        width_pixels: u32,
        height_pixels: u32,
        raw_rgba_data: &[u8],
    ) -> Result<Self, ProbeError> {
        let expected_length = Self::expected_length(width_pixels, height_pixels, 4)?;

        if raw_rgba_data.len() != expected_length {
            return Err(ProbeError::InvalidBuffer(format!(
                "expected {} RGBA bytes for {}x{}, got {}",
                expected_length,
                width_pixels,
                height_pixels,
                raw_rgba_data.len()
            )));
        }

        let raw_rgb_data = raw_rgba_data
            .chunks_exact(4)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect();

        Self::build_from_rgb(scale_factor, width_pixels, height_pixels, raw_rgb_data)
    }

    fn expected_length(width: u32, height: u32, bytes_per_pixel: usize) -> Result<usize, ProbeError> {
        if width == 0 || height == 0 {
            return Err(ProbeError::InvalidBuffer(format!(
                "buffer dimensions must be greater than zero, got {}x{}",
                width, height
            )));
        }

        Ok(width as usize * height as usize * bytes_per_pixel)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.width as i64 && (y as i64) < self.height as i64
    }

    /// Reads one pixel. Coordinates outside the buffer yield [`PixelColor::SENTINEL`].
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> PixelColor {
        if !self.contains(x, y) {
            return PixelColor::SENTINEL;
        }

        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        PixelColor::from_rgb(
            self.raw_rgb_data[offset],
            self.raw_rgb_data[offset + 1],
            self.raw_rgb_data[offset + 2],
        )
    }
}
