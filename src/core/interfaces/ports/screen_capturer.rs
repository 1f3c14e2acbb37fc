use crate::core::errors::ProbeError;
use crate::core::models::{DisplaySurface, PixelBuffer};

pub trait ScreenCapturer: Send + Sync {
    fn list_surfaces(&self) -> Result<Vec<DisplaySurface>, ProbeError>;

    fn capture_surface(&self, surface: &DisplaySurface) -> Result<PixelBuffer, ProbeError>;

    /// Asks the user to grant capture access. Only called after a failed activation.
    fn request_access(&self) {}
}
