mod color;
mod cursor_sample;
mod display_surface;
mod palette;
mod pixel_buffer;
mod screen_point;
mod user_settings;
mod zoom_config;

pub use color::{Hsl, PixelColor};
pub use cursor_sample::CursorSample;
pub use display_surface::DisplaySurface;
pub use palette::Palette;
pub use pixel_buffer::PixelBuffer;
pub use screen_point::ScreenPoint;
pub use user_settings::{ProbeSettings, ThemeMode};
pub use zoom_config::ZoomConfig;
