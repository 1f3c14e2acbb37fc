pub mod app_theme;
mod viewport_canvas;

pub use viewport_canvas::ViewportCanvas;
