use anyhow::{Context, Result};
use xcap::image::{imageops, RgbaImage};

use crate::adapters::macos_permissions;
use crate::core::errors::ProbeError;
use crate::core::interfaces::ports::ScreenCapturer;
use crate::core::models::{DisplaySurface, PixelBuffer};
use crate::global_constants::{
    ERROR_CONTEXT_CAPTURE_MONITOR, ERROR_CONTEXT_LIST_MONITORS, ERROR_CONTEXT_MONITOR_GEOMETRY,
    ERROR_CONTEXT_SCALE_FACTOR, LOG_TAG_CAPTURE,
};

pub struct XcapScreenCapturer;

impl XcapScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap screen capturer", LOG_TAG_CAPTURE);
        Self
    }

    fn describe_monitor(&self, monitor: &xcap::Monitor) -> Result<DisplaySurface> {
        let surface = DisplaySurface::build(
            monitor.id().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            monitor.name().unwrap_or_default(),
            monitor.x().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            monitor.y().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            monitor.width().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            monitor.height().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
        )
        .with_primary(monitor.is_primary().unwrap_or(false));

        Ok(surface)
    }

    fn enumerate_surfaces(&self) -> Result<Vec<DisplaySurface>> {
        let monitors = xcap::Monitor::all().context(ERROR_CONTEXT_LIST_MONITORS)?;

        monitors
            .iter()
            .map(|monitor| self.describe_monitor(monitor))
            .collect()
    }

    fn find_monitor(&self, surface: &DisplaySurface) -> Result<xcap::Monitor> {
        let monitors = xcap::Monitor::all().context(ERROR_CONTEXT_LIST_MONITORS)?;

        if let Some(monitor) = monitors
            .into_iter()
            .find(|monitor| monitor.id().map(|id| id == surface.id).unwrap_or(false))
        {
            return Ok(monitor);
        }

        log::debug!(
            "{} monitor {} not found by id, looking it up by position",
            LOG_TAG_CAPTURE,
            surface.id
        );

        xcap::Monitor::from_point(surface.x_position, surface.y_position).with_context(|| {
            format!(
                "failed to find monitor at ({}, {})",
                surface.x_position, surface.y_position
            )
        })
    }

    fn extract_scale_factor_from_monitor(&self, monitor: &xcap::Monitor) -> Result<f64> {
        let scale_factor = monitor
            .scale_factor()
            .with_context(|| ERROR_CONTEXT_SCALE_FACTOR)?;

        log::debug!("{} monitor scale factor: {}", LOG_TAG_CAPTURE, scale_factor);
        Ok(scale_factor as f64)
    }

    fn capture_monitor_image(&self, monitor: &xcap::Monitor) -> Result<RgbaImage> {
        monitor
            .capture_image()
            .with_context(|| ERROR_CONTEXT_CAPTURE_MONITOR)
    }

    /// Brings a capture onto the surface's coordinate grid. HiDPI backends return more
    /// physical pixels than the surface has points.
    fn convert_image_to_pixel_buffer(
        &self,
        image: RgbaImage,
        surface: &DisplaySurface,
        scale_factor: f64,
    ) -> Result<PixelBuffer> {
        let image = if image.width() != surface.width || image.height() != surface.height {
            log::debug!(
                "{} resampling {}x{} capture to {}x{}",
                LOG_TAG_CAPTURE,
                image.width(),
                image.height(),
                surface.width,
                surface.height
            );
            imageops::resize(
                &image,
                surface.width,
                surface.height,
                imageops::FilterType::Nearest,
            )
        } else {
            image
        };

        log::info!(
            "{} captured {} at {}x{}, scale_factor={}",
            LOG_TAG_CAPTURE,
            surface.name,
            image.width(),
            image.height(),
            scale_factor
        );

        let buffer =
            PixelBuffer::build_from_rgba(scale_factor, image.width(), image.height(), image.as_raw())?;
        Ok(buffer)
    }

    fn capture(&self, surface: &DisplaySurface) -> Result<PixelBuffer> {
        let monitor = self.find_monitor(surface)?;
        let scale_factor = self.extract_scale_factor_from_monitor(&monitor)?;
        let captured_image = self.capture_monitor_image(&monitor)?;

        self.convert_image_to_pixel_buffer(captured_image, surface, scale_factor)
    }
}

fn to_capture_error(error: anyhow::Error) -> ProbeError {
    ProbeError::CaptureUnavailable(format!("{:#}", error))
}

impl ScreenCapturer for XcapScreenCapturer {
    fn list_surfaces(&self) -> Result<Vec<DisplaySurface>, ProbeError> {
        let surfaces = self.enumerate_surfaces().map_err(to_capture_error)?;

        log::debug!("{} found {} monitors", LOG_TAG_CAPTURE, surfaces.len());
        Ok(surfaces)
    }

    fn capture_surface(&self, surface: &DisplaySurface) -> Result<PixelBuffer, ProbeError> {
        log::debug!(
            "{} capturing {} at ({}, {})",
            LOG_TAG_CAPTURE,
            surface.name,
            surface.x_position,
            surface.y_position
        );

        if surface.is_empty() {
            return Err(ProbeError::CaptureUnavailable(format!(
                "monitor {} has no area",
                surface.name
            )));
        }

        if !macos_permissions::macos::check_screen_recording_permission() {
            return Err(ProbeError::CaptureUnavailable(
                "screen recording permission not granted".to_string(),
            ));
        }

        self.capture(surface).map_err(to_capture_error)
    }

    fn request_access(&self) {
        if !macos_permissions::macos::check_screen_recording_permission() {
            macos_permissions::macos::open_screen_recording_settings();
        }
    }
}
