#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

use adapters::macos_permissions;
use global_constants::{LOG_TAG_APP, MESSAGE_STARTING_APP};

fn main() -> iced::Result {
    env_logger::init();

    log::info!("{} {}", LOG_TAG_APP, MESSAGE_STARTING_APP);

    if !macos_permissions::macos::check_screen_recording_permission() {
        log::error!(
            "{} Screen recording permission not granted, captures will fail until it is",
            LOG_TAG_APP
        );
    }

    if !macos_permissions::macos::check_accessibility_permission() {
        log::error!(
            "{} Accessibility permission not granted, clicks cannot be captured globally",
            LOG_TAG_APP
        );
    }

    iced::application(
        app::ProbeApp::build,
        app::ProbeApp::handle_update,
        app::ProbeApp::render_view,
    )
    .title(app::ProbeApp::title)
    .subscription(app::ProbeApp::handle_subscription)
    .window_size(iced::Size::new(560.0, 480.0))
    .run()
}
