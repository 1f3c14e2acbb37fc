use std::sync::Arc;

use iced::keyboard::{self, key::Named, Key};
use iced::{event, Element, Subscription, Task};

use crate::adapters::ArboardClipboard;
use crate::core::models::ProbeSettings;
use crate::core::interfaces::ports::GlobalInputEvent;
use crate::core::orchestrators::probe_orchestrator::{ProbeMessage, ProbeOrchestrator};
use crate::core::services::{SelectionController, ViewportStyle};
use crate::global_constants::{APPLICATION_TITLE, HOTKEY_ACTIVATE, LOG_TAG_APP};
use crate::ports::{RdevInputHook, SystemMousePositionProvider, XcapScreenCapturer};

pub struct ProbeApp {
    orchestrator: ProbeOrchestrator,
}

impl ProbeApp {
    pub fn build() -> (Self, Task<ProbeMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = ProbeSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {:#}, using defaults", LOG_TAG_APP, e);
            ProbeSettings::default()
        });

        let controller = SelectionController::build(
            Arc::new(XcapScreenCapturer::initialize()),
            Arc::new(RdevInputHook::initialize()),
            settings.zoom_config(),
            ViewportStyle::default(),
        )
        .with_recapture_backoff(settings.recapture_backoff());

        let orchestrator = ProbeOrchestrator::build(
            controller,
            Arc::new(SystemMousePositionProvider::initialize()),
            Arc::new(ArboardClipboard::initialize()),
            settings,
        );

        (Self { orchestrator }, Task::none())
    }

    pub fn title(&self) -> String {
        APPLICATION_TITLE.to_string()
    }

    pub fn handle_update(&mut self, message: ProbeMessage) -> Task<ProbeMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, ProbeMessage> {
        self.orchestrator.render_view()
    }

    pub fn handle_subscription(&self) -> Subscription<ProbeMessage> {
        Subscription::batch([
            Subscription::run(RdevInputHook::create_event_stream).map(ProbeMessage::GlobalInput),
            event::listen_with(|event, status, _id| {
                if status == event::Status::Captured {
                    return None;
                }
                match event {
                    iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                        map_window_key(&key)
                    }
                    _ => None,
                }
            }),
        ])
    }
}

/// Keys handled while the window has focus. Escape also ends a session when the global
/// hook delivers nothing.
fn map_window_key(key: &Key) -> Option<ProbeMessage> {
    match key {
        Key::Character(character) if is_activation_hotkey(character.as_str()) => {
            Some(ProbeMessage::StartSelection)
        }
        Key::Named(Named::Escape) => Some(ProbeMessage::GlobalInput(GlobalInputEvent::Cancel)),
        _ => None,
    }
}

fn is_activation_hotkey(character: &str) -> bool {
    character.eq_ignore_ascii_case(HOTKEY_ACTIVATE)
}
