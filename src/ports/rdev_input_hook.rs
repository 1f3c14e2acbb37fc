use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, AtomicUsize, Ordering};

use futures::{channel::mpsc, SinkExt, Stream, StreamExt};
use iced::stream;
use rdev::{grab, listen, Button, Event, EventType, Key};

use crate::core::errors::ProbeError;
use crate::core::interfaces::ports::{
    GlobalInputEvent, GlobalInputHook, HookSubscription, NudgeDirection,
};
use crate::global_constants::{
    LOG_TAG_HOOK, MESSAGE_HOOK_GRAB_FAILED, MESSAGE_HOOK_LISTEN_FAILED, MESSAGE_HOOK_UNAVAILABLE,
};

static HOOK_GATE: HookGate = HookGate::new();

/// What the hook thread does with one raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routing {
    pub forward: Option<GlobalInputEvent>,
    pub consume: bool,
}

impl Routing {
    const PASS_THROUGH: Routing = Routing {
        forward: None,
        consume: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookHealth {
    Starting,
    Running,
    Failed,
}

impl HookHealth {
    const fn as_u8(self) -> u8 {
        match self {
            HookHealth::Starting => 0,
            HookHealth::Running => 1,
            HookHealth::Failed => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => HookHealth::Starting,
            1 => HookHealth::Running,
            _ => HookHealth::Failed,
        }
    }
}

/// Shared between the UI thread (subscribe/unsubscribe) and the hook thread (route).
pub struct HookGate {
    health: AtomicU8,
    active_subscriptions: AtomicUsize,
    next_subscription_id: AtomicU64,
    swallow_left_release: AtomicBool,
}

impl HookGate {
    pub const fn new() -> Self {
        Self {
            health: AtomicU8::new(HookHealth::Starting.as_u8()),
            active_subscriptions: AtomicUsize::new(0),
            next_subscription_id: AtomicU64::new(1),
            swallow_left_release: AtomicBool::new(false),
        }
    }

    pub fn health(&self) -> HookHealth {
        HookHealth::from_u8(self.health.load(Ordering::SeqCst))
    }

    pub fn set_health(&self, health: HookHealth) {
        log::debug!("{} hook health is now {:?}", LOG_TAG_HOOK, health);
        self.health.store(health.as_u8(), Ordering::SeqCst);
    }

    /// Refuses new subscriptions once the hook thread has stopped delivering events.
    pub fn open(&self) -> Result<HookSubscription, ProbeError> {
        if self.health() == HookHealth::Failed {
            return Err(ProbeError::HookUnavailable(
                MESSAGE_HOOK_UNAVAILABLE.to_string(),
            ));
        }

        let id = self.next_subscription_id.fetch_add(1, Ordering::Relaxed);
        let active = self.active_subscriptions.fetch_add(1, Ordering::SeqCst) + 1;

        log::debug!(
            "{} subscription {} opened, {} active",
            LOG_TAG_HOOK,
            id,
            active
        );
        Ok(HookSubscription::from_id(id))
    }

    pub fn close(&self, subscription: HookSubscription) {
        let previous = self
            .active_subscriptions
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                Some(count.saturating_sub(1))
            })
            .unwrap_or(0);

        log::debug!(
            "{} subscription {} closed, {} active",
            LOG_TAG_HOOK,
            subscription.id(),
            previous.saturating_sub(1)
        );
    }

    pub fn active(&self) -> usize {
        self.active_subscriptions.load(Ordering::SeqCst)
    }

    pub fn is_forwarding(&self) -> bool {
        self.active() > 0
    }

    /// A left press swallowed while forwarding also swallows its release, even when
    /// the press ended the session.
    pub fn route(&self, event_type: &EventType) -> Routing {
        if let EventType::ButtonRelease(Button::Left) = event_type {
            if self.swallow_left_release.swap(false, Ordering::SeqCst) {
                return Routing {
                    forward: None,
                    consume: true,
                };
            }
        }

        if !self.is_forwarding() {
            return Routing::PASS_THROUGH;
        }

        let consume = is_probe_input(event_type);
        if let EventType::ButtonPress(Button::Left) = event_type {
            self.swallow_left_release.store(true, Ordering::SeqCst);
        }

        Routing {
            forward: translate_event(event_type),
            consume,
        }
    }
}

impl Default for HookGate {
    fn default() -> Self {
        Self::new()
    }
}

fn nudge_for_key(key: &Key) -> Option<NudgeDirection> {
    match key {
        Key::KeyW | Key::UpArrow => Some(NudgeDirection::Up),
        Key::KeyS | Key::DownArrow => Some(NudgeDirection::Down),
        Key::KeyA | Key::LeftArrow => Some(NudgeDirection::Left),
        Key::KeyD | Key::RightArrow => Some(NudgeDirection::Right),
        _ => None,
    }
}

fn is_probe_key(key: &Key) -> bool {
    nudge_for_key(key).is_some() || matches!(key, Key::Space | Key::Return | Key::Escape)
}

fn is_probe_input(event_type: &EventType) -> bool {
    match event_type {
        EventType::ButtonPress(Button::Left) | EventType::ButtonRelease(Button::Left) => true,
        EventType::KeyPress(key) | EventType::KeyRelease(key) => is_probe_key(key),
        _ => false,
    }
}

pub fn translate_event(event_type: &EventType) -> Option<GlobalInputEvent> {
    match event_type {
        EventType::MouseMove { x, y } => Some(GlobalInputEvent::PointerMoved {
            x: x.round() as i32,
            y: y.round() as i32,
        }),
        EventType::ButtonPress(Button::Left) => Some(GlobalInputEvent::PointerClicked),
        EventType::KeyPress(Key::Space | Key::Return) => Some(GlobalInputEvent::Confirm),
        EventType::KeyPress(Key::Escape) => Some(GlobalInputEvent::Cancel),
        EventType::KeyPress(key) => nudge_for_key(key).map(GlobalInputEvent::Nudge),
        _ => None,
    }
}

pub struct RdevInputHook;

impl RdevInputHook {
    pub fn initialize() -> Self {
        log::debug!("{} initializing global input hook", LOG_TAG_HOOK);
        Self
    }

    /// One hook thread for the lifetime of the stream; events flow only while subscribed.
    pub fn create_event_stream() -> impl Stream<Item = GlobalInputEvent> {
        stream::channel(
            64,
            |mut output_channel: mpsc::Sender<GlobalInputEvent>| async move {
                let (hook_sender, mut hook_receiver) = mpsc::unbounded();

                Self::spawn_hook_thread(hook_sender);

                while let Some(global_event) = hook_receiver.next().await {
                    if output_channel.send(global_event).await.is_err() {
                        log::warn!("{} UI stream closed, stopping event relay", LOG_TAG_HOOK);
                        break;
                    }
                }
            },
        )
    }

    fn spawn_hook_thread(hook_sender: mpsc::UnboundedSender<GlobalInputEvent>) {
        std::thread::spawn(move || {
            log::info!("{} Starting global input hook thread", LOG_TAG_HOOK);

            let grab_sender = hook_sender.clone();
            HOOK_GATE.set_health(HookHealth::Running);
            let grab_result = grab(move |event: Event| {
                let routing = HOOK_GATE.route(&event.event_type);
                if let Some(global_event) = routing.forward {
                    let _ = grab_sender.unbounded_send(global_event);
                }
                if routing.consume {
                    None
                } else {
                    Some(event)
                }
            });

            if let Err(error) = grab_result {
                log::error!("{} {}: {:?}", LOG_TAG_HOOK, MESSAGE_HOOK_GRAB_FAILED, error);

                if let Err(error) = listen(move |event: Event| {
                    if let Some(global_event) = HOOK_GATE.route(&event.event_type).forward {
                        let _ = hook_sender.unbounded_send(global_event);
                    }
                }) {
                    log::error!("{} {}: {:?}", LOG_TAG_HOOK, MESSAGE_HOOK_LISTEN_FAILED, error);
                }
            }

            // Both backends return only when they stop delivering events.
            HOOK_GATE.set_health(HookHealth::Failed);
        });
    }
}

impl GlobalInputHook for RdevInputHook {
    fn subscribe(&self) -> Result<HookSubscription, ProbeError> {
        HOOK_GATE.open()
    }

    fn unsubscribe(&self, subscription: HookSubscription) {
        HOOK_GATE.close(subscription);
    }

    fn active_subscriptions(&self) -> usize {
        HOOK_GATE.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_mouse_move_rounds_to_pixels() {
        let event = EventType::MouseMove { x: 1919.6, y: -3.2 };

        assert_eq!(
            translate_event(&event),
            Some(GlobalInputEvent::PointerMoved { x: 1920, y: -3 })
        );
    }

    #[test]
    fn test_translate_left_press_is_click() {
        assert_eq!(
            translate_event(&EventType::ButtonPress(Button::Left)),
            Some(GlobalInputEvent::PointerClicked)
        );
        assert_eq!(translate_event(&EventType::ButtonPress(Button::Right)), None);
        assert_eq!(translate_event(&EventType::ButtonRelease(Button::Left)), None);
    }

    #[test]
    fn test_translate_wasd_and_arrows_nudge() {
        let cases = [
            (Key::KeyW, NudgeDirection::Up),
            (Key::UpArrow, NudgeDirection::Up),
            (Key::KeyS, NudgeDirection::Down),
            (Key::DownArrow, NudgeDirection::Down),
            (Key::KeyA, NudgeDirection::Left),
            (Key::LeftArrow, NudgeDirection::Left),
            (Key::KeyD, NudgeDirection::Right),
            (Key::RightArrow, NudgeDirection::Right),
        ];

        for (key, direction) in cases {
            assert_eq!(
                translate_event(&EventType::KeyPress(key)),
                Some(GlobalInputEvent::Nudge(direction))
            );
        }
    }

    #[test]
    fn test_translate_confirm_and_cancel_keys() {
        assert_eq!(
            translate_event(&EventType::KeyPress(Key::Space)),
            Some(GlobalInputEvent::Confirm)
        );
        assert_eq!(
            translate_event(&EventType::KeyPress(Key::Return)),
            Some(GlobalInputEvent::Confirm)
        );
        assert_eq!(
            translate_event(&EventType::KeyPress(Key::Escape)),
            Some(GlobalInputEvent::Cancel)
        );
        assert_eq!(translate_event(&EventType::KeyRelease(Key::Escape)), None);
        assert_eq!(translate_event(&EventType::KeyPress(Key::KeyZ)), None);
    }

    #[test]
    fn test_closed_gate_passes_everything_through() {
        let gate = HookGate::new();

        for event in [
            EventType::MouseMove { x: 1.0, y: 1.0 },
            EventType::ButtonPress(Button::Left),
            EventType::KeyPress(Key::Escape),
        ] {
            assert_eq!(gate.route(&event), Routing::PASS_THROUGH);
        }
    }

    #[test]
    fn test_open_gate_forwards_and_consumes_probe_input() {
        let gate = HookGate::new();
        let _subscription = gate.open().unwrap();

        let moved = gate.route(&EventType::MouseMove { x: 5.0, y: 6.0 });
        assert_eq!(moved.forward, Some(GlobalInputEvent::PointerMoved { x: 5, y: 6 }));
        assert!(!moved.consume);

        let key = gate.route(&EventType::KeyPress(Key::KeyD));
        assert!(key.consume);

        let other_key = gate.route(&EventType::KeyPress(Key::KeyQ));
        assert_eq!(other_key, Routing::PASS_THROUGH);
    }

    #[test]
    fn test_release_of_swallowed_click_is_swallowed_after_close() {
        let gate = HookGate::new();
        let subscription = gate.open().unwrap();

        let press = gate.route(&EventType::ButtonPress(Button::Left));
        assert_eq!(press.forward, Some(GlobalInputEvent::PointerClicked));
        assert!(press.consume);

        gate.close(subscription);

        let release = gate.route(&EventType::ButtonRelease(Button::Left));
        assert!(release.consume);
        assert_eq!(release.forward, None);

        let next_release = gate.route(&EventType::ButtonRelease(Button::Left));
        assert_eq!(next_release, Routing::PASS_THROUGH);
    }

    #[test]
    fn test_subscription_count_returns_to_zero() {
        let gate = HookGate::new();

        let first = gate.open().unwrap();
        let second = gate.open().unwrap();
        assert_ne!(first.id(), second.id());
        assert_eq!(gate.active(), 2);

        gate.close(first);
        gate.close(second);

        assert_eq!(gate.active(), 0);
        assert!(!gate.is_forwarding());
    }

    #[test]
    fn test_failed_hook_refuses_subscriptions() {
        let gate = HookGate::new();
        assert_eq!(gate.health(), HookHealth::Starting);
        assert!(gate.open().is_ok());

        gate.set_health(HookHealth::Failed);

        assert!(matches!(gate.open(), Err(ProbeError::HookUnavailable(_))));
        assert_eq!(gate.active(), 1);
    }

    #[test]
    fn test_running_hook_accepts_subscriptions() {
        let gate = HookGate::new();
        gate.set_health(HookHealth::Running);

        let subscription = gate.open().unwrap();

        assert!(gate.is_forwarding());
        gate.close(subscription);
        assert_eq!(gate.active(), 0);
    }
}
