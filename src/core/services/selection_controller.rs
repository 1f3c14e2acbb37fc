use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::errors::ProbeError;
use crate::core::interfaces::ports::{
    GlobalInputEvent, GlobalInputHook, HookSubscription, NudgeDirection, ScreenCapturer,
};
use crate::core::models::{CursorSample, DisplaySurface, PixelBuffer, PixelColor, ScreenPoint, ZoomConfig};
use crate::core::services::coordinate_mapper::CoordinateMapper;
use crate::core::services::viewport_renderer::{ViewportFrame, ViewportRenderer, ViewportStyle};
use crate::global_constants::{
    DEFAULT_RECAPTURE_BACKOFF_MILLIS, LOG_TAG_SELECTION, MESSAGE_SELECTION_ALREADY_ACTIVE, MESSAGE_SELECTION_ENDED,
    MESSAGE_SELECTION_STARTED, MESSAGE_STALE_RECAPTURE, MESSAGE_SURFACE_CHANGED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    Click,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub color: PixelColor,
    pub reason: TerminationReason,
}

/// Result of one resample: where the probe is and what the magnifier shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeUpdate {
    pub cursor: CursorSample,
    pub frame: ViewportFrame,
}

impl ProbeUpdate {
    pub fn color(&self) -> PixelColor {
        self.frame.sampled_color
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActivationOutcome {
    Started(ProbeUpdate),
    AlreadySelecting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionStep {
    Ignored,
    Updated(ProbeUpdate),
    Finished(SessionOutcome),
}

struct SelectionSession {
    cursor: CursorSample,
    buffer: PixelBuffer,
    surfaces: Vec<DisplaySurface>,
    is_stale: bool,
    /// Set after a failed recapture; no capture is attempted before this instant.
    retry_after: Option<Instant>,
    sampled_color: PixelColor,
    subscription: HookSubscription,
}

impl SelectionSession {
    fn is_backing_off(&self, now: Instant) -> bool {
        self.retry_after.is_some_and(|retry_after| now < retry_after)
    }
}

enum SelectionState {
    Idle,
    Selecting(SelectionSession),
}

pub struct SelectionController {
    screen_capturer: Arc<dyn ScreenCapturer>,
    input_hook: Arc<dyn GlobalInputHook>,
    zoom: ZoomConfig,
    style: ViewportStyle,
    recapture_backoff: Duration,
    state: SelectionState,
}

impl SelectionController {
    pub fn build(
        screen_capturer: Arc<dyn ScreenCapturer>,
        input_hook: Arc<dyn GlobalInputHook>,
        zoom: ZoomConfig,
        style: ViewportStyle,
    ) -> Self {
        Self {
            screen_capturer,
            input_hook,
            zoom,
            style,
            recapture_backoff: Duration::from_millis(DEFAULT_RECAPTURE_BACKOFF_MILLIS),
            state: SelectionState::Idle,
        }
    }

    pub fn with_recapture_backoff(mut self, recapture_backoff: Duration) -> Self {
        self.recapture_backoff = recapture_backoff;
        self
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.state, SelectionState::Selecting(_))
    }

    pub fn is_activation_enabled(&self) -> bool {
        !self.is_selecting()
    }

    pub fn zoom(&self) -> ZoomConfig {
        self.zoom
    }

    pub fn sampled_color(&self) -> Option<PixelColor> {
        match &self.state {
            SelectionState::Selecting(session) => Some(session.sampled_color),
            SelectionState::Idle => None,
        }
    }

    /// Captures the surface under `start_point` and subscribes to global input.
    /// Capture runs first so a failure never leaves a subscription behind; a failed
    /// capture also asks the capturer to request access from the user.
    pub fn activate(&mut self, start_point: ScreenPoint) -> Result<ActivationOutcome, ProbeError> {
        if self.is_selecting() {
            log::debug!("{} {}", LOG_TAG_SELECTION, MESSAGE_SELECTION_ALREADY_ACTIVE);
            return Ok(ActivationOutcome::AlreadySelecting);
        }

        let surfaces = self.screen_capturer.list_surfaces()?;
        let cursor = CoordinateMapper::to_local(start_point, &surfaces).ok_or_else(|| {
            ProbeError::CaptureUnavailable("no display surface with a non-zero area".to_string())
        })?;

        let buffer = match self.screen_capturer.capture_surface(&cursor.surface) {
            Ok(buffer) => buffer,
            Err(error) => {
                self.screen_capturer.request_access();
                return Err(error);
            }
        };
        let subscription = self.input_hook.subscribe()?;

        let update = build_update(&buffer, &cursor, &self.zoom, &self.style);

        log::info!(
            "{} {} on {} at ({}, {})",
            LOG_TAG_SELECTION,
            MESSAGE_SELECTION_STARTED,
            cursor.surface.name,
            cursor.local_x,
            cursor.local_y
        );

        self.state = SelectionState::Selecting(SelectionSession {
            cursor,
            buffer,
            surfaces,
            is_stale: false,
            retry_after: None,
            sampled_color: update.color(),
            subscription,
        });

        Ok(ActivationOutcome::Started(update))
    }

    pub fn handle_input(&mut self, event: GlobalInputEvent) -> SelectionStep {
        let step = match event {
            GlobalInputEvent::PointerMoved { x, y } => self
                .handle_pointer_moved(ScreenPoint::at_coordinates(x, y))
                .map(SelectionStep::Updated),
            GlobalInputEvent::Nudge(direction) => {
                self.handle_nudge(direction).map(SelectionStep::Updated)
            }
            GlobalInputEvent::PointerClicked => self
                .terminate(TerminationReason::Click)
                .map(SelectionStep::Finished),
            GlobalInputEvent::Confirm => self
                .terminate(TerminationReason::Confirm)
                .map(SelectionStep::Finished),
            GlobalInputEvent::Cancel => self
                .terminate(TerminationReason::Cancel)
                .map(SelectionStep::Finished),
        };

        step.unwrap_or(SelectionStep::Ignored)
    }

    pub fn handle_pointer_moved(&mut self, point: ScreenPoint) -> Option<ProbeUpdate> {
        let SelectionState::Selecting(session) = &mut self.state else {
            return None;
        };

        let now = Instant::now();
        let backing_off = session.is_backing_off(now);

        let outside_layout = CoordinateMapper::surface_at(point, &session.surfaces).is_none();
        if (session.is_stale || outside_layout) && !backing_off {
            refresh_surfaces(self.screen_capturer.as_ref(), session);
        }

        let mut cursor = CoordinateMapper::to_local(point, &session.surfaces)?;
        let surface_changed = !cursor.surface.is_same_monitor(&session.cursor.surface);

        if surface_changed || session.is_stale {
            let recaptured = if backing_off {
                log::trace!("{} recapture backing off", LOG_TAG_SELECTION);
                false
            } else {
                log::debug!(
                    "{} {}",
                    LOG_TAG_SELECTION,
                    if surface_changed {
                        MESSAGE_SURFACE_CHANGED
                    } else {
                        MESSAGE_STALE_RECAPTURE
                    }
                );

                match self.screen_capturer.capture_surface(&cursor.surface) {
                    Ok(buffer) => {
                        session.buffer = buffer;
                        session.is_stale = false;
                        session.retry_after = None;
                        true
                    }
                    Err(error) => {
                        log::warn!(
                            "{} recapture of {} failed, keeping previous capture for {:?}: {}",
                            LOG_TAG_SELECTION,
                            cursor.surface.name,
                            self.recapture_backoff,
                            error
                        );
                        session.retry_after = Some(now + self.recapture_backoff);
                        false
                    }
                }
            };

            if !recaptured {
                session.is_stale = true;
                if surface_changed {
                    cursor = CoordinateMapper::to_local(
                        point,
                        std::slice::from_ref(&session.cursor.surface),
                    )?;
                }
            }
        }

        let update = build_update(&session.buffer, &cursor, &self.zoom, &self.style);
        session.cursor = cursor;
        session.sampled_color = update.color();

        Some(update)
    }

    /// Moves the probe one pixel, staying on the current surface. The desktop may change
    /// while the pointer rests, so the next pointer move recaptures.
    pub fn handle_nudge(&mut self, direction: NudgeDirection) -> Option<ProbeUpdate> {
        let SelectionState::Selecting(session) = &mut self.state else {
            return None;
        };

        let (delta_x, delta_y) = direction.delta();
        let target = session.cursor.clamped_global_point().offset_by(delta_x, delta_y);
        let cursor =
            CoordinateMapper::to_local(target, std::slice::from_ref(&session.cursor.surface))?;

        log::debug!(
            "{} nudged {:?} to local ({}, {})",
            LOG_TAG_SELECTION,
            direction,
            cursor.local_x,
            cursor.local_y
        );

        let update = build_update(&session.buffer, &cursor, &self.zoom, &self.style);
        session.cursor = cursor;
        session.sampled_color = update.color();
        session.is_stale = true;

        Some(update)
    }

    /// Ends the session, releasing the hook subscription. Returns `None` when idle.
    pub fn terminate(&mut self, reason: TerminationReason) -> Option<SessionOutcome> {
        match std::mem::replace(&mut self.state, SelectionState::Idle) {
            SelectionState::Idle => None,
            SelectionState::Selecting(session) => {
                self.input_hook.unsubscribe(session.subscription);

                log::info!(
                    "{} {} ({:?}) with {}",
                    LOG_TAG_SELECTION,
                    MESSAGE_SELECTION_ENDED,
                    reason,
                    session.sampled_color.to_hex()
                );

                Some(SessionOutcome {
                    color: session.sampled_color,
                    reason,
                })
            }
        }
    }
}

fn build_update(
    buffer: &PixelBuffer,
    cursor: &CursorSample,
    zoom: &ZoomConfig,
    style: &ViewportStyle,
) -> ProbeUpdate {
    ProbeUpdate {
        cursor: cursor.clone(),
        frame: ViewportRenderer::render(buffer, cursor.local_x, cursor.local_y, zoom, style),
    }
}

fn refresh_surfaces(screen_capturer: &dyn ScreenCapturer, session: &mut SelectionSession) {
    match screen_capturer.list_surfaces() {
        Ok(surfaces) if !surfaces.is_empty() => session.surfaces = surfaces,
        Ok(_) => log::warn!(
            "{} monitor list came back empty, keeping previous layout",
            LOG_TAG_SELECTION
        ),
        Err(error) => log::warn!(
            "{} failed to refresh monitor layout: {}",
            LOG_TAG_SELECTION,
            error
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockScreenCapturer {
        surfaces: Mutex<Vec<DisplaySurface>>,
        capture_count: AtomicUsize,
        attempt_count: AtomicUsize,
        access_requests: AtomicUsize,
        should_fail: AtomicBool,
    }

    impl MockScreenCapturer {
        fn with_surfaces(surfaces: Vec<DisplaySurface>) -> Arc<Self> {
            Arc::new(Self {
                surfaces: Mutex::new(surfaces),
                capture_count: AtomicUsize::new(0),
                attempt_count: AtomicUsize::new(0),
                access_requests: AtomicUsize::new(0),
                should_fail: AtomicBool::new(false),
            })
        }

        fn captures(&self) -> usize {
            self.capture_count.load(Ordering::SeqCst)
        }

        fn attempts(&self) -> usize {
            self.attempt_count.load(Ordering::SeqCst)
        }

        fn access_requests(&self) -> usize {
            self.access_requests.load(Ordering::SeqCst)
        }
    }

    impl ScreenCapturer for MockScreenCapturer {
        fn list_surfaces(&self) -> Result<Vec<DisplaySurface>, ProbeError> {
            Ok(self.surfaces.lock().unwrap().clone())
        }

        fn capture_surface(&self, surface: &DisplaySurface) -> Result<PixelBuffer, ProbeError> {
            self.attempt_count.fetch_add(1, Ordering::SeqCst);
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(ProbeError::CaptureUnavailable("permission denied".to_string()));
            }
            self.capture_count.fetch_add(1, Ordering::SeqCst);

            // Every pixel encodes its surface id and local coordinate.
            let mut raw = Vec::with_capacity((surface.width * surface.height * 3) as usize);
            for y in 0..surface.height {
                for x in 0..surface.width {
                    raw.extend_from_slice(&[surface.id as u8, x as u8, y as u8]);
                }
            }
            PixelBuffer::build_from_rgb(1.0, surface.width, surface.height, raw)
        }

        fn request_access(&self) {
            self.access_requests.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct MockInputHook {
        active: AtomicUsize,
        next_id: AtomicU64,
        should_fail: AtomicBool,
    }

    impl MockInputHook {
        fn build() -> Arc<Self> {
            Arc::new(Self {
                active: AtomicUsize::new(0),
                next_id: AtomicU64::new(1),
                should_fail: AtomicBool::new(false),
            })
        }
    }

    impl GlobalInputHook for MockInputHook {
        fn subscribe(&self) -> Result<HookSubscription, ProbeError> {
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(ProbeError::HookUnavailable("not permitted".to_string()));
            }
            self.active.fetch_add(1, Ordering::SeqCst);
            Ok(HookSubscription::from_id(
                self.next_id.fetch_add(1, Ordering::SeqCst),
            ))
        }

        fn unsubscribe(&self, _subscription: HookSubscription) {
            self.active.fetch_sub(1, Ordering::SeqCst);
        }

        fn active_subscriptions(&self) -> usize {
            self.active.load(Ordering::SeqCst)
        }
    }

    fn mark_stale(controller: &mut SelectionController) {
        if let SelectionState::Selecting(session) = &mut controller.state {
            session.is_stale = true;
        }
    }

    fn two_small_surfaces() -> Vec<DisplaySurface> {
        vec![
            DisplaySurface::build(1, "left", 0, 0, 40, 30),
            DisplaySurface::build(2, "right", 40, 0, 40, 30),
        ]
    }

    fn create_test_controller() -> (SelectionController, Arc<MockScreenCapturer>, Arc<MockInputHook>) {
        let capturer = MockScreenCapturer::with_surfaces(two_small_surfaces());
        let hook = MockInputHook::build();
        let controller = SelectionController::build(
            capturer.clone(),
            hook.clone(),
            ZoomConfig::default(),
            ViewportStyle::default(),
        );
        (controller, capturer, hook)
    }

    #[test]
    fn test_build_starts_idle_with_activation_enabled() {
        let (controller, capturer, hook) = create_test_controller();

        assert!(!controller.is_selecting());
        assert!(controller.is_activation_enabled());
        assert_eq!(controller.sampled_color(), None);
        assert_eq!(capturer.captures(), 0);
        assert_eq!(hook.active_subscriptions(), 0);
    }

    #[test]
    fn test_activate_captures_and_subscribes() {
        let (mut controller, capturer, hook) = create_test_controller();

        let outcome = controller.activate(ScreenPoint::at_coordinates(5, 6)).unwrap();

        let ActivationOutcome::Started(update) = outcome else {
            panic!("expected a started session");
        };
        assert_eq!(update.color(), PixelColor::from_rgb(1, 5, 6));
        assert!(controller.is_selecting());
        assert!(!controller.is_activation_enabled());
        assert_eq!(capturer.captures(), 1);
        assert_eq!(hook.active_subscriptions(), 1);
    }

    #[test]
    fn test_activate_while_selecting_is_a_no_op() {
        let (mut controller, capturer, hook) = create_test_controller();
        controller.activate(ScreenPoint::at_coordinates(5, 6)).unwrap();

        let outcome = controller.activate(ScreenPoint::at_coordinates(50, 6)).unwrap();

        assert_eq!(outcome, ActivationOutcome::AlreadySelecting);
        assert_eq!(capturer.captures(), 1);
        assert_eq!(hook.active_subscriptions(), 1);
        assert_eq!(controller.sampled_color(), Some(PixelColor::from_rgb(1, 5, 6)));
    }

    #[test]
    fn test_capture_failure_stays_idle_without_subscriptions() {
        let (mut controller, capturer, hook) = create_test_controller();
        capturer.should_fail.store(true, Ordering::SeqCst);

        let result = controller.activate(ScreenPoint::at_coordinates(5, 6));

        assert!(matches!(result, Err(ProbeError::CaptureUnavailable(_))));
        assert!(!controller.is_selecting());
        assert!(controller.is_activation_enabled());
        assert_eq!(hook.active_subscriptions(), 0);
        assert_eq!(capturer.access_requests(), 1);
    }

    #[test]
    fn test_activate_without_surfaces_is_capture_unavailable() {
        let capturer = MockScreenCapturer::with_surfaces(vec![]);
        let hook = MockInputHook::build();
        let mut controller = SelectionController::build(
            capturer,
            hook.clone(),
            ZoomConfig::default(),
            ViewportStyle::default(),
        );

        let result = controller.activate(ScreenPoint::default_origin());

        assert!(matches!(result, Err(ProbeError::CaptureUnavailable(_))));
        assert_eq!(hook.active_subscriptions(), 0);
    }

    #[test]
    fn test_hook_failure_stays_idle() {
        let (mut controller, _capturer, hook) = create_test_controller();
        hook.should_fail.store(true, Ordering::SeqCst);

        let result = controller.activate(ScreenPoint::at_coordinates(5, 6));

        assert!(matches!(result, Err(ProbeError::HookUnavailable(_))));
        assert!(!controller.is_selecting());
    }

    #[test]
    fn test_pointer_move_on_same_surface_does_not_recapture() {
        let (mut controller, capturer, _hook) = create_test_controller();
        controller.activate(ScreenPoint::at_coordinates(5, 6)).unwrap();

        let update = controller
            .handle_pointer_moved(ScreenPoint::at_coordinates(20, 10))
            .unwrap();

        assert_eq!(update.color(), PixelColor::from_rgb(1, 20, 10));
        assert_eq!(capturer.captures(), 1);
    }

    #[test]
    fn test_pointer_move_across_surfaces_recaptures_target_surface() {
        let (mut controller, capturer, _hook) = create_test_controller();
        controller.activate(ScreenPoint::at_coordinates(5, 6)).unwrap();

        let update = controller
            .handle_pointer_moved(ScreenPoint::at_coordinates(45, 7))
            .unwrap();

        assert_eq!(update.cursor.surface.id, 2);
        assert_eq!((update.cursor.local_x, update.cursor.local_y), (5, 7));
        assert_eq!(update.color(), PixelColor::from_rgb(2, 5, 7));
        assert_eq!(capturer.captures(), 2);
    }

    #[test]
    fn test_failed_recapture_keeps_probe_on_previous_surface() {
        let (controller, capturer, _hook) = create_test_controller();
        let mut controller = controller.with_recapture_backoff(Duration::ZERO);
        controller.activate(ScreenPoint::at_coordinates(5, 6)).unwrap();
        capturer.should_fail.store(true, Ordering::SeqCst);

        let update = controller
            .handle_pointer_moved(ScreenPoint::at_coordinates(45, 7))
            .unwrap();

        assert_eq!(update.cursor.surface.id, 1);
        assert_eq!((update.cursor.local_x, update.cursor.local_y), (39, 7));
        assert_eq!(update.color(), PixelColor::from_rgb(1, 39, 7));

        capturer.should_fail.store(false, Ordering::SeqCst);
        let retried = controller
            .handle_pointer_moved(ScreenPoint::at_coordinates(45, 7))
            .unwrap();
        assert_eq!(retried.color(), PixelColor::from_rgb(2, 5, 7));
    }

    #[test]
    fn test_failed_recapture_is_not_retried_on_every_move() {
        let (controller, capturer, _hook) = create_test_controller();
        let mut controller = controller.with_recapture_backoff(Duration::from_secs(60));
        controller.activate(ScreenPoint::at_coordinates(5, 6)).unwrap();
        capturer.should_fail.store(true, Ordering::SeqCst);

        for x in 41..61 {
            let update = controller
                .handle_pointer_moved(ScreenPoint::at_coordinates(x, 7))
                .unwrap();
            assert_eq!(update.cursor.surface.id, 1);
        }

        assert_eq!(capturer.attempts(), 2);
        assert_eq!(capturer.access_requests(), 0);
        assert!(controller.is_selecting());
    }

    #[test]
    fn test_nudge_moves_one_pixel_and_marks_stale() {
        let (mut controller, capturer, _hook) = create_test_controller();
        controller.activate(ScreenPoint::at_coordinates(5, 6)).unwrap();

        let update = controller.handle_nudge(NudgeDirection::Right).unwrap();
        assert_eq!(update.color(), PixelColor::from_rgb(1, 6, 6));
        assert_eq!(capturer.captures(), 1);

        controller
            .handle_pointer_moved(ScreenPoint::at_coordinates(6, 6))
            .unwrap();
        assert_eq!(capturer.captures(), 2);
    }

    #[test]
    fn test_nudge_stops_at_surface_edge() {
        let (mut controller, _capturer, _hook) = create_test_controller();
        controller.activate(ScreenPoint::at_coordinates(0, 0)).unwrap();

        let left = controller.handle_nudge(NudgeDirection::Left).unwrap();
        let up = controller.handle_nudge(NudgeDirection::Up).unwrap();

        assert_eq!((left.cursor.local_x, left.cursor.local_y), (0, 0));
        assert_eq!((up.cursor.local_x, up.cursor.local_y), (0, 0));
        assert_eq!(up.cursor.surface.id, 1);
    }

    #[test]
    fn test_stale_session_falls_back_when_surface_disappears() {
        let (mut controller, capturer, _hook) = create_test_controller();
        controller.activate(ScreenPoint::at_coordinates(45, 5)).unwrap();

        *capturer.surfaces.lock().unwrap() = vec![DisplaySurface::build(1, "left", 0, 0, 40, 30)];
        mark_stale(&mut controller);

        let update = controller
            .handle_pointer_moved(ScreenPoint::at_coordinates(45, 5))
            .unwrap();

        assert_eq!(update.cursor.surface.id, 1);
        assert_eq!((update.cursor.local_x, update.cursor.local_y), (39, 5));
        assert_eq!(update.color(), PixelColor::from_rgb(1, 39, 5));
    }

    #[test]
    fn test_monitor_attached_mid_session_is_discovered() {
        let capturer =
            MockScreenCapturer::with_surfaces(vec![DisplaySurface::build(1, "left", 0, 0, 40, 30)]);
        let hook = MockInputHook::build();
        let mut controller = SelectionController::build(
            capturer.clone(),
            hook,
            ZoomConfig::default(),
            ViewportStyle::default(),
        );
        controller.activate(ScreenPoint::at_coordinates(5, 5)).unwrap();

        *capturer.surfaces.lock().unwrap() = two_small_surfaces();
        let update = controller
            .handle_pointer_moved(ScreenPoint::at_coordinates(45, 5))
            .unwrap();

        assert_eq!(update.cursor.surface.id, 2);
        assert_eq!(update.color(), PixelColor::from_rgb(2, 5, 5));
    }

    #[test]
    fn test_click_terminates_with_last_sampled_color() {
        let (mut controller, _capturer, hook) = create_test_controller();
        controller.activate(ScreenPoint::at_coordinates(5, 6)).unwrap();
        controller.handle_input(GlobalInputEvent::PointerMoved { x: 12, y: 13 });

        let step = controller.handle_input(GlobalInputEvent::PointerClicked);

        assert_eq!(
            step,
            SelectionStep::Finished(SessionOutcome {
                color: PixelColor::from_rgb(1, 12, 13),
                reason: TerminationReason::Click,
            })
        );
        assert!(!controller.is_selecting());
        assert!(controller.is_activation_enabled());
        assert_eq!(hook.active_subscriptions(), 0);
    }

    #[test]
    fn test_every_termination_releases_subscription() {
        for (event, reason) in [
            (GlobalInputEvent::PointerClicked, TerminationReason::Click),
            (GlobalInputEvent::Confirm, TerminationReason::Confirm),
            (GlobalInputEvent::Cancel, TerminationReason::Cancel),
        ] {
            let (mut controller, _capturer, hook) = create_test_controller();
            controller.activate(ScreenPoint::at_coordinates(1, 1)).unwrap();

            let step = controller.handle_input(event);

            assert!(matches!(step, SelectionStep::Finished(outcome) if outcome.reason == reason));
            assert_eq!(hook.active_subscriptions(), 0);
        }
    }

    #[test]
    fn test_input_while_idle_is_ignored() {
        let (mut controller, capturer, hook) = create_test_controller();

        for event in [
            GlobalInputEvent::PointerMoved { x: 3, y: 3 },
            GlobalInputEvent::Nudge(NudgeDirection::Down),
            GlobalInputEvent::PointerClicked,
            GlobalInputEvent::Confirm,
            GlobalInputEvent::Cancel,
        ] {
            assert_eq!(controller.handle_input(event), SelectionStep::Ignored);
        }
        assert_eq!(capturer.captures(), 0);
        assert_eq!(hook.active_subscriptions(), 0);
    }

    #[test]
    fn test_full_cycle_can_repeat() {
        let (mut controller, _capturer, hook) = create_test_controller();

        for _ in 0..3 {
            assert!(matches!(
                controller.activate(ScreenPoint::at_coordinates(2, 2)),
                Ok(ActivationOutcome::Started(_))
            ));
            assert!(controller.terminate(TerminationReason::Confirm).is_some());
            assert_eq!(hook.active_subscriptions(), 0);
        }
        assert!(controller.terminate(TerminationReason::Confirm).is_none());
    }

    #[test]
    fn test_crosshair_cell_agrees_with_session_color() {
        let (mut controller, _capturer, _hook) = create_test_controller();
        controller.activate(ScreenPoint::at_coordinates(5, 6)).unwrap();

        let update = controller
            .handle_pointer_moved(ScreenPoint::at_coordinates(70, 20))
            .unwrap();
        let square = update.frame.crosshair_square;

        assert_eq!(
            update.frame.cell_at(square.x, square.y),
            controller.sampled_color()
        );
        assert_eq!(controller.sampled_color(), Some(PixelColor::from_rgb(2, 30, 20)));
    }
}
