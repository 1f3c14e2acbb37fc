use crate::core::errors::ProbeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NudgeDirection {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            NudgeDirection::Up => (0, -1),
            NudgeDirection::Down => (0, 1),
            NudgeDirection::Left => (-1, 0),
            NudgeDirection::Right => (1, 0),
        }
    }
}

/// Desktop-wide input, delivered regardless of which window has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalInputEvent {
    PointerMoved { x: i32, y: i32 },
    PointerClicked,
    Nudge(NudgeDirection),
    Confirm,
    Cancel,
}

/// Token for one active subscription; hand it back to unsubscribe.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct HookSubscription {
    id: u64,
}

impl HookSubscription {
    pub fn from_id(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// While at least one subscription is active the hook forwards events into the UI queue
/// and swallows pointer clicks and probe keys so they never reach other windows.
pub trait GlobalInputHook: Send + Sync {
    fn subscribe(&self) -> Result<HookSubscription, ProbeError>;

    fn unsubscribe(&self, subscription: HookSubscription);

    fn active_subscriptions(&self) -> usize;
}
