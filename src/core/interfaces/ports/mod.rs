mod global_input_hook;
mod mouse_position_provider;
mod screen_capturer;

pub use global_input_hook::{GlobalInputEvent, GlobalInputHook, HookSubscription, NudgeDirection};
pub use mouse_position_provider::MousePositionProvider;
pub use screen_capturer::ScreenCapturer;
