mod mouse_position_provider;
mod rdev_input_hook;
mod xcap_screen_capturer;

pub use mouse_position_provider::SystemMousePositionProvider;
pub use rdev_input_hook::RdevInputHook;
pub use xcap_screen_capturer::XcapScreenCapturer;
