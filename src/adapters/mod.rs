mod arboard_clipboard;
pub mod macos_permissions;

pub use arboard_clipboard::ArboardClipboard;
