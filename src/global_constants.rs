#![allow(dead_code)]

pub const APPLICATION_TITLE: &str = "Pixel Probe";

pub const HOTKEY_ACTIVATE: &str = "Z";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_HOOK: &str = "[HOOK]";
pub const LOG_TAG_SELECTION: &str = "[SELECTION]";
pub const LOG_TAG_MAPPER: &str = "[MAPPER]";
pub const LOG_TAG_VIEWPORT: &str = "[VIEWPORT]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_CLIPBOARD: &str = "[CLIPBOARD]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_PALETTE: &str = "[PALETTE]";
pub const LOG_TAG_PERMISSIONS: &str = "[PERMISSIONS]";
pub const LOG_TAG_MOUSE: &str = "[MOUSE]";

pub const MESSAGE_STARTING_APP: &str = "starting pixel-probe";
pub const MESSAGE_SELECTION_STARTED: &str = "selection started";
pub const MESSAGE_SELECTION_ALREADY_ACTIVE: &str = "activation ignored, selection already active";
pub const MESSAGE_SELECTION_ENDED: &str = "selection ended";
pub const MESSAGE_SURFACE_CHANGED: &str = "cursor crossed into another surface, recapturing";
pub const MESSAGE_STALE_RECAPTURE: &str = "capture is stale, recapturing";
pub const MESSAGE_MOUSE_POSITION_FAILED: &str = "failed to get mouse position";
pub const MESSAGE_HOOK_GRAB_FAILED: &str =
    "failed to grab global input, falling back to passive listening (clicks will not be consumed)";
pub const MESSAGE_HOOK_LISTEN_FAILED: &str = "failed to start global input listener";
pub const MESSAGE_HOOK_UNAVAILABLE: &str =
    "global input hook is not running, grant accessibility access and restart";

pub const USER_MESSAGE_READY: &str = "Press \"get a color\" or Z to start probing";
pub const USER_MESSAGE_SELECTING: &str =
    "Move anywhere and click to pick. W/A/S/D nudge, Space confirms, Escape ends";
pub const USER_MESSAGE_PICKED: &str = "Color added to palette";

pub const ERROR_CONTEXT_LIST_MONITORS: &str = "Unable to list monitors";
pub const ERROR_CONTEXT_MONITOR_GEOMETRY: &str = "Unable to read monitor geometry";
pub const ERROR_CONTEXT_SCALE_FACTOR: &str = "Unable to get scale factor";
pub const ERROR_CONTEXT_CAPTURE_MONITOR: &str = "Unable to capture monitor";
pub const ERROR_CONTEXT_OPEN_CLIPBOARD: &str = "Unable to open clipboard";
pub const ERROR_CONTEXT_WRITE_CLIPBOARD: &str = "Unable to write clipboard";

pub const DEFAULT_ZOOM_FACTOR: u32 = 10;
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 200;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 200;
pub const DEFAULT_COPY_LABEL_RESET_MILLIS: u64 = 2000;
pub const DEFAULT_PALETTE_COLUMNS: usize = 7;
pub const DEFAULT_RECAPTURE_BACKOFF_MILLIS: u64 = 1000;

pub const MAX_VIEWPORT_DIMENSION: u32 = 2048;
pub const MAX_MAGNIFIED_CELLS: u64 = 100_000;

pub const SENTINEL_RGB: (u8, u8, u8) = (0, 0, 0);

pub const CROSSHAIR_RGBA: (u8, u8, u8, u8) = (0, 0, 0, 255);
pub const GRID_RGBA: (u8, u8, u8, u8) = (255, 255, 255, 50);
pub const BORDER_RGBA: (u8, u8, u8, u8) = (227, 227, 227, 255);

pub const COPY_LABEL_IDLE: &str = "copy";
pub const COPY_LABEL_DONE: &str = "copied!";

pub const PALETTE_SWATCH_SIZE: f32 = 16.0;
pub const PALETTE_SWATCH_SPACING: f32 = 5.0;

pub const SETTINGS_DIRECTORY_NAME: &str = "pixel-probe";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
