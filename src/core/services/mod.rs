pub mod coordinate_mapper;
pub mod copy_label_resets;
pub mod selection_controller;
pub mod viewport_renderer;

pub use coordinate_mapper::CoordinateMapper;
pub use copy_label_resets::{CopyLabelResets, CopyTarget};
pub use selection_controller::{
    ActivationOutcome, ProbeUpdate, SelectionController, SelectionStep, SessionOutcome,
    TerminationReason,
};
pub use viewport_renderer::{
    DrawCommand, OverlayColor, PixelRect, StrokeStyle, ViewportFrame, ViewportRenderer,
    ViewportStyle,
};
