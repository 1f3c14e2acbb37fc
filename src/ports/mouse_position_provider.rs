use crate::core::interfaces::ports::MousePositionProvider;
use crate::core::models::ScreenPoint;
use crate::global_constants::{LOG_TAG_MOUSE, MESSAGE_MOUSE_POSITION_FAILED};
use mouse_position::mouse_position::Mouse;

pub struct SystemMousePositionProvider;

impl SystemMousePositionProvider {
    pub fn initialize() -> Self {
        log::debug!("{} initializing mouse position provider", LOG_TAG_MOUSE);
        Self
    }

    fn query_system_mouse_position(&self) -> Mouse {
        Mouse::get_mouse_position()
    }

    fn convert_mouse_result_to_point(&self, mouse_result: Mouse) -> Result<ScreenPoint, String> {
        match mouse_result {
            Mouse::Position { x, y } => {
                log::debug!("{} current position: ({}, {})", LOG_TAG_MOUSE, x, y);
                Ok(ScreenPoint::at_coordinates(x, y))
            }
            Mouse::Error => {
                log::warn!("{} {}", LOG_TAG_MOUSE, MESSAGE_MOUSE_POSITION_FAILED);
                Err(MESSAGE_MOUSE_POSITION_FAILED.to_string())
            }
        }
    }
}

impl MousePositionProvider for SystemMousePositionProvider {
    fn get_current_mouse_position(&self) -> Result<ScreenPoint, String> {
        let mouse_position_result = self.query_system_mouse_position();
        self.convert_mouse_result_to_point(mouse_position_result)
    }
}
