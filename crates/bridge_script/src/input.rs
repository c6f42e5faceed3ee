//! Polled input queries.

use bridge_math::Vector2;

use crate::host::{EngineHost, KeyCode, MouseButton};

/// Input state as seen by scripts. Every query is a fresh boundary call.
#[derive(Clone, Copy)]
pub struct Input<'h> {
    host: &'h dyn EngineHost,
}

impl<'h> Input<'h> {
    #[must_use]
    pub fn new(host: &'h dyn EngineHost) -> Self {
        Self { host }
    }

    #[must_use]
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.host.input_is_key_down(key)
    }

    #[must_use]
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.host.input_is_mouse_button_pressed(button)
    }

    #[must_use]
    pub fn mouse_x(&self) -> f32 {
        self.host.input_get_mouse_x()
    }

    #[must_use]
    pub fn mouse_y(&self) -> f32 {
        self.host.input_get_mouse_y()
    }

    /// Cursor position; two boundary calls.
    #[must_use]
    pub fn mouse_position(&self) -> Vector2 {
        Vector2::new(self.mouse_x(), self.mouse_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHost;

    #[test]
    fn test_key_state_is_polled() {
        let host = RecordingHost::new();
        let input = Input::new(&host);
        assert!(!input.is_key_down(KeyCode::W));
        host.press(KeyCode::W);
        assert!(input.is_key_down(KeyCode::W));
    }

    #[test]
    fn test_mouse_queries() {
        let host = RecordingHost::new();
        let input = Input::new(&host);
        assert!(input.is_mouse_button_pressed(MouseButton::LEFT));
        assert!(!input.is_mouse_button_pressed(MouseButton::RIGHT));
        assert_eq!(input.mouse_position(), Vector2::new(12.0, 34.0));
    }
}
