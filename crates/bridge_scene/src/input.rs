//! Polled input state held by the reference engine.

use std::collections::HashSet;

use bridge_script::{KeyCode, MouseButton};

/// Keyboard and mouse state, updated by the platform layer and read by
/// scripts through the boundary.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
    mouse: (f32, f32),
}

impl InputState {
    pub fn press_key(&mut self, key: KeyCode) {
        self.keys.insert(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    #[must_use]
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons.remove(&button);
    }

    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse = (x, y);
    }

    #[must_use]
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse
    }

    /// Release every key and button.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }
}
