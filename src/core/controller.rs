/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Quit
    Escape,
    /// Reset the view
    KeyR,
    /// Orbit while held
    MouseLeft,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Pointer movement since the last reset, in physical pixels
    fn drag_delta(&self) -> (f32, f32);

    /// Wheel movement since the last reset; positive scrolls down
    fn wheel_delta(&self) -> f32;
}
