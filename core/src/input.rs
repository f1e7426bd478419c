//! Platform-agnostic input snapshot types.
//!
//! Camera controllers poll input through the [`InputSnapshot`] trait
//! instead of a windowing library, so they can be driven headless in tests.
//! Platform layers (winit, glfw, ...) map their native codes onto
//! [`KeyCode`] and [`MouseButton`] and implement the trait over their own
//! per-frame state.

/// Physical keyboard key identifier.
///
/// Matches common physical key positions (US QWERTY layout names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeyCode {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Digits
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    // Arrows
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Common keys
    Space,
    Enter,
    Escape,
    Tab,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A point-in-time view of input state.
///
/// Deliberately minimal: held keys, held buttons, and the cursor position.
/// Controllers derive per-frame deltas themselves, so implementors only
/// report current state.
pub trait InputSnapshot {
    /// Whether the given key is currently held.
    fn key_down(&self, key: KeyCode) -> bool;

    /// Whether the given mouse button is currently held.
    fn button_down(&self, button: MouseButton) -> bool;

    /// Cursor position in window pixel coordinates.
    fn cursor_position(&self) -> (f64, f64);
}
