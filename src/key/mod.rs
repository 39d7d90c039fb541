pub mod grammar;

use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Logical key identity. Closed set: `None` means no input was available,
/// `Unknown` means input arrived but matched no recognized sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterDerive, EnumString, Display, AsRefStr,
)]
pub enum KeyCode {
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
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Slash,
    Point,
    Add,
    Subtract,
    Enter,
    Escape,
    Tab,
    Space,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    None,
    Unknown,
}

/// A decoded key paired with the raw value of the last byte of its sequence.
/// Callers that predate the symbolic codes still read `value` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub value: u8,
}

impl KeyEvent {
    pub fn new(code: KeyCode, value: u8) -> Self {
        Self { code, value }
    }

    /// Event for an empty poll.
    pub fn none() -> Self {
        Self {
            code: KeyCode::None,
            value: 0,
        }
    }

    /// The raw value as a character, when it is printable ASCII.
    pub fn to_char(&self) -> Option<char> {
        (32..127).contains(&self.value).then(|| self.value as char)
    }
}

impl Default for KeyEvent {
    fn default() -> Self {
        Self::none()
    }
}
