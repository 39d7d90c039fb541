// SGR text attributes, plus the soft terminal reset.

/// Soft terminal reset (DECSTR): restore modes to their defaults.
pub const RESET_ALL: &str = crate::csi!("!p");
/// Bright (bold) text.
pub const BRIGHT: &str = crate::csi!("1m");
/// Dim text.
pub const DIM: &str = crate::csi!("2m");
/// Underscored text.
pub const UNDERSCORE: &str = crate::csi!("4m");
/// Blinking text.
pub const BLINK: &str = crate::csi!("5m");
/// Reverse video.
pub const REVERSE: &str = crate::csi!("7m");
