// SGR color sequences. The classic 16-color set as constants (bright
// variants), 256-color and truecolor as builders.

use crate::ansi::ascii::ESC;

/// Reset colors and attributes.
pub const RESET: &str = crate::csi!("0m");

/// Black background.
pub const BG_BLACK: &str = crate::csi!("40;1m");
/// Red background.
pub const BG_RED: &str = crate::csi!("41;1m");
/// Green background.
pub const BG_GREEN: &str = crate::csi!("42;1m");
/// Yellow background.
pub const BG_YELLOW: &str = crate::csi!("43;1m");
/// Blue background.
pub const BG_BLUE: &str = crate::csi!("44;1m");
/// Magenta background.
pub const BG_MAGENTA: &str = crate::csi!("45;1m");
/// Cyan background.
pub const BG_CYAN: &str = crate::csi!("46;1m");
/// White background.
pub const BG_WHITE: &str = crate::csi!("47;1m");

/// Black foreground.
pub const FG_BLACK: &str = crate::csi!("30;1m");
/// Red foreground.
pub const FG_RED: &str = crate::csi!("31;1m");
/// Green foreground.
pub const FG_GREEN: &str = crate::csi!("32;1m");
/// Yellow foreground.
pub const FG_YELLOW: &str = crate::csi!("33;1m");
/// Blue foreground.
pub const FG_BLUE: &str = crate::csi!("34;1m");
/// Magenta foreground.
pub const FG_MAGENTA: &str = crate::csi!("35;1m");
/// Cyan foreground.
pub const FG_CYAN: &str = crate::csi!("36;1m");
/// White foreground.
pub const FG_WHITE: &str = crate::csi!("37;1m");

/// Foreground from the 256-color palette.
pub fn fg(color: u8) -> String {
    format!("{ESC}[38;5;{color}m")
}

/// Background from the 256-color palette.
pub fn bg(color: u8) -> String {
    format!("{ESC}[48;5;{color}m")
}

/// Truecolor foreground.
pub fn fg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("{ESC}[38;2;{r};{g};{b}m")
}

/// Truecolor background.
pub fn bg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("{ESC}[48;2;{r};{g};{b}m")
}
