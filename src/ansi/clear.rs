// Erase sequences (EL and ED).

/// Clear the entire line.
pub const LINE: &str = crate::csi!("2K");
/// Clear from the cursor to the end of the line.
pub const LINE_TO_RIGHT: &str = crate::csi!("0K");
/// Clear from the cursor to the start of the line.
pub const LINE_TO_LEFT: &str = crate::csi!("1K");
/// Clear from the cursor to the end of the screen.
pub const SCREEN: &str = crate::csi!("J");
/// Clear the whole screen.
pub const ALL_SCREEN: &str = crate::csi!("2J");
/// Clear from the cursor to the bottom of the screen.
pub const SCREEN_TO_BOTTOM: &str = crate::csi!("0J");
/// Clear from the cursor to the top of the screen.
pub const SCREEN_TO_TOP: &str = crate::csi!("1J");
