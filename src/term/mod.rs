// Terminal geometry and scoped screen state.

use std::io::{self, Write};

use terminal_size::{Height, Width, terminal_size};

use crate::ansi::cursor::{ORIGIN, SHOW};
use crate::ansi::style::RESET_ALL;

/// Switch to the terminal's alternate screen buffer (smcup).
const ENTER_ALT_SCREEN: &str = crate::csi!("?1049h");
/// Return to the main screen buffer (rmcup).
const EXIT_ALT_SCREEN: &str = crate::csi!("?1049l");

/// Numbers of rows and columns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: usize,
    pub cols: usize,
}

/// 1-based row and column position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

/// Current terminal size; zero rows and columns when stdout is not a tty.
pub fn size() -> Size {
    match terminal_size() {
        Some((Width(cols), Height(rows))) => Size {
            rows: rows as usize,
            cols: cols as usize,
        },
        None => Size::default(),
    }
}

/// Soft-reset the terminal to its default modes.
pub fn reset() {
    let _ = reset_to(&mut io::stdout());
}

/// Write the soft-reset sequence to `out` and flush it.
pub fn reset_to<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(RESET_ALL.as_bytes())?;
    out.flush()
}

/// Scoped alternate-screen session: enters the alternate buffer on
/// construction and restores the main buffer (plus cursor visibility) on
/// drop, so every exit path cleans up.
pub struct AltScreenGuard;

impl AltScreenGuard {
    pub fn enter() -> Self {
        print!("{ENTER_ALT_SCREEN}{ORIGIN}");
        let _ = io::stdout().flush();
        Self
    }
}

impl Drop for AltScreenGuard {
    fn drop(&mut self) {
        print!("{SHOW}{EXIT_ALT_SCREEN}");
        let _ = io::stdout().flush();
    }
}
