// Raw-mode acquisition and non-blocking key polling. Saved terminal state
// lives in an owned guard, not process-wide statics: enter saves the mode,
// drop restores it.

#[cfg(test)]
mod tests;

use crate::errors::{Error, Result};
use crate::key::KeyEvent;
use crate::key::grammar::{InputGrammar, default_grammar, grammar_by_name};

#[cfg(unix)]
mod unix {
    use std::io;

    use crate::errors::{Error, Result};

    /// Scoped raw-mode session: saves the current termios on enter, disables
    /// canonical mode, echo, and signal generation, and restores the saved
    /// state on drop.
    pub struct RawModeGuard {
        saved: libc::termios,
    }

    impl RawModeGuard {
        pub fn enter() -> Result<Self> {
            let fd = libc::STDIN_FILENO;
            // SAFETY: isatty/tcgetattr/tcsetattr only read or write the
            // termios struct we hand them, on a file descriptor we own.
            if unsafe { libc::isatty(fd) } == 0 {
                return Err(Error::Unsupported("stdin is not a tty"));
            }
            let mut saved: libc::termios = unsafe { std::mem::zeroed() };
            if unsafe { libc::tcgetattr(fd, &mut saved) } != 0 {
                return Err(Error::Io(io::Error::last_os_error()));
            }

            let mut raw = saved;
            raw.c_lflag &= !(libc::ICANON | libc::ECHO | libc::ISIG | libc::IEXTEN);
            raw.c_iflag &= !(libc::ICRNL | libc::IXON);
            raw.c_cc[libc::VMIN] = 1;
            raw.c_cc[libc::VTIME] = 0;
            if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &raw) } != 0 {
                return Err(Error::Io(io::Error::last_os_error()));
            }
            Ok(Self { saved })
        }
    }

    impl Drop for RawModeGuard {
        fn drop(&mut self) {
            // SAFETY: restores the termios captured in enter().
            unsafe {
                libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &self.saved);
            }
        }
    }

    /// Number of input bytes already waiting on stdin (FIONREAD). This is
    /// the polling read: it never blocks.
    pub fn pending_bytes() -> Result<usize> {
        let mut count: libc::c_int = 0;
        // SAFETY: FIONREAD writes one c_int through the provided pointer.
        if unsafe { libc::ioctl(libc::STDIN_FILENO, libc::FIONREAD, &mut count) } != 0 {
            return Err(Error::Io(io::Error::last_os_error()));
        }
        Ok(count.max(0) as usize)
    }
}

#[cfg(unix)]
pub use unix::{RawModeGuard, pending_bytes};

#[cfg(not(unix))]
mod stub {
    use crate::errors::{Error, Result};

    /// Placeholder on targets without termios; construction always fails.
    pub struct RawModeGuard;

    impl RawModeGuard {
        pub fn enter() -> Result<Self> {
            Err(Error::Unsupported("raw input requires a Unix terminal"))
        }
    }

    pub fn pending_bytes() -> Result<usize> {
        Err(Error::Unsupported("raw input requires a Unix terminal"))
    }
}

#[cfg(not(unix))]
pub use stub::{RawModeGuard, pending_bytes};

/// True when at least one input byte is waiting on stdin.
pub fn is_key_pressed() -> Result<bool> {
    Ok(pending_bytes()? > 0)
}

/// Decodes one poll's worth of raw bytes against an input grammar.
pub struct KeyReader {
    grammar: Box<dyn InputGrammar + Send + Sync>,
}

impl std::fmt::Debug for KeyReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyReader").finish_non_exhaustive()
    }
}

impl KeyReader {
    pub fn new(grammar: Box<dyn InputGrammar + Send + Sync>) -> Self {
        Self { grammar }
    }

    /// Reader for the build target's native grammar.
    pub fn platform_default() -> Self {
        Self::new(default_grammar())
    }

    /// Reader for a named grammar ("ansi" or "console").
    pub fn with_grammar_name(name: &str) -> Result<Self> {
        grammar_by_name(name)
            .map(Self::new)
            .ok_or_else(|| Error::config(format!("unknown input grammar: {name}")))
    }

    pub fn grammar_name(&self) -> &'static str {
        self.grammar.name()
    }

    /// Decode an already-captured byte sequence into an event. The event
    /// carries the raw value of the last byte alongside the symbolic code.
    pub fn decode_event(&self, bytes: &[u8]) -> KeyEvent {
        let code = self.grammar.decode(bytes);
        let value = bytes.last().copied().unwrap_or(0);
        KeyEvent::new(code, value)
    }

    /// Non-blocking poll of stdin: drains exactly the bytes already waiting
    /// and decodes them. Returns a `KeyCode::None` event when no input is
    /// pending. Requires raw mode to see bytes before a newline.
    #[cfg(unix)]
    pub fn poll(&self) -> Result<KeyEvent> {
        use std::io::Read;

        let waiting = pending_bytes()?;
        if waiting == 0 {
            return Ok(KeyEvent::none());
        }
        let mut buf = vec![0u8; waiting];
        std::io::stdin().read_exact(&mut buf)?;
        Ok(self.decode_event(&buf))
    }

    #[cfg(not(unix))]
    pub fn poll(&self) -> Result<KeyEvent> {
        Err(Error::Unsupported("raw input requires a Unix terminal"))
    }
}
