// Cursor control sequences and the DSR position query.

use std::io::{Read, Write};

use crate::ansi::ascii::{ESC, ESC_BYTE};
use crate::errors::{Error, Result};
use crate::term::Pos;

/// Show the cursor.
pub const SHOW: &str = crate::csi!("?25h");
/// Hide the cursor.
pub const HIDE: &str = crate::csi!("?25l");
/// Move the cursor to the top-left corner.
pub const ORIGIN: &str = crate::csi!("H");
/// Save the cursor position.
pub const SAVE: &str = crate::csi!("s");
/// Restore a saved cursor position.
pub const RESTORE: &str = crate::csi!("u");
/// Request a blinking block cursor (if the terminal supports it).
pub const BLINKING_BLOCK: &str = crate::csi!("1 q");
/// Device status report request; the terminal replies `ESC [ row ; col R`.
pub const POSITION_QUERY: &str = crate::csi!("6n");

/// Move the cursor to 1-based row and column.
pub fn move_to(row: usize, col: usize) -> String {
    format!("{ESC}[{row};{col}H")
}

/// Move the cursor up.
pub fn up(offset: usize) -> String {
    format!("{ESC}[{offset}A")
}

/// Move the cursor down.
pub fn down(offset: usize) -> String {
    format!("{ESC}[{offset}B")
}

/// Move the cursor right.
pub fn right(offset: usize) -> String {
    format!("{ESC}[{offset}C")
}

/// Move the cursor left.
pub fn left(offset: usize) -> String {
    format!("{ESC}[{offset}D")
}

/// Move the cursor to a 1-based column on the current line.
pub fn to_col(col: usize) -> String {
    format!("{ESC}[{col}G")
}

/// Query the cursor position: emit the DSR request on `out` and parse the
/// `ESC [ row ; col R` reply from `input`. The terminal must be in raw mode
/// or the reply never reaches `input`.
pub fn position<W: Write, R: Read>(out: &mut W, input: &mut R) -> Result<Pos> {
    out.write_all(POSITION_QUERY.as_bytes())?;
    out.flush()?;

    let mut report = Vec::with_capacity(16);
    let mut byte = [0u8; 1];
    loop {
        if input.read(&mut byte)? == 0 {
            return Err(Error::parse("cursor report ended before final 'R'"));
        }
        report.push(byte[0]);
        if byte[0] == b'R' {
            break;
        }
        // A well-formed report is at most ESC [ nnnn ; nnnn R.
        if report.len() > 16 {
            return Err(Error::parse("cursor report too long"));
        }
    }
    parse_report(&report)
}

/// Parse a `ESC [ row ; col R` cursor report.
pub fn parse_report(bytes: &[u8]) -> Result<Pos> {
    let inner = bytes
        .strip_prefix(&[ESC_BYTE, b'['])
        .and_then(|rest| rest.strip_suffix(b"R"))
        .ok_or_else(|| Error::parse("cursor report missing CSI framing"))?;
    let text = std::str::from_utf8(inner)
        .map_err(|_| Error::parse("cursor report is not valid ASCII"))?;
    let (row, col) = text
        .split_once(';')
        .ok_or_else(|| Error::parse("cursor report missing ';' separator"))?;
    let row = row
        .parse()
        .map_err(|_| Error::parse(format!("bad row in cursor report: {row:?}")))?;
    let col = col
        .parse()
        .map_err(|_| Error::parse(format!("bad column in cursor report: {col:?}")))?;
    Ok(Pos { row, col })
}
