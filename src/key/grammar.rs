// Byte grammars for the two platform input models. Decoding is a pure
// function of the byte sequence: dispatch on length, then match byte values
// against static tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::key::KeyCode;

/// One platform's byte framing for key input.
///
/// Both grammars are always compiled; selection happens at runtime (see
/// [`default_grammar`]) so callers are written once against this trait
/// instead of per-target `#[cfg]` branches.
pub trait InputGrammar {
    /// Decode the bytes of a single input poll into one key identity.
    ///
    /// Total function: an empty sequence yields [`KeyCode::None`], anything
    /// unrecognized yields [`KeyCode::Unknown`]. Never blocks, never fails.
    ///
    /// A poll that batched several keystrokes' bytes produces one
    /// concatenated sequence this fixed-length matcher cannot split; such
    /// input decodes to `Unknown`.
    fn decode(&self, bytes: &[u8]) -> KeyCode;

    /// Short grammar name, used by config overrides and logs.
    fn name(&self) -> &'static str;
}

const LETTERS: [KeyCode; 26] = [
    KeyCode::A,
    KeyCode::B,
    KeyCode::C,
    KeyCode::D,
    KeyCode::E,
    KeyCode::F,
    KeyCode::G,
    KeyCode::H,
    KeyCode::I,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::M,
    KeyCode::N,
    KeyCode::O,
    KeyCode::P,
    KeyCode::Q,
    KeyCode::R,
    KeyCode::S,
    KeyCode::T,
    KeyCode::U,
    KeyCode::V,
    KeyCode::W,
    KeyCode::X,
    KeyCode::Y,
    KeyCode::Z,
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Num0,
    KeyCode::Num1,
    KeyCode::Num2,
    KeyCode::Num3,
    KeyCode::Num4,
    KeyCode::Num5,
    KeyCode::Num6,
    KeyCode::Num7,
    KeyCode::Num8,
    KeyCode::Num9,
];

/// Single-byte mappings shared by both grammars. Letters fold upper and
/// lower case onto one key. Byte 58 maps to `Slash` alongside 47 — observed
/// behavior, kept as-is.
static SINGLE_BYTE: Lazy<HashMap<u8, KeyCode>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(9, KeyCode::Tab);
    table.insert(10, KeyCode::Enter);
    table.insert(27, KeyCode::Escape);
    table.insert(32, KeyCode::Space);
    table.insert(43, KeyCode::Add);
    table.insert(45, KeyCode::Subtract);
    table.insert(46, KeyCode::Point);
    table.insert(47, KeyCode::Slash);
    table.insert(58, KeyCode::Slash);
    for (offset, key) in DIGITS.iter().enumerate() {
        table.insert(48 + offset as u8, *key);
    }
    for (offset, key) in LETTERS.iter().enumerate() {
        table.insert(65 + offset as u8, *key);
        table.insert(97 + offset as u8, *key);
    }
    table
});

// CSI final bytes for cursor keys: ESC [ {A,B,C,D}.
const CSI_ARROWS: &[(u8, KeyCode)] = &[
    (65, KeyCode::Up),
    (66, KeyCode::Down),
    (67, KeyCode::Right),
    (68, KeyCode::Left),
];

// SS3 final bytes: ESC O {P,Q,R,S}.
const SS3_FN: &[(u8, KeyCode)] = &[
    (80, KeyCode::F1),
    (81, KeyCode::F2),
    (82, KeyCode::F3),
    (83, KeyCode::F4),
];

// Tilde sequences ESC [ 1 {x} ~ and ESC [ 2 {x} ~, keyed by the second digit.
const TILDE_FN_1: &[(u8, KeyCode)] = &[
    (53, KeyCode::F5),
    (55, KeyCode::F6),
    (56, KeyCode::F7),
    (57, KeyCode::F8),
];
const TILDE_FN_2: &[(u8, KeyCode)] = &[
    (48, KeyCode::F9),
    (49, KeyCode::F10),
    (51, KeyCode::F11),
    (52, KeyCode::F12),
];

// Extended codes behind the 0x00 sentinel.
const EXT_FN: &[(u8, KeyCode)] = &[
    (59, KeyCode::F1),
    (60, KeyCode::F2),
    (61, KeyCode::F3),
    (62, KeyCode::F4),
    (63, KeyCode::F5),
    (64, KeyCode::F6),
    (65, KeyCode::F7),
    (66, KeyCode::F8),
    (67, KeyCode::F9),
    (68, KeyCode::F10),
    (69, KeyCode::F11),
];

// Extended codes behind the 0xE0 sentinel.
const EXT_NAV: &[(u8, KeyCode)] = &[
    (72, KeyCode::Up),
    (80, KeyCode::Down),
    (77, KeyCode::Right),
    (75, KeyCode::Left),
    (134, KeyCode::F12),
];

fn lookup(table: &[(u8, KeyCode)], byte: u8) -> KeyCode {
    table
        .iter()
        .find(|(b, _)| *b == byte)
        .map(|(_, key)| *key)
        .unwrap_or(KeyCode::Unknown)
}

fn single_byte(byte: u8) -> KeyCode {
    SINGLE_BYTE.get(&byte).copied().unwrap_or(KeyCode::Unknown)
}

/// Escape-sequence input model: special keys arrive as full ANSI CSI/SS3
/// escape sequences (Unix terminals).
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiGrammar;

impl InputGrammar for AnsiGrammar {
    fn decode(&self, bytes: &[u8]) -> KeyCode {
        match bytes {
            [] => KeyCode::None,
            [127] => KeyCode::Backspace,
            [b] => single_byte(*b),
            [27, 91, b] => lookup(CSI_ARROWS, *b),
            [27, 79, b] => lookup(SS3_FN, *b),
            [27, 91, 49, b, 126] => lookup(TILDE_FN_1, *b),
            [27, 91, 50, b, 126] => lookup(TILDE_FN_2, *b),
            _ => KeyCode::Unknown,
        }
    }

    fn name(&self) -> &'static str {
        "ansi"
    }
}

/// Sentinel-prefixed input model: special keys arrive as a 0x00 or 0xE0
/// prefix byte followed by one extended code (Windows console).
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleGrammar;

impl InputGrammar for ConsoleGrammar {
    fn decode(&self, bytes: &[u8]) -> KeyCode {
        match bytes {
            [] => KeyCode::None,
            [8] => KeyCode::Backspace,
            [b] => single_byte(*b),
            [0, b] => lookup(EXT_FN, *b),
            [224, b] => lookup(EXT_NAV, *b),
            _ => KeyCode::Unknown,
        }
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

/// Grammar for the build target's native input model.
pub fn default_grammar() -> Box<dyn InputGrammar + Send + Sync> {
    if cfg!(windows) {
        Box::new(ConsoleGrammar)
    } else {
        Box::new(AnsiGrammar)
    }
}

/// Grammar by name ("ansi" or "console"), for config/CLI overrides.
pub fn grammar_by_name(name: &str) -> Option<Box<dyn InputGrammar + Send + Sync>> {
    match name {
        "ansi" => Some(Box::new(AnsiGrammar)),
        "console" => Some(Box::new(ConsoleGrammar)),
        _ => None,
    }
}
