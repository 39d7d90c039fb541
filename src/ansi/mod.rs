// ANSI/VT100 control sequences: constants for the fixed codes, builders for
// the parameterized ones.

pub mod ascii;
pub mod clear;
pub mod color;
pub mod cursor;
pub mod style;
