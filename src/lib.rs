pub mod ansi;
pub mod config;
pub mod errors;
pub mod input;
pub mod key;
pub mod logging;
pub mod term;
