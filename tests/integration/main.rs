mod common;
mod decode;
mod viewer;
