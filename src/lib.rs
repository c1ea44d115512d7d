//! CodePad: a small FLTK code scratchpad with per-field session
//! persistence, extension-based language inference, and one-shot
//! JavaScript minification.

pub mod app;
pub mod ui;
