//! Application layer: session persistence, language inference, and the
//! message-driven coordinator. FLTK widget code lives in `crate::ui`.

pub mod controls;
pub mod editor;
pub mod error;
pub mod file_drop;
pub mod language;
pub mod logging;
pub mod messages;
pub mod minify;
pub mod session;
pub mod state;
