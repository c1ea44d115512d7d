//! FLTK widget construction and styling.

pub mod controls;
pub mod editor_pane;
pub mod main_window;
pub mod theme;
