use super::session::EditorTheme;

/// Operations the session controller needs from the code editor widget.
///
/// The production implementation wraps the FLTK text editor; tests use an
/// in-memory fake. `dispose` consumes the widget, so nothing can touch it
/// after teardown.
pub trait EditorWidget {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    /// The language the widget actually applied, which may differ from the
    /// id it was handed.
    fn language_id(&self) -> String;
    fn set_language_id(&mut self, id: &str);
    fn set_theme(&mut self, theme: EditorTheme);
    fn dispose(self);
}
