use tracing::warn;

use super::controls::{SelectControl, ToggleControl};
use super::editor::EditorWidget;
use super::language::infer_language;
use super::session::{EditorTheme, SessionStore};

/// Application coordinator: owns the session store and the widget handles,
/// and turns dispatched messages into widget and store updates.
///
/// Generic over the widget capabilities so the same logic runs against
/// FLTK widgets in the app and in-memory fakes in tests.
pub struct AppState<E, S, T>
where
    E: EditorWidget,
    S: SelectControl,
    T: ToggleControl,
{
    /// None once shutdown has disposed the widget.
    editor: Option<E>,
    language_select: S,
    theme_toggle: T,
    minify_toggle: T,
    store: SessionStore,
    minify_running: bool,
}

impl<E, S, T> AppState<E, S, T>
where
    E: EditorWidget,
    S: SelectControl,
    T: ToggleControl,
{
    pub fn new(
        editor: E,
        language_select: S,
        theme_toggle: T,
        minify_toggle: T,
        store: SessionStore,
    ) -> Self {
        Self {
            editor: Some(editor),
            language_select,
            theme_toggle,
            minify_toggle,
            store,
            minify_running: false,
        }
    }

    /// Apply the persisted session to the editor and both controls.
    ///
    /// Reads the store once and writes nothing back, so running it twice
    /// in a row is a no-op. The selector is synchronized to the language
    /// the editor actually reports, and only touched when it differs.
    pub fn restore_session(&mut self) {
        let session = self.store.load();
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        editor.set_text(&session.content);
        editor.set_language_id(&session.language_id);

        let active = editor.language_id();
        if self.language_select.selected_id().as_deref() != Some(active.as_str()) {
            self.language_select.select_id(&active);
        }

        let theme = EditorTheme::from_id(&session.theme_id);
        self.theme_toggle.set_on(theme.is_dark());
        editor.set_theme(theme);
    }

    /// The user picked a language in the selector.
    ///
    /// Persists the id the editor reports after the change, not the raw
    /// selector value, in case the widget normalizes it.
    pub fn language_selected(&mut self, id: &str) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        editor.set_language_id(id);
        let active = editor.language_id();
        if let Err(e) = self.store.save_language(&active) {
            warn!("failed to save language: {e}");
        }
    }

    /// The dark-mode checkbox changed.
    pub fn theme_toggled(&mut self, dark: bool) {
        let theme = EditorTheme::from_dark_flag(dark);
        if let Some(editor) = self.editor.as_mut() {
            editor.set_theme(theme);
        }
        if let Err(e) = self.store.save_theme(theme.id()) {
            warn!("failed to save theme: {e}");
        }
    }

    /// A dropped file finished loading: replace the content, infer the
    /// language from the file name, and bring the selector along.
    pub fn file_loaded(&mut self, file_name: &str, text: &str) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        editor.set_text(text);

        let language = infer_language(file_name);
        editor.set_language_id(&language);
        self.language_select.select_id(&language);
        if let Err(e) = self.store.save_language(&language) {
            warn!("failed to save language: {e}");
        }
    }

    /// The minify checkbox was checked. Returns the source to hand to the
    /// background minifier, or None when a run is already in flight (the
    /// pending completion will reset the toggle) or the editor is gone.
    pub fn minify_requested(&mut self) -> Option<String> {
        if self.minify_running {
            return None;
        }
        let Some(editor) = self.editor.as_ref() else {
            self.minify_toggle.set_on(false);
            return None;
        };
        self.minify_running = true;
        Some(editor.text())
    }

    /// A background minify finished. Success replaces the content; failure
    /// keeps it and logs. Either way the toggle resets to unchecked: it is
    /// a one-shot trigger, not a mode.
    pub fn minify_finished(&mut self, result: Result<String, String>) {
        self.minify_running = false;
        match result {
            Ok(minified) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.set_text(&minified);
                }
            }
            Err(e) => warn!("minification failed: {e}"),
        }
        self.minify_toggle.set_on(false);
    }

    /// Final write-back on window close: saves the content (the language
    /// is saved only when it changes, never here) and disposes the editor.
    pub fn shutdown(&mut self) {
        let Some(editor) = self.editor.take() else {
            return;
        };
        if let Err(e) = self.store.save_content(&editor.text()) {
            warn!("failed to save content: {e}");
        }
        editor.dispose();
    }
}
