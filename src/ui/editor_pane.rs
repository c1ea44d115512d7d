use fltk::{prelude::*, text::TextEditor, window::Window};

use crate::app::editor::EditorWidget;
use crate::app::session::EditorTheme;
use crate::ui::main_window::ToolBar;
use crate::ui::theme;

/// The FLTK text editor together with the chrome that follows its theme.
///
/// Theme switches recolor the window and toolbar along with the editor
/// widget itself, so the pane keeps handles to all three.
pub struct EditorPane {
    editor: TextEditor,
    window: Window,
    toolbar: ToolBar,
    language: String,
}

impl EditorPane {
    pub fn new(editor: TextEditor, window: Window, toolbar: ToolBar) -> Self {
        Self {
            editor,
            window,
            toolbar,
            language: String::new(),
        }
    }
}

impl EditorWidget for EditorPane {
    fn text(&self) -> String {
        match self.editor.buffer() {
            Some(buffer) => buffer_text_no_leak(&buffer),
            None => String::new(),
        }
    }

    fn set_text(&mut self, text: &str) {
        if let Some(mut buffer) = self.editor.buffer() {
            buffer.set_text(text);
        }
    }

    fn language_id(&self) -> String {
        self.language.clone()
    }

    fn set_language_id(&mut self, id: &str) {
        self.language = id.to_string();
    }

    fn set_theme(&mut self, theme: EditorTheme) {
        theme::apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.toolbar,
            theme.is_dark(),
        );
        #[cfg(target_os = "windows")]
        theme::set_windows_titlebar_theme(&self.window, theme.is_dark());
    }

    fn dispose(self) {
        TextEditor::delete(self.editor);
    }
}

/// Read the buffer contents through FLTK's C API and free the C copy.
///
/// fltk-rs's `TextBuffer::text()` leaks the malloc'd C string it copies
/// from, so call the FFI directly and release the allocation ourselves.
fn buffer_text_no_leak(buf: &fltk::text::TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: buf.as_ptr() stays valid while buf lives. Fl_Text_Buffer_text
    // returns a malloc'd, null-terminated C string (or null when empty);
    // CStr::from_ptr reads up to the terminator and to_string_lossy copies
    // the bytes out before free() releases the allocation.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}
