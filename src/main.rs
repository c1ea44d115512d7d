use fltk::{app, prelude::*};
use tracing::info;

use code_pad::app::file_drop;
use code_pad::app::logging;
use code_pad::app::messages::Message;
use code_pad::app::minify::{self, JsMinifier};
use code_pad::app::session::SessionStore;
use code_pad::app::state::AppState;
use code_pad::ui::editor_pane::EditorPane;
use code_pad::ui::main_window::build_main_window;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let _log_guard = match logging::init() {
        Ok(guard) => {
            info!("logging to {}", guard.log_file.display());
            Some(guard)
        }
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    info!("CodePad {} starting", env!("CARGO_PKG_VERSION"));

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    widgets.wind.show();

    let pane = EditorPane::new(
        widgets.text_editor.clone(),
        widgets.wind.clone(),
        widgets.toolbar.clone(),
    );
    let mut state = AppState::new(
        pane,
        widgets.toolbar.language_choice.clone(),
        widgets.toolbar.theme_toggle.clone(),
        widgets.toolbar.minify_toggle.clone(),
        SessionStore::new(),
    );

    // Restore after show() so the titlebar recoloring lands on a real
    // window handle.
    state.restore_session();

    while app.wait() {
        if let Some(message) = receiver.recv() {
            match message {
                Message::LanguageSelected(id) => state.language_selected(&id),
                Message::ThemeToggled(dark) => state.theme_toggled(dark),
                Message::MinifyRequested => {
                    if let Some(source) = state.minify_requested() {
                        minify::minify_in_background(JsMinifier, source, sender.clone());
                    }
                }
                Message::MinifyFinished(result) => state.minify_finished(result),
                Message::FileDropped(path) => file_drop::load_in_background(path, sender.clone()),
                Message::FileLoaded { file_name, text } => state.file_loaded(&file_name, &text),
                Message::Quit => {
                    state.shutdown();
                    app.quit();
                }
            }
        }
    }
}
