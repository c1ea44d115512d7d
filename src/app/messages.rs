use std::path::PathBuf;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Toolbar
    LanguageSelected(String),
    ThemeToggled(bool),
    MinifyRequested,

    // Drag and drop
    FileDropped(PathBuf),

    // Background results
    FileLoaded { file_name: String, text: String },
    MinifyFinished(Result<String, String>),

    // Lifecycle
    Quit,
}
