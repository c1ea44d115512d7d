use std::fs;
use std::path::PathBuf;

use super::error::Result;

/// Placeholder shown on first launch, before any session has been saved.
pub const DEFAULT_CONTENT: &str = "console.log(42);\n\n\n\n\n\n";
pub const DEFAULT_LANGUAGE: &str = "javascript";

const CONTENT_FILE: &str = "content";
const LANGUAGE_FILE: &str = "language";
const THEME_FILE: &str = "theme";

/// The persisted editing context: the last document text, the language it
/// was edited as, and the active color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub content: String,
    pub language_id: String,
    pub theme_id: String,
}

/// Editor color scheme. The persisted identifiers are `"vs"` for light and
/// `"vs-dark"` for dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTheme {
    Light,
    Dark,
}

impl EditorTheme {
    /// Resolve a stored identifier. Only the exact dark id selects dark;
    /// any other value is light.
    pub fn from_id(id: &str) -> Self {
        if id == "vs-dark" {
            EditorTheme::Dark
        } else {
            EditorTheme::Light
        }
    }

    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            EditorTheme::Dark
        } else {
            EditorTheme::Light
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            EditorTheme::Light => "vs",
            EditorTheme::Dark => "vs-dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == EditorTheme::Dark
    }
}

/// Persistence for the three session fields, one plain-text file each.
/// A missing file is a valid state (first launch), not an error.
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Store rooted at the per-user location: data_dir/codepad/session/
    pub fn new() -> Self {
        let mut dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push("codepad");
        dir.push("session");
        Self { dir }
    }

    /// Store rooted at an explicit directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Read the full session. Each field independently falls back to its
    /// default when the backing file is missing, unreadable, or empty.
    /// Never writes.
    pub fn load(&self) -> Session {
        Session {
            content: self
                .read_field(CONTENT_FILE)
                .unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
            language_id: self
                .read_field(LANGUAGE_FILE)
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            theme_id: self
                .read_field(THEME_FILE)
                .unwrap_or_else(|| EditorTheme::Light.id().to_string()),
        }
    }

    pub fn save_content(&self, text: &str) -> Result<()> {
        self.write_field(CONTENT_FILE, text)
    }

    pub fn save_language(&self, id: &str) -> Result<()> {
        self.write_field(LANGUAGE_FILE, id)
    }

    pub fn save_theme(&self, id: &str) -> Result<()> {
        self.write_field(THEME_FILE, id)
    }

    fn read_field(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(name))
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn write_field(&self, name: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(name), value)?;
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, SessionStore) {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::with_dir(dir.path().join("session"));
        (dir, store)
    }

    #[test]
    fn test_empty_store_yields_defaults() {
        let (_dir, store) = temp_store();
        let session = store.load();
        assert_eq!(session.content, "console.log(42);\n\n\n\n\n\n");
        assert_eq!(session.language_id, "javascript");
        assert_eq!(session.theme_id, "vs");
    }

    #[test]
    fn test_load_does_not_create_files() {
        let (dir, store) = temp_store();
        store.load();
        assert!(!dir.path().join("session").exists());
    }

    #[test]
    fn test_round_trip_each_field() {
        let (_dir, store) = temp_store();
        store.save_content("let x = 1;").unwrap();
        store.save_language("rust").unwrap();
        store.save_theme("vs-dark").unwrap();

        let session = store.load();
        assert_eq!(session.content, "let x = 1;");
        assert_eq!(session.language_id, "rust");
        assert_eq!(session.theme_id, "vs-dark");
    }

    #[test]
    fn test_fields_are_written_independently() {
        let (_dir, store) = temp_store();
        store.save_language("python").unwrap();

        let session = store.load();
        assert_eq!(session.language_id, "python");
        assert_eq!(session.content, DEFAULT_CONTENT);
        assert_eq!(session.theme_id, "vs");
    }

    #[test]
    fn test_empty_value_falls_back_to_default() {
        let (_dir, store) = temp_store();
        store.save_language("").unwrap();
        assert_eq!(store.load().language_id, "javascript");
    }

    #[test]
    fn test_unreadable_value_falls_back_to_default() {
        let (dir, store) = temp_store();
        let session_dir = dir.path().join("session");
        fs::create_dir_all(&session_dir).unwrap();
        fs::write(session_dir.join("language"), [0xff, 0xfe, 0x80]).unwrap();
        assert_eq!(store.load().language_id, "javascript");
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let (_dir, store) = temp_store();
        store.save_theme("vs-dark").unwrap();
        store.save_theme("vs").unwrap();
        assert_eq!(store.load().theme_id, "vs");
    }

    #[test]
    fn test_content_preserves_whitespace() {
        let (_dir, store) = temp_store();
        store.save_content("a\n\n  b\t\n").unwrap();
        assert_eq!(store.load().content, "a\n\n  b\t\n");
    }

    #[test]
    fn test_theme_id_resolution() {
        assert_eq!(EditorTheme::from_id("vs-dark"), EditorTheme::Dark);
        assert_eq!(EditorTheme::from_id("vs"), EditorTheme::Light);
        assert_eq!(EditorTheme::from_id("solarized"), EditorTheme::Light);
        assert_eq!(EditorTheme::from_id(""), EditorTheme::Light);
    }

    #[test]
    fn test_theme_id_round_trip() {
        assert_eq!(EditorTheme::from_id(EditorTheme::Dark.id()), EditorTheme::Dark);
        assert_eq!(EditorTheme::from_id(EditorTheme::Light.id()), EditorTheme::Light);
    }
}
