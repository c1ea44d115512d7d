use std::fs;
use std::path::{Path, PathBuf};

use fltk::app::Sender;
use tracing::warn;

use super::error::Result;
use super::messages::Message;

/// Parse a drag-and-drop text payload into file paths.
///
/// X11 and Wayland deliver newline-separated `file://` URIs with
/// percent-encoding; other platforms hand over bare paths. A URI that
/// fails to decode is kept verbatim.
pub fn dropped_paths(payload: &str) -> Vec<PathBuf> {
    payload
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.strip_prefix("file://") {
            Some(uri_path) => match urlencoding::decode(uri_path) {
                Ok(decoded) => PathBuf::from(decoded.into_owned()),
                Err(_) => PathBuf::from(uri_path),
            },
            None => PathBuf::from(line),
        })
        .collect()
}

/// Read a dropped file as text. Bytes are taken verbatim with lossy UTF-8
/// conversion; a binary file produces garbled text rather than an error.
pub fn read_dropped_file(path: &Path) -> Result<(String, String)> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok((file_name, text))
}

/// Read `path` off the main thread and post its contents back through the
/// channel. A failed read is logged and otherwise ignored; the editor and
/// the saved session stay as they were.
pub fn load_in_background(path: PathBuf, sender: Sender<Message>) {
    std::thread::spawn(move || match read_dropped_file(&path) {
        Ok((file_name, text)) => sender.send(Message::FileLoaded { file_name, text }),
        Err(e) => warn!("could not read dropped file {}: {e}", path.display()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_payload() {
        let paths = dropped_paths("file:///home/user/script.py\n");
        assert_eq!(paths, vec![PathBuf::from("/home/user/script.py")]);
    }

    #[test]
    fn test_percent_encoded_payload() {
        let paths = dropped_paths("file:///home/user/my%20notes.txt");
        assert_eq!(paths, vec![PathBuf::from("/home/user/my notes.txt")]);
    }

    #[test]
    fn test_bare_path_payload() {
        let paths = dropped_paths("/tmp/data.json");
        assert_eq!(paths, vec![PathBuf::from("/tmp/data.json")]);
    }

    #[test]
    fn test_multi_file_payload_keeps_order() {
        let paths = dropped_paths("file:///a.rs\nfile:///b.rs\n");
        assert_eq!(paths, vec![PathBuf::from("/a.rs"), PathBuf::from("/b.rs")]);
    }

    #[test]
    fn test_blank_payload() {
        assert!(dropped_paths("").is_empty());
        assert!(dropped_paths("\n  \n").is_empty());
    }

    #[test]
    fn test_read_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("script.py");
        fs::write(&path, "print(1)").unwrap();

        let (file_name, text) = read_dropped_file(&path).unwrap();
        assert_eq!(file_name, "script.py");
        assert_eq!(text, "print(1)");
    }

    #[test]
    fn test_read_binary_file_is_lossy() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0x68, 0x69, 0xff, 0x21]).unwrap();

        let (_, text) = read_dropped_file(&path).unwrap();
        assert!(text.starts_with("hi"));
        assert!(text.contains('\u{fffd}'));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = read_dropped_file(&dir.path().join("gone.txt"));
        assert!(result.is_err());
    }
}
