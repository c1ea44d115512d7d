/// Extensions whose conventional name differs from the language identifier.
/// Lookup is case-sensitive; anything not listed falls back to the
/// lowercased extension itself.
const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("py", "python"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("sh", "shell"),
    ("md", "markdown"),
    ("yml", "yaml"),
    ("rs", "rust"),
    ("pl", "perl"),
    ("txt", "plaintext"),
];

/// Language identifiers offered in the selector, sorted. Ids restored or
/// inferred outside this list get appended to the control at runtime.
pub const SELECTOR_LANGUAGES: &[&str] = &[
    "css",
    "html",
    "java",
    "javascript",
    "json",
    "markdown",
    "perl",
    "plaintext",
    "python",
    "rust",
    "shell",
    "typescript",
    "xml",
    "yaml",
];

/// Infer a language identifier from a file name.
///
/// The extension is everything after the last `.`; a name with no dot at
/// all counts as one big extension, so `README` infers `readme`. Unmapped
/// extensions come back lowercased. Always returns a string.
pub fn infer_language(file_name: &str) -> String {
    let extension = match file_name.rfind('.') {
        Some(index) => &file_name[index + 1..],
        None => file_name,
    };
    match EXTENSION_LANGUAGES.iter().find(|(ext, _)| *ext == extension) {
        Some((_, id)) => (*id).to_string(),
        None => extension.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_map_entry_is_applied() {
        for (ext, id) in EXTENSION_LANGUAGES {
            assert_eq!(infer_language(&format!("file.{ext}")), *id);
        }
    }

    #[test]
    fn test_unmapped_extension_is_lowercased() {
        assert_eq!(infer_language("notes.xyz"), "xyz");
        assert_eq!(infer_language("shader.GLSL"), "glsl");
    }

    #[test]
    fn test_map_lookup_is_case_sensitive() {
        // "PY" misses the map and falls back to lowercasing; it does not
        // become "python"
        assert_eq!(infer_language("SCRIPT.PY"), "py");
    }

    #[test]
    fn test_name_without_dot_is_all_extension() {
        assert_eq!(infer_language("README"), "readme");
        assert_eq!(infer_language("Makefile"), "makefile");
    }

    #[test]
    fn test_trailing_dot_yields_empty_id() {
        assert_eq!(infer_language("archive."), "");
    }

    #[test]
    fn test_takes_last_extension_only() {
        assert_eq!(infer_language("bundle.tar.gz"), "gz");
        assert_eq!(infer_language("lib.spec.ts"), "typescript");
    }

    #[test]
    fn test_hidden_file_uses_trailing_part() {
        assert_eq!(infer_language(".bashrc"), "bashrc");
    }

    #[test]
    fn test_selector_vocabulary_is_sorted_and_unique() {
        let mut sorted = SELECTOR_LANGUAGES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, SELECTOR_LANGUAGES);
    }

    #[test]
    fn test_selector_covers_all_map_targets() {
        for (_, id) in EXTENSION_LANGUAGES {
            assert!(SELECTOR_LANGUAGES.contains(id), "missing {id}");
        }
    }
}
