use fltk::app::Sender;
use minify_js::{Session, TopLevelMode};
use tracing::debug;

use super::error::{AppError, Result};
use super::messages::Message;

/// A fallible source-to-source code transformation.
pub trait Minifier {
    fn minify(&self, source: &str) -> Result<String>;
}

/// Minifier backed by the `minify-js` crate. Input is parsed as a
/// global-scope script; malformed input fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsMinifier;

impl Minifier for JsMinifier {
    fn minify(&self, source: &str) -> Result<String> {
        let session = Session::new();
        let mut output = Vec::new();
        minify_js::minify(&session, TopLevelMode::Global, source.as_bytes(), &mut output)
            .map_err(|e| AppError::Minify(format!("{e:?}")))?;
        String::from_utf8(output)
            .map_err(|_| AppError::Minify("minified output is not valid UTF-8".to_string()))
    }
}

/// Run `minifier` on `source` off the main thread and post the outcome
/// back through the channel.
pub fn minify_in_background<M>(minifier: M, source: String, sender: Sender<Message>)
where
    M: Minifier + Send + 'static,
{
    std::thread::spawn(move || {
        debug!("minifying {} bytes", source.len());
        let result = minifier.minify(&source).map_err(|e| e.to_string());
        sender.send(Message::MinifyFinished(result));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_well_formed_source() {
        let source = "var answer = 40 + 2;\nconsole.log(answer);\n";
        let out = JsMinifier.minify(source).unwrap();
        assert!(!out.is_empty());
        assert!(out.len() <= source.len());
        assert!(out.contains("console.log"));
    }

    #[test]
    fn test_minify_malformed_source_fails() {
        let result = JsMinifier.minify("var a = (((");
        assert!(matches!(result, Err(AppError::Minify(_))));
    }

    #[test]
    fn test_minify_empty_source() {
        let out = JsMinifier.minify("").unwrap();
        assert!(out.is_empty());
    }
}
