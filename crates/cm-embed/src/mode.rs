//! Editor modes (languages).

/// A CodeMirror language mode.
///
/// `id` identifies the mode inside this crate (registry key, preference scoping); `mime` is
/// what CodeMirror receives in its `mode` option. `scripts` are the mode definition files that
/// must be loaded before the editor is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mode {
    id: String,
    mime: String,
    scripts: Vec<String>,
}

impl Mode {
    /// Create a mode without any script.
    pub fn new(id: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mime: mime.into(),
            scripts: Vec::new(),
        }
    }

    /// Add a mode script (relative to the base URL).
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.scripts.push(script.into());
        self
    }

    /// Mode identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// MIME type passed to CodeMirror.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Scripts implementing this mode.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }
}
