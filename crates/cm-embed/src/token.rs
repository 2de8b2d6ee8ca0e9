//! Token types used by the mark-occurrences (match highlighter) addon.

/// A CodeMirror token type whose occurrences get highlighted when the cursor is on one.
///
/// The type name is also the preference key enabling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShowTokenType {
    token: &'static str,
}

impl ShowTokenType {
    /// Variables.
    pub const VARIABLE: Self = Self::new("variable");
    /// Secondary variables (e.g. locals, parameters).
    pub const VARIABLE_2: Self = Self::new("variable-2");
    /// Definitions.
    pub const DEF: Self = Self::new("def");
    /// Object properties.
    pub const PROPERTY: Self = Self::new("property");
    /// Markup tags.
    pub const TAG: Self = Self::new("tag");
    /// Markup attributes.
    pub const ATTRIBUTE: Self = Self::new("attribute");

    const fn new(token: &'static str) -> Self {
        Self { token }
    }

    /// All known token types.
    pub fn all() -> &'static [ShowTokenType] {
        &[
            Self::VARIABLE,
            Self::VARIABLE_2,
            Self::DEF,
            Self::PROPERTY,
            Self::TAG,
            Self::ATTRIBUTE,
        ]
    }

    /// Look up a token type by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.token == name)
    }

    /// The CodeMirror token type name.
    pub fn token(&self) -> &'static str {
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        for token_type in ShowTokenType::all() {
            assert_eq!(ShowTokenType::from_name(token_type.token()), Some(*token_type));
        }
        assert_eq!(ShowTokenType::from_name("variable-2"), Some(ShowTokenType::VARIABLE_2));
        assert_eq!(ShowTokenType::from_name("Variable"), None);
        assert_eq!(ShowTokenType::from_name(""), None);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = ShowTokenType::all().iter().map(|t| t.token()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ShowTokenType::all().len());
    }
}
