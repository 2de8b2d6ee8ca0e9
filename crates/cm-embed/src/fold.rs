//! Code folding range finders.

use crate::options::Function;

/// A kind of foldable region, backed by one of CodeMirror's `CodeMirror.fold.*` helpers.
///
/// The [`name`](FoldType::name) doubles as the preference key that enables the fold type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldType {
    name: &'static str,
    helper: &'static str,
    script: &'static str,
}

impl FoldType {
    /// Brace/bracket blocks.
    pub const BRACE: Self = Self {
        name: "fold.brace",
        helper: "brace",
        script: "scripts/codemirror/addon/fold/brace-fold.js",
    };
    /// XML/HTML elements.
    pub const XML: Self = Self {
        name: "fold.xml",
        helper: "xml",
        script: "scripts/codemirror/addon/fold/xml-fold.js",
    };
    /// Indentation blocks.
    pub const INDENT: Self = Self {
        name: "fold.indent",
        helper: "indent",
        script: "scripts/codemirror/addon/fold/indent-fold.js",
    };
    /// Block comments.
    pub const COMMENT: Self = Self {
        name: "fold.comment",
        helper: "comment",
        script: "scripts/codemirror/addon/fold/comment-fold.js",
    };

    /// All known fold types.
    pub fn all() -> &'static [FoldType] {
        &[Self::BRACE, Self::XML, Self::INDENT, Self::COMMENT]
    }

    /// Look up a fold type by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.name == name)
    }

    /// Name (and preference key) of this fold type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The addon script providing the helper.
    pub fn script(&self) -> &'static str {
        self.script
    }

    /// JS expression for this fold type's range finder.
    pub fn helper_expr(&self) -> String {
        format!("CodeMirror.fold.{}", self.helper)
    }
}

/// Build the `rangeFinder` callback for a set of fold types.
///
/// Returns `None` for an empty set. More than one type is combined with
/// `CodeMirror.fold.combine`, which tries each finder in order.
pub fn range_finder(types: &[FoldType]) -> Option<Function> {
    let finder = match types {
        [] => return None,
        [single] => single.helper_expr(),
        many => {
            let helpers: Vec<String> = many.iter().map(FoldType::helper_expr).collect();
            format!("CodeMirror.fold.combine({})", helpers.join(", "))
        }
    };
    Some(Function::new(
        ["cm", "start"],
        format!("return {finder}(cm, start);"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_finder_shapes() {
        assert_eq!(range_finder(&[]), None);

        let single = range_finder(&[FoldType::BRACE]).unwrap();
        assert_eq!(single.source(), "return CodeMirror.fold.brace(cm, start);");

        let combined = range_finder(&[FoldType::XML, FoldType::COMMENT]).unwrap();
        assert_eq!(
            combined.source(),
            "return CodeMirror.fold.combine(CodeMirror.fold.xml, CodeMirror.fold.comment)(cm, start);"
        );
        assert_eq!(combined.params(), ["cm", "start"]);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(FoldType::from_name("fold.xml"), Some(FoldType::XML));
        assert_eq!(FoldType::from_name("xml"), None);
    }
}
