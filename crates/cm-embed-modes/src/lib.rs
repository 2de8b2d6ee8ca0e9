#![warn(missing_docs)]
//! `cm-embed-modes` - data-driven mode profiles for `cm-embed`.
//!
//! Each language is a [`ModeProfile`]: the CodeMirror mode plus the features its editor
//! installs. There is no per-language builder type; hosts register these profiles on a
//! [`BuilderRegistry`] and ask it for builders.

use cm_embed::{BuilderConfig, BuilderRegistry, Feature, FoldType, Mode, ModeProfile};

const MODE_DIR: &str = "scripts/codemirror/mode";

fn mode_script(name: &str) -> String {
    format!("{MODE_DIR}/{name}/{name}.js")
}

/// XML (`application/xml`).
pub fn xml_mode() -> Mode {
    Mode::new("xml", "application/xml").with_script(mode_script("xml"))
}

/// JSON (`application/json`), handled by the JavaScript mode.
pub fn json_mode() -> Mode {
    Mode::new("json", "application/json").with_script(mode_script("javascript"))
}

/// JavaScript (`text/javascript`).
pub fn javascript_mode() -> Mode {
    Mode::new("javascript", "text/javascript").with_script(mode_script("javascript"))
}

/// CSS (`text/css`).
pub fn css_mode() -> Mode {
    Mode::new("css", "text/css").with_script(mode_script("css"))
}

/// HTML with embedded scripts and styles (`text/html`).
pub fn html_mode() -> Mode {
    Mode::new("html", "text/html")
        .with_script(mode_script("xml"))
        .with_script(mode_script("javascript"))
        .with_script(mode_script("css"))
        .with_script(mode_script("htmlmixed"))
}

/// XML editor: line numbers, element folding, completion with context info, mark
/// occurrences, hover and hyperlinks.
pub fn xml() -> ModeProfile {
    ModeProfile::new(xml_mode())
        .with_feature(Feature::LineNumbers)
        .with_feature(Feature::Folding(vec![FoldType::XML, FoldType::COMMENT]))
        .with_feature(Feature::Hint {
            context_info: true,
            templates: false,
        })
        .with_feature(Feature::MatchHighlighter)
        .with_feature(Feature::TextHover)
        .with_feature(Feature::Hyperlink)
}

/// JSON editor.
pub fn json() -> ModeProfile {
    ModeProfile::new(json_mode())
        .with_feature(Feature::LineNumbers)
        .with_feature(Feature::Folding(vec![FoldType::BRACE]))
        .with_feature(Feature::MatchBrackets)
        .with_feature(Feature::CloseBrackets)
}

/// JavaScript editor.
pub fn javascript() -> ModeProfile {
    ModeProfile::new(javascript_mode())
        .with_feature(Feature::LineNumbers)
        .with_feature(Feature::Folding(vec![FoldType::BRACE, FoldType::COMMENT]))
        .with_feature(Feature::MatchBrackets)
        .with_feature(Feature::CloseBrackets)
        .with_feature(Feature::Hint {
            context_info: true,
            templates: true,
        })
        .with_feature(Feature::MatchHighlighter)
        .with_feature(Feature::TextHover)
        .with_feature(Feature::Lint)
}

/// CSS editor.
pub fn css() -> ModeProfile {
    ModeProfile::new(css_mode())
        .with_feature(Feature::LineNumbers)
        .with_feature(Feature::Folding(vec![FoldType::BRACE]))
        .with_feature(Feature::MatchBrackets)
        .with_feature(Feature::Hint {
            context_info: false,
            templates: false,
        })
}

/// HTML editor.
pub fn html() -> ModeProfile {
    ModeProfile::new(html_mode())
        .with_feature(Feature::LineNumbers)
        .with_feature(Feature::Folding(vec![FoldType::XML, FoldType::BRACE]))
        .with_feature(Feature::Hint {
            context_info: false,
            templates: true,
        })
        .with_feature(Feature::MatchHighlighter)
}

/// Every built-in profile.
pub fn all() -> Vec<ModeProfile> {
    vec![xml(), json(), javascript(), css(), html()]
}

/// A registry with every built-in profile registered.
pub fn registry(config: BuilderConfig) -> BuilderRegistry {
    let mut registry = BuilderRegistry::new(config);
    for profile in all() {
        registry.register_profile(profile);
    }
    registry
}
