//! Feature installers and mode profiles.
//!
//! A feature is a bundle of scripts, stylesheets and option defaults that a builder installs.
//! Mode-specific builders are expressed as a [`ModeProfile`]: a mode plus the features it
//! needs, applied in order when the builder is created.

use crate::builder::CmBuilder;
use crate::fold::FoldType;
use crate::mode::Mode;
use crate::options::{FOLD_GUTTER, LINE_NUMBERS_GUTTER, LINT_GUTTER};

/// An optional editor capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    /// Line numbers gutter.
    LineNumbers,
    /// Autocompletion popup, optionally with context info and template proposals.
    Hint {
        /// Show a context-information popup next to proposals.
        context_info: bool,
        /// Offer template (snippet) proposals.
        templates: bool,
    },
    /// Code folding with the given range finders.
    Folding(Vec<FoldType>),
    /// Mark occurrences of the token under the cursor.
    MatchHighlighter,
    /// Hover popups.
    TextHover,
    /// Ctrl+click hyperlinks.
    Hyperlink,
    /// Lint markers.
    Lint,
    /// Highlight matching brackets.
    MatchBrackets,
    /// Auto-close brackets and quotes.
    CloseBrackets,
}

impl Feature {
    /// Register this feature's assets and option defaults on `builder`.
    pub fn install(&self, builder: &mut CmBuilder) {
        match self {
            Self::LineNumbers => {
                let options = builder.options_mut();
                options.set_line_numbers(true);
                options.add_gutter(LINE_NUMBERS_GUTTER);
            }
            Self::Hint {
                context_info,
                templates,
            } => {
                builder.add_script("scripts/codemirror/addon/hint/show-hint.js");
                builder
                    .add_style("scripts/codemirror-extension/addon/hint/show-hint-eclipse.css");
                if *context_info {
                    builder.add_script(
                        "scripts/codemirror-extension/addon/hint/show-context-info.js",
                    );
                    builder.add_style(
                        "scripts/codemirror-extension/addon/hint/show-context-info.css",
                    );
                }
                if *templates {
                    builder.add_script("scripts/codemirror/addon/runmode/runmode.js");
                    builder
                        .add_script("scripts/codemirror-extension/addon/hint/templates-hint.js");
                    builder
                        .add_style("scripts/codemirror-extension/addon/hint/templates-hint.css");
                }
                // The popup always opens, even for a single proposal.
                let mut hint = builder.options_mut().hint_options();
                hint.set_complete_single(Some(false));
                hint.set_close_on_unfocus(Some(true));
            }
            Self::Folding(types) => {
                builder.add_script("scripts/codemirror/addon/fold/foldcode.js");
                builder.add_script("scripts/codemirror/addon/fold/foldgutter.js");
                builder.add_style("scripts/codemirror/addon/fold/foldgutter.css");
                for fold_type in types {
                    builder.add_script(fold_type.script());
                    builder.add_supported_fold_type(*fold_type);
                }
                let supported = builder.supported_fold_types().to_vec();
                let options = builder.options_mut();
                options.add_gutter(FOLD_GUTTER);
                options.fold_gutter().set_range_finder(&supported);
            }
            Self::MatchHighlighter => {
                builder.add_script("scripts/codemirror/addon/search/match-highlighter.js");
                builder
                    .options_mut()
                    .match_highlighter()
                    .set_min_chars(Some(2));
            }
            Self::TextHover => {
                builder.add_script("scripts/codemirror-extension/addon/hover/text-hover.js");
                builder.add_style("scripts/codemirror-extension/addon/hover/text-hover.css");
                builder.options_mut().text_hover().set_enabled(true);
            }
            Self::Hyperlink => {
                builder.add_script("scripts/codemirror-extension/addon/hyperlink/hyperlink.js");
                builder.add_style("scripts/codemirror-extension/addon/hyperlink/hyperlink.css");
            }
            Self::Lint => {
                builder.add_script("scripts/codemirror/addon/lint/lint.js");
                builder.add_style("scripts/codemirror/addon/lint/lint.css");
                builder.options_mut().add_gutter(LINT_GUTTER);
            }
            Self::MatchBrackets => {
                builder.add_script("scripts/codemirror/addon/edit/matchbrackets.js");
                builder.options_mut().set_match_brackets(true);
            }
            Self::CloseBrackets => {
                builder.add_script("scripts/codemirror/addon/edit/closebrackets.js");
                builder.options_mut().set_auto_close_brackets(true);
            }
        }
    }
}

/// A mode together with the features its builder installs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeProfile {
    mode: Mode,
    features: Vec<Feature>,
}

impl ModeProfile {
    /// A profile with no extra features.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            features: Vec::new(),
        }
    }

    /// Append a feature.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// The profile's mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Features in installation order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Create a builder for this profile.
    pub fn build(&self, base_url: &str, run_mode: bool) -> CmBuilder {
        let mut builder = CmBuilder::new(self.mode.clone(), base_url, run_mode);
        for feature in &self.features {
            feature.install(&mut builder);
        }
        builder
    }
}
