//! Typed views over addon option groups.
//!
//! Each view borrows the group it edits; creating a view for a group that does not exist yet
//! inserts an empty group, which renders as nothing until something is set in it.

use super::value::{Function, OptionGroup, OptionValue};
use crate::fold::{FoldType, range_finder};
use crate::token::ShowTokenType;

/// `foldGutter` options.
#[derive(Debug)]
pub struct FoldGutterOption<'a> {
    group: &'a mut OptionGroup,
}

impl<'a> FoldGutterOption<'a> {
    pub(crate) fn new(group: &'a mut OptionGroup) -> Self {
        Self { group }
    }

    /// Set `rangeFinder` from the enabled fold types. An empty slice removes it.
    pub fn set_range_finder(&mut self, types: &[FoldType]) {
        self.group.set_or_remove("rangeFinder", range_finder(types));
    }

    /// Returns `true` if a range finder is configured.
    pub fn has_range_finder(&self) -> bool {
        self.group.contains("rangeFinder")
    }

    /// `minFoldSize`.
    pub fn set_min_fold_size(&mut self, lines: Option<u32>) {
        self.group.set_or_remove("minFoldSize", lines);
    }
}

/// `textHover` options.
///
/// The entry takes three forms: `false` (disabled), `true` (enabled, default delay) or
/// `{"delay":N}` (enabled with a delay in milliseconds).
#[derive(Debug)]
pub struct TextHoverOption<'a> {
    root: &'a mut OptionGroup,
}

const TEXT_HOVER: &str = "textHover";

impl<'a> TextHoverOption<'a> {
    pub(crate) fn new(root: &'a mut OptionGroup) -> Self {
        Self { root }
    }

    /// Enable or disable hover. Disabling drops any configured delay.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.root.set(TEXT_HOVER, false);
        } else if !matches!(self.root.get(TEXT_HOVER), Some(OptionValue::Group(_))) {
            self.root.set(TEXT_HOVER, true);
        }
    }

    /// Set the hover delay. Has no effect while hover is disabled.
    pub fn set_delay(&mut self, delay: Option<u32>) {
        if self.is_disabled() {
            return;
        }
        match delay {
            Some(delay) => {
                let mut group = OptionGroup::object();
                group.set("delay", delay);
                self.root.set(TEXT_HOVER, group);
            }
            None => self.root.set(TEXT_HOVER, true),
        }
    }

    /// Returns `true` if hover is enabled.
    pub fn is_enabled(&self) -> bool {
        match self.root.get(TEXT_HOVER) {
            Some(OptionValue::Bool(enabled)) => *enabled,
            Some(OptionValue::Group(_)) => true,
            _ => false,
        }
    }

    /// Configured delay, if any.
    pub fn delay(&self) -> Option<u32> {
        match self.root.get(TEXT_HOVER) {
            Some(OptionValue::Group(group)) => group
                .get("delay")
                .and_then(OptionValue::as_int)
                .and_then(|d| u32::try_from(d).ok()),
            _ => None,
        }
    }

    /// Remove the option entirely.
    pub fn clear(&mut self) {
        self.root.remove(TEXT_HOVER);
    }

    fn is_disabled(&self) -> bool {
        matches!(self.root.get(TEXT_HOVER), Some(OptionValue::Bool(false)))
    }
}

/// `highlightSelectionMatches` (mark occurrences) options.
#[derive(Debug)]
pub struct MatchHighlighterOption<'a> {
    group: &'a mut OptionGroup,
}

impl<'a> MatchHighlighterOption<'a> {
    pub(crate) fn new(group: &'a mut OptionGroup) -> Self {
        Self { group }
    }

    /// Set the token types to highlight. An empty slice removes `showToken`.
    pub fn set_show_token_types(&mut self, types: &[ShowTokenType]) {
        if types.is_empty() {
            self.group.remove("showToken");
        } else {
            let tokens: Vec<OptionValue> =
                types.iter().map(|t| OptionValue::Enum(t.token())).collect();
            self.group.set("showToken", tokens);
        }
    }

    /// Currently highlighted token types.
    pub fn show_token_types(&self) -> Vec<ShowTokenType> {
        match self.group.get("showToken") {
            Some(OptionValue::List(items)) => items
                .iter()
                .filter_map(OptionValue::as_str)
                .filter_map(ShowTokenType::from_name)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// `minChars`.
    pub fn set_min_chars(&mut self, min_chars: Option<u32>) {
        self.group.set_or_remove("minChars", min_chars);
    }

    /// `annotateScrollbar`.
    pub fn set_annotate_scrollbar(&mut self, annotate: bool) {
        self.group.set("annotateScrollbar", annotate);
    }
}

/// `hyperlink` options.
#[derive(Debug)]
pub struct HyperlinkOption<'a> {
    group: &'a mut OptionGroup,
}

impl<'a> HyperlinkOption<'a> {
    pub(crate) fn new(group: &'a mut OptionGroup) -> Self {
        Self { group }
    }

    /// Callback invoked to open a hyperlink.
    pub fn set_open(&mut self, open: Option<Function>) {
        self.group.set_or_remove("open", open);
    }
}

/// `hintOptions` for the show-hint addon.
#[derive(Debug)]
pub struct HintOption<'a> {
    group: &'a mut OptionGroup,
}

impl<'a> HintOption<'a> {
    pub(crate) fn new(group: &'a mut OptionGroup) -> Self {
        Self { group }
    }

    /// `completeSingle`: insert the only completion without showing the popup.
    pub fn set_complete_single(&mut self, value: Option<bool>) {
        self.group.set_or_remove("completeSingle", value);
    }

    /// `closeOnUnfocus`.
    pub fn set_close_on_unfocus(&mut self, value: Option<bool>) {
        self.group.set_or_remove("closeOnUnfocus", value);
    }
}

/// `lint` option, written as the bare annotation callback.
#[derive(Debug)]
pub struct LintOption<'a> {
    group: &'a mut OptionGroup,
}

impl<'a> LintOption<'a> {
    pub(crate) fn new(group: &'a mut OptionGroup) -> Self {
        Self { group }
    }

    /// Callback returning lint annotations for a document.
    pub fn set_annotations(&mut self, get_annotations: Option<Function>) {
        self.group.set_or_remove("getAnnotations", get_annotations);
    }
}

#[cfg(test)]
mod tests {
    use crate::fold::FoldType;
    use crate::options::{Function, Options};
    use crate::token::ShowTokenType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fold_gutter_range_finder() {
        let mut options = Options::new();
        options.fold_gutter().set_range_finder(&[FoldType::BRACE]);
        assert!(options.fold_gutter().has_range_finder());
        assert_eq!(
            options.render(),
            r#"{"foldGutter":{"rangeFinder":function(cm, start) { return CodeMirror.fold.brace(cm, start); }}}"#
        );

        options.fold_gutter().set_range_finder(&[]);
        assert_eq!(options.render(), "{}");
    }

    #[test]
    fn test_fold_gutter_min_fold_size() {
        let mut options = Options::new();
        options.fold_gutter().set_min_fold_size(Some(2));
        assert_eq!(options.render(), r#"{"foldGutter":{"minFoldSize":2}}"#);

        options.fold_gutter().set_min_fold_size(None);
        assert_eq!(options.render(), "{}");
    }

    #[test]
    fn test_text_hover_forms() {
        let mut options = Options::new();
        options.text_hover().set_enabled(true);
        assert_eq!(options.render(), r#"{"textHover":true}"#);

        options.text_hover().set_delay(Some(500));
        assert_eq!(options.render(), r#"{"textHover":{"delay":500}}"#);
        assert_eq!(options.text_hover().delay(), Some(500));

        // Re-enabling keeps the delay.
        options.text_hover().set_enabled(true);
        assert_eq!(options.text_hover().delay(), Some(500));

        options.text_hover().set_enabled(false);
        assert_eq!(options.render(), r#"{"textHover":false}"#);

        options.text_hover().set_delay(Some(100));
        assert!(!options.text_hover().is_enabled());
        assert_eq!(options.render(), r#"{"textHover":false}"#);

        options.text_hover().clear();
        assert_eq!(options.render(), "{}");
    }

    #[test]
    fn test_match_highlighter_tokens() {
        let mut options = Options::new();
        options
            .match_highlighter()
            .set_show_token_types(&[ShowTokenType::VARIABLE, ShowTokenType::TAG]);
        assert_eq!(
            options.match_highlighter().show_token_types(),
            vec![ShowTokenType::VARIABLE, ShowTokenType::TAG]
        );
        assert_eq!(
            options.render(),
            r#"{"highlightSelectionMatches":{"showToken":["variable","tag"]}}"#
        );

        options.match_highlighter().set_show_token_types(&[]);
        assert_eq!(options.render(), "{}");
    }

    #[test]
    fn test_match_highlighter_scrollbar() {
        let mut options = Options::new();
        let mut highlighter = options.match_highlighter();
        highlighter.set_min_chars(Some(2));
        highlighter.set_annotate_scrollbar(true);
        assert_eq!(
            options.render(),
            r#"{"highlightSelectionMatches":{"minChars":2,"annotateScrollbar":true}}"#
        );
    }

    #[test]
    fn test_hint_options() {
        let mut options = Options::new();
        options.hint_options().set_complete_single(Some(false));
        options.hint_options().set_close_on_unfocus(Some(true));
        assert_eq!(
            options.render(),
            r#"{"hintOptions":{"completeSingle":false,"closeOnUnfocus":true}}"#
        );

        options.hint_options().set_complete_single(None);
        assert_eq!(options.render(), r#"{"hintOptions":{"closeOnUnfocus":true}}"#);
        options.hint_options().set_close_on_unfocus(None);
        assert_eq!(options.render(), "{}");
    }

    #[test]
    fn test_hyperlink_and_lint() {
        let mut options = Options::new();
        options
            .hyperlink()
            .set_open(Some(Function::new(["link"], "CMEclipse.open(link);")));
        options
            .lint()
            .set_annotations(Some(Function::new(["text"], "return [];")));
        assert_eq!(
            options.render(),
            r#"{"hyperlink":{"open":function(link) { CMEclipse.open(link); }},"lint":function(text) { return []; }}"#
        );
    }
}
