//! The CodeMirror configuration tree.
//!
//! [`Options`] is the root object passed to `CodeMirror.fromTextArea`. It wraps an
//! [`OptionGroup`] and adds typed setters for the options this crate knows about; anything else
//! can still be set through [`Options::set`].

mod addons;
mod value;

pub use addons::{
    FoldGutterOption, HintOption, HyperlinkOption, LintOption, MatchHighlighterOption,
    TextHoverOption,
};
pub use value::{Function, GroupShape, OptionGroup, OptionValue};

use crate::mode::Mode;
use crate::theme::Theme;

/// Gutter showing line numbers.
pub const LINE_NUMBERS_GUTTER: &str = "CodeMirror-linenumbers";
/// Gutter showing fold markers.
pub const FOLD_GUTTER: &str = "CodeMirror-foldgutter";
/// Gutter showing lint markers.
pub const LINT_GUTTER: &str = "CodeMirror-lint-markers";

/// Key binding scheme (`keyMap` option).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMap {
    /// CodeMirror's default bindings.
    #[default]
    Default,
    /// Emacs bindings (`keymap/emacs.js`).
    Emacs,
    /// Sublime Text bindings (`keymap/sublime.js`).
    Sublime,
    /// Vim bindings (`keymap/vim.js`).
    Vim,
}

impl KeyMap {
    /// Value of the `keyMap` option.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Emacs => "emacs",
            Self::Sublime => "sublime",
            Self::Vim => "vim",
        }
    }

    /// Script implementing the key map, if it is not built in.
    pub fn script(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Emacs => Some("scripts/codemirror/keymap/emacs.js"),
            Self::Sublime => Some("scripts/codemirror/keymap/sublime.js"),
            Self::Vim => Some("scripts/codemirror/keymap/vim.js"),
        }
    }
}

/// Root options object for one editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    root: OptionGroup,
}

impl Options {
    /// Create an empty options tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying group.
    pub fn root(&self) -> &OptionGroup {
        &self.root
    }

    /// Set an arbitrary option.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.root.set(name, value);
    }

    /// Remove an option so it no longer appears in the output.
    pub fn unset(&mut self, name: &str) -> Option<OptionValue> {
        self.root.remove(name)
    }

    /// Look up an option.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.root.get(name)
    }

    /// Set the `mode` option to the mode's MIME type.
    pub fn set_mode(&mut self, mode: &Mode) {
        self.root.set("mode", mode.mime());
    }

    /// Set or clear the `theme` option.
    pub fn set_theme(&mut self, theme: Option<&Theme>) {
        self.root.set_or_remove("theme", theme.map(|t| t.name()));
    }

    /// Current theme name, if set.
    pub fn theme(&self) -> Option<&str> {
        self.root.get("theme").and_then(OptionValue::as_str)
    }

    /// `lineNumbers`.
    pub fn set_line_numbers(&mut self, enabled: bool) {
        self.root.set("lineNumbers", enabled);
    }

    /// `styleActiveLine` (requires the active-line addon).
    pub fn set_style_active_line(&mut self, enabled: bool) {
        self.root.set("styleActiveLine", enabled);
    }

    /// `lineWrapping`.
    pub fn set_line_wrapping(&mut self, enabled: bool) {
        self.root.set("lineWrapping", enabled);
    }

    /// `showCursorWhenSelecting`.
    pub fn set_show_cursor_when_selecting(&mut self, enabled: bool) {
        self.root.set("showCursorWhenSelecting", enabled);
    }

    /// `matchBrackets`.
    pub fn set_match_brackets(&mut self, enabled: bool) {
        self.root.set("matchBrackets", enabled);
    }

    /// `autoCloseBrackets`.
    pub fn set_auto_close_brackets(&mut self, enabled: bool) {
        self.root.set("autoCloseBrackets", enabled);
    }

    /// `readOnly`.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.root.set("readOnly", read_only);
    }

    /// `indentUnit`; `None` falls back to CodeMirror's default.
    pub fn set_indent_unit(&mut self, unit: Option<u32>) {
        self.root.set_or_remove("indentUnit", unit);
    }

    /// `tabSize`; `None` falls back to CodeMirror's default.
    pub fn set_tab_size(&mut self, size: Option<u32>) {
        self.root.set_or_remove("tabSize", size);
    }

    /// `keyMap`. The default key map removes the option.
    pub fn set_key_map(&mut self, key_map: KeyMap) {
        if key_map == KeyMap::Default {
            self.root.remove("keyMap");
        } else {
            self.root.set("keyMap", OptionValue::Enum(key_map.name()));
        }
    }

    /// Append a gutter to `gutters` unless it is already present.
    pub fn add_gutter(&mut self, gutter: &str) {
        match self.root.get_mut("gutters") {
            Some(OptionValue::List(items)) => {
                if !items.iter().any(|item| item.as_str() == Some(gutter)) {
                    items.push(gutter.into());
                }
            }
            _ => self.root.set("gutters", vec![gutter]),
        }
    }

    /// Gutter class names, in display order.
    pub fn gutters(&self) -> Vec<&str> {
        match self.root.get("gutters") {
            Some(OptionValue::List(items)) => {
                items.iter().filter_map(OptionValue::as_str).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Bind a key (e.g. `"Ctrl-Space"`) to a command name in `extraKeys`.
    pub fn set_extra_key(&mut self, key: &str, command: &str) {
        self.root
            .group_mut("extraKeys", GroupShape::Object)
            .set(key, command);
    }

    /// Remove a key binding from `extraKeys`.
    pub fn remove_extra_key(&mut self, key: &str) {
        if let Some(OptionValue::Group(keys)) = self.root.get_mut("extraKeys") {
            keys.remove(key);
        }
    }

    /// `foldGutter` addon options.
    pub fn fold_gutter(&mut self) -> FoldGutterOption<'_> {
        FoldGutterOption::new(self.root.group_mut("foldGutter", GroupShape::Object))
    }

    /// `textHover` addon options.
    pub fn text_hover(&mut self) -> TextHoverOption<'_> {
        TextHoverOption::new(&mut self.root)
    }

    /// `highlightSelectionMatches` (mark occurrences) addon options.
    pub fn match_highlighter(&mut self) -> MatchHighlighterOption<'_> {
        MatchHighlighterOption::new(
            self.root
                .group_mut("highlightSelectionMatches", GroupShape::Object),
        )
    }

    /// `hyperlink` addon options.
    pub fn hyperlink(&mut self) -> HyperlinkOption<'_> {
        HyperlinkOption::new(self.root.group_mut("hyperlink", GroupShape::Object))
    }

    /// `hintOptions` for the show-hint addon.
    pub fn hint_options(&mut self) -> HintOption<'_> {
        HintOption::new(self.root.group_mut("hintOptions", GroupShape::Object))
    }

    /// `lint` addon options.
    pub fn lint(&mut self) -> LintOption<'_> {
        LintOption::new(self.root.group_mut("lint", GroupShape::Single))
    }

    /// Render the options object literal. Always produces an object, `{}` when empty.
    pub fn render(&self) -> String {
        if self.root.is_omitted() {
            return "{}".to_string();
        }
        self.root.render()
    }
}
