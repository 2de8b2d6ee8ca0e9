//! CodeMirror color themes.

/// A CodeMirror theme, identified by its name.
///
/// Every theme except [`Theme::DEFAULT`] ships a stylesheet under `scripts/codemirror/theme/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Theme {
    name: &'static str,
}

impl Theme {
    /// The built-in theme (no extra stylesheet).
    pub const DEFAULT: Self = Self::new("default");
    /// `eclipse`.
    pub const ECLIPSE: Self = Self::new("eclipse");
    /// `monokai`.
    pub const MONOKAI: Self = Self::new("monokai");
    /// `solarized`.
    pub const SOLARIZED: Self = Self::new("solarized");

    const ALL: &'static [Theme] = &[
        Self::DEFAULT,
        Self::new("3024-day"),
        Self::new("3024-night"),
        Self::new("ambiance"),
        Self::new("base16-dark"),
        Self::new("base16-light"),
        Self::new("blackboard"),
        Self::new("cobalt"),
        Self::ECLIPSE,
        Self::new("elegant"),
        Self::new("erlang-dark"),
        Self::new("lesser-dark"),
        Self::new("mbo"),
        Self::new("midnight"),
        Self::MONOKAI,
        Self::new("neat"),
        Self::new("night"),
        Self::new("paraiso-dark"),
        Self::new("paraiso-light"),
        Self::new("rubyblue"),
        Self::SOLARIZED,
        Self::new("the-matrix"),
        Self::new("tomorrow-night-eighties"),
        Self::new("twilight"),
        Self::new("vibrant-ink"),
        Self::new("xq-dark"),
        Self::new("xq-light"),
    ];

    const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// All known themes.
    pub fn all() -> &'static [Theme] {
        Self::ALL
    }

    /// Look up a theme by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name == name)
    }

    /// The theme name, as passed to CodeMirror's `theme` option.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The stylesheet that defines this theme, relative to the base URL.
    pub fn stylesheet(&self) -> Option<String> {
        if *self == Self::DEFAULT {
            None
        } else {
            Some(format!("scripts/codemirror/theme/{}.css", self.name))
        }
    }
}
