#![warn(missing_docs)]
//! `cm-embed` - renders HTML documents that embed the CodeMirror editor.
//!
//! # Overview
//!
//! A host that shows a CodeMirror editor inside a native browser control needs a page that
//! loads the right scripts and stylesheets and then creates the editor with a configuration
//! object. This crate builds that page from typed state:
//!
//! - [`Options`] - the configuration object, an ordered tree of named values
//!   ([`OptionValue`], [`OptionGroup`]) including inline JS callbacks ([`Function`])
//! - [`CmBuilder`] - asset lists, options and inline commands for one mode, rendered with
//!   [`CmBuilder::render`] or [`CmBuilder::write_to`]
//! - [`Feature`] / [`ModeProfile`] - bundles of assets and option defaults, composed per mode
//! - [`BuilderRegistry`] - one memoized builder per mode
//!
//! Rendering performs no I/O and is deterministic: the same state always renders the same
//! bytes.
//!
//! # Quick Start
//!
//! ```rust
//! use cm_embed::{Feature, Mode, ModeProfile, Theme};
//!
//! let mode = Mode::new("xml", "application/xml").with_script("scripts/codemirror/mode/xml/xml.js");
//! let mut builder = ModeProfile::new(mode)
//!     .with_feature(Feature::LineNumbers)
//!     .build("http://localhost:8080", false);
//!
//! builder.set_theme(Some(&Theme::ECLIPSE));
//! builder.set_command("save", "CMEclipse.save(cm);");
//!
//! let html = builder.render();
//! assert!(html.contains(r#""theme":"eclipse""#));
//! assert!(html.contains("CodeMirror.commands.save = function(cm) {CMEclipse.save(cm);};"));
//! ```

pub mod browser;
pub mod builder;
mod error;
pub mod feature;
pub mod fold;
pub mod mode;
pub mod options;
pub mod registry;
pub mod theme;
pub mod token;

pub use browser::{BrowserFactory, WebBrowserType};
pub use builder::CmBuilder;
pub use error::{RegistryError, RenderError};
pub use feature::{Feature, ModeProfile};
pub use fold::FoldType;
pub use mode::Mode;
pub use options::{
    FOLD_GUTTER, Function, GroupShape, KeyMap, LINE_NUMBERS_GUTTER, LINT_GUTTER, OptionGroup,
    OptionValue, Options,
};
pub use registry::{BuilderConfig, BuilderRegistry, SharedRegistry, with_shared_builder};
pub use theme::Theme;
pub use token::ShowTokenType;
