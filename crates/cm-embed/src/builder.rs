//! HTML document builder.
//!
//! [`CmBuilder`] owns everything needed to produce the page that hosts one CodeMirror editor:
//! the asset lists, the options tree and the inline commands.
//!
//! Document layout:
//!
//! ```text
//! <!doctype html>
//! <html>
//! <head>
//!   meta, stylesheet links, script tags, inline style block
//! </head>
//! <body onload="CMEclipse.loaded()">
//!   <pre> (run mode) | <form><textarea> (edit mode)
//!   <script> commands + CodeMirror.fromTextArea(..., {options}) </script>
//! </body>
//! </html>
//! ```

use crate::error::RenderError;
use crate::fold::FoldType;
use crate::mode::Mode;
use crate::options::Options;
use crate::theme::Theme;
use std::io::Write;

const ACTIVE_LINE_STYLE: &str =
    " .CodeMirror-activeline-background {background: #e8f2ff !important;}";
const MATCHING_BRACKET_STYLE: &str =
    " .CodeMirror-matchingbracket{outline:1px solid grey; color:black !important;}";

/// Builds the HTML document embedding a CodeMirror editor for one mode.
#[derive(Debug, Clone)]
pub struct CmBuilder {
    mode: Mode,
    base_url: String,
    run_mode: bool,
    options: Options,
    scripts: Vec<String>,
    styles: Vec<String>,
    commands: Vec<(String, String)>,
    supported_fold_types: Vec<FoldType>,
    theme_style: Option<String>,
}

impl CmBuilder {
    /// Create a builder with CodeMirror, the search addon, the fullscreen extension, the host
    /// bridge script and the mode's scripts installed.
    ///
    /// `base_url` prefixes every asset path. `run_mode` renders a read-only `<pre>` instead of
    /// an editable `<textarea>`.
    pub fn new(mode: Mode, base_url: &str, run_mode: bool) -> Self {
        let mut builder = Self {
            mode,
            base_url: base_url.trim_end_matches('/').to_string(),
            run_mode,
            options: Options::new(),
            scripts: Vec::new(),
            styles: Vec::new(),
            commands: Vec::new(),
            supported_fold_types: Vec::new(),
            theme_style: None,
        };

        builder.add_script("scripts/codemirror/lib/codemirror.js");
        builder.add_style("scripts/codemirror/lib/codemirror.css");

        builder.add_script("scripts/codemirror/addon/dialog/dialog.js");
        builder.add_script("scripts/codemirror/addon/search/searchcursor.js");
        builder.add_script("scripts/codemirror/addon/search/search.js");
        builder.add_style("scripts/codemirror/addon/dialog/dialog.css");

        builder.add_script("scripts/codemirror/addon/selection/active-line.js");
        builder.add_script("scripts/codemirror-extension/addon/selection/fullscreen.js");
        builder.add_style("scripts/codemirror-extension/addon/selection/fullscreen.css");

        builder.add_script("scripts/eclipse/cm-eclipse.js");

        let mode_scripts = builder.mode.scripts().to_vec();
        for script in mode_scripts {
            builder.add_script(script);
        }

        let mode = builder.mode.clone();
        builder.options.set_mode(&mode);
        builder.options.set_style_active_line(true);
        builder.options.set_line_wrapping(true);
        builder.options.set_show_cursor_when_selecting(true);
        if run_mode {
            builder.options.set_read_only(true);
        }
        builder
    }

    /// The builder's mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Base URL prefixed to asset paths (without trailing `/`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `true` for read-only display mode.
    pub fn is_run_mode(&self) -> bool {
        self.run_mode
    }

    /// The options tree.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The options tree, mutably.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Script paths in registration order.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Stylesheet paths in registration order.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Register a script. Returns `false` if the path was already registered.
    pub fn add_script(&mut self, script: impl Into<String>) -> bool {
        push_unique(&mut self.scripts, script.into(), "script")
    }

    /// Register a stylesheet. Returns `false` if the path was already registered.
    pub fn add_style(&mut self, style: impl Into<String>) -> bool {
        push_unique(&mut self.styles, style.into(), "style")
    }

    /// Fold types this builder can offer (enabled individually through preferences).
    pub fn supported_fold_types(&self) -> &[FoldType] {
        &self.supported_fold_types
    }

    /// Declare a supported fold type.
    pub fn add_supported_fold_type(&mut self, fold_type: FoldType) {
        if !self.supported_fold_types.contains(&fold_type) {
            self.supported_fold_types.push(fold_type);
        }
    }

    /// Set (or clear) the theme. The previous theme's stylesheet is replaced by the new one's.
    pub fn set_theme(&mut self, theme: Option<&Theme>) {
        let stylesheet = theme.and_then(Theme::stylesheet);
        if stylesheet != self.theme_style {
            if let Some(old) = self.theme_style.take() {
                log::trace!("remove style {old}");
                self.styles.retain(|s| *s != old);
            }
            // A stylesheet registered by someone else is left in place on the next change.
            let added = stylesheet.filter(|new| self.add_style(new.clone()));
            self.theme_style = added;
        }
        self.options.set_theme(theme);
    }

    /// Define `CodeMirror.commands.<name>`. Redefining a command keeps its position.
    pub fn set_command(&mut self, name: impl Into<String>, script: impl Into<String>) {
        let name = name.into();
        let script = script.into();
        log::trace!("set command {name}");
        match self.commands.iter_mut().find(|(n, _)| *n == name) {
            Some((_, body)) => *body = script,
            None => self.commands.push((name, script)),
        }
    }

    /// Remove a command, returning its body.
    pub fn remove_command(&mut self, name: &str) -> Option<String> {
        let i = self.commands.iter().position(|(n, _)| n == name)?;
        Some(self.commands.remove(i).1)
    }

    /// Body of a registered command.
    pub fn command(&self, name: &str) -> Option<&str> {
        self.commands
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, body)| body.as_str())
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = (&str, &str)> {
        self.commands.iter().map(|(n, b)| (n.as_str(), b.as_str()))
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let mut out = String::new();

        line(&mut out, "<!doctype html>");
        line(&mut out, "<html>");
        self.render_head(&mut out);
        line(&mut out, "<body onload=\"CMEclipse.loaded()\">");
        if self.run_mode {
            line(&mut out, "<pre id=\"code\" name=\"code\"></pre>");
        } else {
            line(&mut out, "<form>");
            line(&mut out, "<textarea id=\"code\" name=\"code\"></textarea>");
            line(&mut out, "</form>");
        }
        self.render_script(&mut out);
        line(&mut out, "</body>");
        line(&mut out, "</html>");

        log::debug!(
            "rendered {} document: {} bytes, {} scripts, {} styles, {} commands",
            self.mode.id(),
            out.len(),
            self.scripts.len(),
            self.styles.len(),
            self.commands.len()
        );
        out
    }

    /// Render the document into `writer`.
    ///
    /// Fails if the writer does not accept the whole document.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), RenderError> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn render_head(&self, out: &mut String) {
        line(out, "<head>");
        line(out, "<meta http-equiv=\"X-UA-Compatible\" content=\"IE=EDGE\" />");
        for href in &self.styles {
            line(
                out,
                &format!("<link rel=\"stylesheet\" href=\"{}/{}\">", self.base_url, href),
            );
        }
        for src in &self.scripts {
            line(
                out,
                &format!("<script src=\"{}/{}\"> </script>", self.base_url, src),
            );
        }
        line(out, "<style type=\"text/css\">");
        line(out, ACTIVE_LINE_STYLE);
        line(out, MATCHING_BRACKET_STYLE);
        line(out, "</style>");
        line(out, "</head>");
    }

    fn render_script(&self, out: &mut String) {
        line(out, "<script type=\"text/javascript\">");
        for (name, body) in &self.commands {
            line(
                out,
                &format!("CodeMirror.commands.{name} = function(cm) {{{body}}};"),
            );
        }
        line(
            out,
            &format!(
                "var editor = CodeMirror.fromTextArea(document.getElementById(\"code\"), {});",
                self.options.render()
            ),
        );
        line(out, "</script>");
    }
}

fn line(out: &mut String, content: &str) {
    out.push_str(content);
    out.push('\n');
}

fn push_unique(list: &mut Vec<String>, path: String, kind: &str) -> bool {
    if list.contains(&path) {
        return false;
    }
    log::trace!("add {kind} {path}");
    list.push(path);
    true
}
