use cm_embed::{CmBuilder, Feature, FoldType, Mode, ModeProfile, RenderError, Theme};
use pretty_assertions::assert_eq;
use std::io::{self, Write};

fn plain_builder(run_mode: bool) -> CmBuilder {
    CmBuilder::new(Mode::new("text", "text/plain"), "http://host/app", run_mode)
}

fn head(html: &str) -> &str {
    let end = html.find("</head>").expect("head end");
    &html[..end]
}

#[test]
fn test_document_layout() {
    let builder = plain_builder(false);
    let html = builder.render();
    let lines: Vec<&str> = html.lines().collect();

    assert_eq!(lines[0], "<!doctype html>");
    assert_eq!(lines[1], "<html>");
    assert_eq!(lines[2], "<head>");
    assert_eq!(
        lines[3],
        "<meta http-equiv=\"X-UA-Compatible\" content=\"IE=EDGE\" />"
    );
    assert_eq!(lines.last(), Some(&"</html>"));

    let style_block = html.find("<style type=\"text/css\">").unwrap();
    let last_script_tag = html.rfind("\"> </script>").unwrap();
    let last_link = html.rfind("<link rel=\"stylesheet\"").unwrap();
    let first_script_tag = html.find("<script src=").unwrap();
    assert!(last_link < first_script_tag);
    assert!(last_script_tag < style_block);
    assert!(html.contains(".CodeMirror-activeline-background {background: #e8f2ff !important;}"));
    let bracket_style =
        ".CodeMirror-matchingbracket{outline:1px solid grey; color:black !important;}";
    assert!(html.contains(bracket_style));
    assert!(html.contains("<body onload=\"CMEclipse.loaded()\">"));
    assert!(html.ends_with("</script>\n</body>\n</html>\n"));
}

#[test]
fn test_script_tag_is_resolved_against_base_url() {
    let html = plain_builder(false).render();
    assert!(html.contains(
        "<script src=\"http://host/app/scripts/codemirror/lib/codemirror.js\"> </script>"
    ));
    assert!(html.contains(
        "<link rel=\"stylesheet\" href=\"http://host/app/scripts/codemirror/lib/codemirror.css\">"
    ));
}

#[test]
fn test_duplicate_assets_render_once_in_first_seen_order() {
    let mut builder = plain_builder(false);
    builder.add_script("b.js");
    builder.add_script("a.js");
    builder.add_script("b.js");
    builder.add_style("z.css");
    builder.add_style("z.css");
    builder.add_style("y.css");

    let html = builder.render();
    let head = head(&html);
    assert_eq!(head.matches("http://host/app/b.js").count(), 1);
    assert_eq!(head.matches("http://host/app/a.js").count(), 1);
    assert_eq!(head.matches("http://host/app/z.css").count(), 1);
    assert!(head.find("/b.js").unwrap() < head.find("/a.js").unwrap());
    assert!(head.find("/z.css").unwrap() < head.find("/y.css").unwrap());

    for script in builder.scripts() {
        let tag = format!("<script src=\"http://host/app/{script}\"> </script>");
        assert_eq!(head.matches(&tag).count(), 1, "{tag}");
    }
}

#[test]
fn test_render_is_idempotent() {
    let mut builder = ModeProfile::new(Mode::new("json", "application/json"))
        .with_feature(Feature::LineNumbers)
        .with_feature(Feature::Folding(vec![FoldType::BRACE]))
        .build("http://host/app", false);
    builder.set_command("foo", "return true;");

    assert_eq!(builder.render(), builder.render());
}

#[test]
fn test_body_element_depends_on_run_mode() {
    let run = plain_builder(true).render();
    assert!(run.contains("<pre id=\"code\" name=\"code\"></pre>"));
    assert!(!run.contains("<textarea"));

    let edit = plain_builder(false).render();
    assert!(!edit.contains("<pre id=\"code\""));
    let form = edit.find("<form>").unwrap();
    let textarea = edit
        .find("<textarea id=\"code\" name=\"code\"></textarea>")
        .unwrap();
    let form_end = edit.find("</form>").unwrap();
    assert!(form < textarea && textarea < form_end);
}

#[test]
fn test_commands_precede_editor_creation() {
    let mut builder = plain_builder(false);
    builder.set_command("foo", "return true;");
    builder.set_command("bar", "return false;");

    let html = builder.render();
    let foo = html
        .find("CodeMirror.commands.foo = function(cm) {return true;}")
        .unwrap();
    let bar = html
        .find("CodeMirror.commands.bar = function(cm) {return false;}")
        .unwrap();
    let editor = html
        .find("var editor = CodeMirror.fromTextArea(document.getElementById(\"code\"), {")
        .unwrap();
    assert!(foo < bar);
    assert!(bar < editor);
}

#[test]
fn test_unset_option_disappears_from_document() {
    let mut builder = plain_builder(false);
    builder.set_theme(Some(&Theme::SOLARIZED));
    assert!(builder.render().contains(r#""theme":"solarized""#));

    builder.set_theme(None);
    assert!(!builder.render().contains("\"theme\""));
}

#[test]
fn test_editor_line_embeds_options() {
    let builder = plain_builder(false);
    let html = builder.render();
    let expected = format!(
        "var editor = CodeMirror.fromTextArea(document.getElementById(\"code\"), {});",
        builder.options().render()
    );
    assert!(html.lines().any(|l| l == expected));
}

#[test]
fn test_write_to_sink() {
    let builder = plain_builder(false);
    let mut sink = Vec::new();
    builder.write_to(&mut sink).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), builder.render());
}

struct FullSink {
    capacity: usize,
    written: Vec<u8>,
}

impl Write for FullSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.capacity - self.written.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_to_reports_sink_failure() {
    let builder = plain_builder(false);
    let mut sink = FullSink {
        capacity: 64,
        written: Vec::new(),
    };
    let err = builder.write_to(&mut sink).unwrap_err();
    assert!(matches!(err, RenderError::Io(_)));
    assert_eq!(sink.written.len(), 64);
}
