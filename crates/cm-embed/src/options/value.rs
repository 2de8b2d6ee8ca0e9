//! Option values and their rendering as fragments of a JavaScript object literal.
//!
//! The output is JSON with one deliberate exception: [`Function`] values are written as raw
//! `function(..) { .. }` expressions, because CodeMirror calls callback options directly.

/// An inline JavaScript callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    params: Vec<String>,
    body: String,
}

impl Function {
    /// Create a callback with the given parameter names and body.
    pub fn new<I, S>(params: I, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
            body: body.into(),
        }
    }

    /// Create a callback without parameters.
    pub fn body(body: impl Into<String>) -> Self {
        Self {
            params: Vec::new(),
            body: body.into(),
        }
    }

    /// Parameter names, in declaration order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The raw (unescaped) body.
    pub fn source(&self) -> &str {
        &self.body
    }

    fn render_into(&self, out: &mut String) {
        out.push_str("function(");
        out.push_str(&self.params.join(", "));
        out.push_str(") { ");
        out.push_str(&self.body);
        out.push_str(" }");
    }
}

/// How an [`OptionGroup`] is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupShape {
    /// A full object literal: `{"a":1,"b":2}`.
    #[default]
    Object,
    /// The value of the first entry, written bare.
    ///
    /// Used for addon options that CodeMirror accepts as a single value (e.g. a callback).
    Single,
}

/// A single configurable value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// `true` / `false`.
    Bool(bool),
    /// An integer literal.
    Int(i64),
    /// A floating point literal. Non-finite values have no literal form and are omitted.
    Float(f64),
    /// A quoted, escaped string.
    Str(String),
    /// A fixed identifier, rendered like a string.
    Enum(&'static str),
    /// A bracketed sequence of values.
    List(Vec<OptionValue>),
    /// An inline callback, rendered unescaped.
    Function(Function),
    /// A nested group of named options.
    Group(OptionGroup),
}

impl OptionValue {
    /// Returns `true` if this value produces no output.
    ///
    /// Empty groups and non-finite floats are omitted together with their name.
    pub fn is_omitted(&self) -> bool {
        match self {
            Self::Float(f) => !f.is_finite(),
            Self::Group(group) => group.is_omitted(),
            _ => false,
        }
    }

    /// Render this value as a standalone fragment.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Returns the string payload of `Str` and `Enum` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the payload of `Bool` values.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the payload of `Int` values.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        match self {
            Self::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Self::Int(i) => out.push_str(&i.to_string()),
            Self::Float(f) => {
                if let Some(n) = serde_json::Number::from_f64(*f) {
                    out.push_str(&n.to_string());
                }
            }
            Self::Str(s) => push_quoted(out, s),
            Self::Enum(s) => push_quoted(out, s),
            Self::List(items) => {
                out.push('[');
                let mut first = true;
                for item in items.iter().filter(|item| !item.is_omitted()) {
                    if !first {
                        out.push(',');
                    }
                    first = false;
                    item.render_into(out);
                }
                out.push(']');
            }
            Self::Function(function) => function.render_into(out),
            Self::Group(group) => group.render_into(out),
        }
    }
}

fn push_quoted(out: &mut String, s: &str) {
    // `Value`'s Display impl is infallible and applies JSON string escaping.
    out.push_str(&serde_json::Value::String(s.to_string()).to_string());
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Function> for OptionValue {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl From<OptionGroup> for OptionValue {
    fn from(value: OptionGroup) -> Self {
        Self::Group(value)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// An ordered collection of named options.
///
/// Entries keep their insertion position: setting an existing name replaces the value in place,
/// so output only changes where a value changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionGroup {
    shape: GroupShape,
    entries: Vec<(String, OptionValue)>,
}

impl OptionGroup {
    /// Create an empty group with the given shape.
    pub fn new(shape: GroupShape) -> Self {
        Self {
            shape,
            entries: Vec::new(),
        }
    }

    /// Create an empty object-shaped group.
    pub fn object() -> Self {
        Self::new(GroupShape::Object)
    }

    /// Create an empty single-value group.
    pub fn single() -> Self {
        Self::new(GroupShape::Single)
    }

    /// The group's shape.
    pub fn shape(&self) -> GroupShape {
        self.shape
    }

    /// Number of entries (including ones that render as omitted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the group holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Names of all entries, in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.position(name).map(|i| &self.entries[i].1)
    }

    /// Look up an entry by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut OptionValue> {
        self.position(name).map(|i| &mut self.entries[i].1)
    }

    /// Returns `true` if an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Set an entry, replacing an existing value in place or appending a new one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Set an entry if `value` is `Some`, remove it otherwise.
    pub fn set_or_remove<V: Into<OptionValue>>(&mut self, name: &str, value: Option<V>) {
        match value {
            Some(value) => self.set(name, value),
            None => {
                self.remove(name);
            }
        }
    }

    /// Remove an entry, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        let i = self.position(name)?;
        Some(self.entries.remove(i).1)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the nested group stored under `name`, creating it if needed.
    ///
    /// A non-group value stored under `name` is replaced by an empty group of `shape`.
    pub fn group_mut(&mut self, name: &str, shape: GroupShape) -> &mut OptionGroup {
        let index = match self.position(name) {
            Some(i) => i,
            None => {
                let group = OptionValue::Group(OptionGroup::new(shape));
                self.entries.push((name.to_string(), group));
                self.entries.len() - 1
            }
        };

        let slot = &mut self.entries[index].1;
        if !matches!(slot, OptionValue::Group(_)) {
            *slot = OptionValue::Group(OptionGroup::new(shape));
        }
        match slot {
            OptionValue::Group(group) => group,
            _ => unreachable!("slot was just set to a group"),
        }
    }

    /// Returns `true` if rendering this group inside a parent would produce nothing.
    pub fn is_omitted(&self) -> bool {
        self.entries.iter().all(|(_, value)| value.is_omitted())
    }

    /// Render the group according to its shape.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        let mut visible = self.entries.iter().filter(|(_, value)| !value.is_omitted());
        match self.shape {
            GroupShape::Single => {
                if let Some((_, value)) = visible.next() {
                    value.render_into(out);
                }
            }
            GroupShape::Object => {
                out.push('{');
                for (i, (name, value)) in visible.enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    push_quoted(out, name);
                    out.push(':');
                    value.render_into(out);
                }
                out.push('}');
            }
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(OptionValue::Bool(true).render(), "true");
        assert_eq!(OptionValue::Int(-42).render(), "-42");
        assert_eq!(OptionValue::Float(1.5).render(), "1.5");
        assert_eq!(OptionValue::Enum("emacs").render(), "\"emacs\"");
    }

    #[test]
    fn test_string_is_escaped() {
        let value = OptionValue::from("say \"hi\"\n\\");
        assert_eq!(value.render(), r#""say \"hi\"\n\\""#);
    }

    #[test]
    fn test_function_is_not_escaped() {
        let f = Function::new(["cm", "start"], "return \"x\";");
        assert_eq!(
            OptionValue::from(f).render(),
            "function(cm, start) { return \"x\"; }"
        );
        assert_eq!(
            OptionValue::from(Function::body("run();")).render(),
            "function() { run(); }"
        );
    }

    #[test]
    fn test_list_recurses_and_skips_omitted() {
        let mut inner = OptionGroup::object();
        inner.set("a", 1);
        let value = OptionValue::List(vec![
            OptionValue::from("x"),
            OptionValue::Group(inner),
            OptionValue::Group(OptionGroup::object()),
            OptionValue::Float(f64::NAN),
            OptionValue::from(vec![true, false]),
        ]);
        assert_eq!(value.render(), r#"["x",{"a":1},[true,false]]"#);
    }

    #[test]
    fn test_group_keeps_insertion_order() {
        let mut group = OptionGroup::object();
        group.set("zeta", 1);
        group.set("alpha", 2);
        group.set("mid", 3);
        group.set("zeta", 4);
        assert_eq!(group.render(), r#"{"zeta":4,"alpha":2,"mid":3}"#);
        assert_eq!(group.names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_set_then_remove() {
        let mut group = OptionGroup::object();
        group.set("a", true);
        group.set_or_remove("b", Some("x"));
        group.set_or_remove::<&str>("a", None);
        assert_eq!(group.render(), r#"{"b":"x"}"#);
        assert!(!group.contains("a"));
    }

    #[test]
    fn test_empty_nested_group_is_omitted() {
        let mut root = OptionGroup::object();
        root.group_mut("foldGutter", GroupShape::Object);
        root.set("lineNumbers", true);
        assert_eq!(root.render(), r#"{"lineNumbers":true}"#);

        let fold_gutter = root.group_mut("foldGutter", GroupShape::Object);
        fold_gutter.set("minFoldSize", 2);
        let expected = r#"{"foldGutter":{"minFoldSize":2},"lineNumbers":true}"#;
        assert_eq!(root.render(), expected);
    }

    #[test]
    fn test_single_shape_renders_bare_value() {
        let mut root = OptionGroup::object();
        let lint = root.group_mut("lint", GroupShape::Single);
        lint.set("getAnnotations", Function::new(["text"], "return [];"));
        assert_eq!(root.render(), r#"{"lint":function(text) { return []; }}"#);
    }

    #[test]
    fn test_group_mut_replaces_scalar() {
        let mut root = OptionGroup::object();
        root.set("textHover", false);
        let hover = root.group_mut("textHover", GroupShape::Object);
        hover.set("delay", 300);
        assert_eq!(root.render(), r#"{"textHover":{"delay":300}}"#);
    }
}
