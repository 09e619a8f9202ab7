//! Human-readable rendering of values for failure messages and diffs.

use crate::cast::{format_float, Digits};
use crate::value::Value;

const INDENT: &str = "    ";
const SHORTENED_MAX_CHARS: usize = 40;

/// Renders values to stable strings.
///
/// Implementations must be total and deterministic: the same value always
/// exports to the same string and exporting never fails.
pub trait Exporter: Send + Sync {
    /// Full, possibly multi-line representation.
    fn export(&self, value: &Value) -> String;

    /// Single-line representation for one-line messages.
    fn shortened_export(&self, value: &Value) -> String;
}

/// The exporter used unless a registry is given another one.
///
/// ```text
/// null, true, 42, 1.0, 'text'
/// Array [
///     0 => 1,
///     1 => 'a',
/// ]
/// Point Object (
///     'x' => 1,
/// )
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExporter;

impl DefaultExporter {
    pub fn new() -> Self {
        Self
    }

    fn write(&self, value: &Value, depth: usize, out: &mut String) {
        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => out.push_str(&i.to_string()),
            Value::Float(f) => out.push_str(&export_float(*f)),
            Value::String(s) => out.push_str(&export_string(s)),
            Value::Array(items) => {
                out.push_str("Array [");
                if !items.is_empty() {
                    out.push('\n');
                    for (index, item) in items.iter().enumerate() {
                        push_indent(out, depth + 1);
                        out.push_str(&index.to_string());
                        out.push_str(" => ");
                        self.write(item, depth + 1, out);
                        out.push_str(",\n");
                    }
                    push_indent(out, depth);
                }
                out.push(']');
            }
            Value::Object(object) => {
                out.push_str(object.class_name());
                out.push_str(" Object (");
                let properties = object.properties();
                if !properties.is_empty() {
                    out.push('\n');
                    for (name, property) in &properties {
                        push_indent(out, depth + 1);
                        out.push_str(&export_string(name));
                        out.push_str(" => ");
                        self.write(property, depth + 1, out);
                        out.push_str(",\n");
                    }
                    push_indent(out, depth);
                }
                out.push(')');
            }
        }
    }
}

impl Exporter for DefaultExporter {
    fn export(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write(value, 0, &mut out);
        out
    }

    fn shortened_export(&self, value: &Value) -> String {
        match value {
            Value::String(s) => shorten(&export_string(s).replace('\n', "")),
            Value::Array(items) => {
                if items.is_empty() {
                    "[]".to_string()
                } else {
                    "[...]".to_string()
                }
            }
            Value::Object(object) => {
                let ellipsis = if object.properties().is_empty() { "" } else { "..." };
                format!("{} Object ({})", object.class_name(), ellipsis)
            }
            other => self.export(other),
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Shortest round-trip digits, with `.0` appended to integral values.
fn export_float(value: f64) -> String {
    let rendered = format_float(value, Digits::Shortest);
    if value.is_finite() && !rendered.contains(&['.', 'E'][..]) {
        format!("{rendered}.0")
    } else {
        rendered
    }
}

/// Single-quoted; line breaks are shown as escapes followed by a real newline.
fn export_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str("\\r\\n\n");
            }
            '\n' if chars.peek() == Some(&'\r') => {
                chars.next();
                out.push_str("\\n\\r\n");
            }
            '\r' => out.push_str("\\r\n"),
            '\n' => out.push_str("\\n\n"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn shorten(exported: &str) -> String {
    let count = exported.chars().count();
    if count <= SHORTENED_MAX_CHARS {
        return exported.to_string();
    }
    let head: String = exported.chars().take(30).collect();
    let tail: String = exported.chars().skip(count - 7).collect();
    format!("{head}...{tail}")
}
