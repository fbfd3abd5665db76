//! Placeholder substitution over docpath documents.
//!
//! Substitutes `{{a.b}}`-style placeholders in a template string with
//! values looked up by key path in a mapping document. This is a
//! downstream consumer of the accessor engine's read side; it walks
//! placeholders through the Mapping container adapter and never mutates
//! the document.

use docpath_core::{split_key, Error, Mode, Result, Value};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").unwrap();
}

/// Render a template, substituting each `{{path}}` placeholder.
///
/// Placeholders that do not resolve, and placeholders resolving to a
/// container, render as the empty string.
pub fn render(template: &str, doc: &Value, separator: &str) -> Result<String> {
    render_impl(template, doc, separator, false)
}

/// Like [`render`], but a placeholder that does not resolve is an error.
pub fn render_strict(template: &str, doc: &Value, separator: &str) -> Result<String> {
    render_impl(template, doc, separator, true)
}

fn render_impl(template: &str, doc: &Value, separator: &str, strict: bool) -> Result<String> {
    if separator.is_empty() {
        return Err(Error::invalid_argument(
            "Separator must be a non-empty string.",
        ));
    }

    let mut out = String::with_capacity(template.len());
    let mut tail = 0;
    for captures in PLACEHOLDER.captures_iter(template) {
        let whole = captures.get(0).expect("capture 0 is the whole match");
        let key = captures
            .get(1)
            .expect("placeholder pattern has one group")
            .as_str();

        out.push_str(&template[tail..whole.start()]);
        match lookup(doc, key, separator) {
            Some(value) => out.push_str(&scalar_text(value)),
            None if strict => {
                return Err(Error::invalid_argument(format!(
                    "Placeholder '{key}' could not be resolved."
                )));
            }
            None => {}
        }
        tail = whole.end();
    }
    out.push_str(&template[tail..]);
    Ok(out)
}

fn lookup<'a>(doc: &'a Value, key: &str, separator: &str) -> Option<&'a Value> {
    if key.is_empty() {
        return None;
    }
    let adapter = Mode::Mapping.adapter();
    let segments = split_key(key, separator);
    let (last, parents) = segments.split_last()?;
    let mut current = doc;
    for segment in parents {
        match adapter.get(current, segment) {
            Some(held) if adapter.is_container(held) => current = held,
            _ => return None,
        }
    }
    adapter.get(current, last)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => s.clone(),
        // Containers and arrays have no text form here.
        Value::Array(_) | Value::Map(_) | Value::Record(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpath_json::to_value;
    use serde_json::json;

    fn doc() -> Value {
        to_value(json!({
            "user": {"name": "Alice", "age": 30},
            "active": true,
        }))
    }

    #[test]
    fn substitutes_nested_paths() {
        let out = render("{{user.name}} is {{user.age}}", &doc(), ".").unwrap();
        assert_eq!(out, "Alice is 30");
    }

    #[test]
    fn whitespace_inside_braces_is_tolerated() {
        let out = render("hi {{ user.name }}!", &doc(), ".").unwrap();
        assert_eq!(out, "hi Alice!");
    }

    #[test]
    fn unresolved_placeholder_renders_empty() {
        let out = render("[{{missing.path}}]", &doc(), ".").unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn strict_mode_errors_on_unresolved() {
        let err = render_strict("{{missing}}", &doc(), ".").unwrap_err();
        assert!(err
            .to_string()
            .contains("Placeholder 'missing' could not be resolved."));
    }

    #[test]
    fn container_values_render_empty() {
        let out = render("[{{user}}]", &doc(), ".").unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn text_without_placeholders_passes_through() {
        let out = render("no substitutions here", &doc(), ".").unwrap();
        assert_eq!(out, "no substitutions here");
    }

    #[test]
    fn booleans_and_null_have_text_forms() {
        let doc = to_value(json!({"a": true, "b": null}));
        assert_eq!(render("{{a}}/{{b}}", &doc, ".").unwrap(), "true/");
    }

    #[test]
    fn custom_separator() {
        let out = render("{{user/name}}", &doc(), "/").unwrap();
        assert_eq!(out, "Alice");
    }

    #[test]
    fn empty_separator_rejected() {
        assert!(render("{{a}}", &doc(), "").is_err());
    }
}
