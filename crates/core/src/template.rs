//! Placeholder substitution for editor-element templates

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("Invalid regex"));

/// Replace `{{field}}` placeholders with values from a JSON object
///
/// Unknown or null fields render as empty strings; non-string scalars use
/// their JSON display form.
pub fn render_placeholders(template: &str, values: &Value) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            match values.get(&caps[1]) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_placeholders() {
        let html = render_placeholders(
            r#"<h1 style="color: {{color}};">{{text}}</h1>"#,
            &json!({"text": "Welcome", "color": "#ff0000"}),
        );
        assert_eq!(html, r#"<h1 style="color: #ff0000;">Welcome</h1>"#);
    }

    #[test]
    fn test_unknown_placeholder_renders_empty() {
        let html = render_placeholders("<p>{{missing}}</p>", &json!({}));
        assert_eq!(html, "<p></p>");
    }

    #[test]
    fn test_numeric_value_uses_json_form() {
        let html = render_placeholders("{{count}} items", &json!({"count": 3}));
        assert_eq!(html, "3 items");
    }
}
