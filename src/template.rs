//! Mustache-style placeholder substitution
//!
//! Supports only what the bundled templates need: `{{name}}` variables,
//! their unescaped spellings `{{{name}}}` and `{{& name}}`, and `{{! comments }}`.
//! Rendering is a single pass; substituted values are never rescanned.
//! Variables missing from the view render as empty strings.
//!
//! `{{name}}` values go through the template's `Escape` mode; the
//! unescaped spellings always insert the value as-is.

use crate::models::TemplateView;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// How `{{name}}` values are encoded on insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escape {
    /// Insert values unchanged
    #[default]
    None,
    /// Encode values as JSON string content (quotes, backslashes, control characters)
    Json,
}

impl Escape {
    fn apply(self, value: &str, out: &mut String) {
        match self {
            Escape::None => out.push_str(value),
            Escape::Json => {
                let quoted = serde_json::Value::String(value.to_string()).to_string();
                out.push_str(&quoted[1..quoted.len() - 1]);
            }
        }
    }
}

/// Render `template` against `view`, inserting values unchanged.
pub fn render(template: &str, view: &TemplateView) -> String {
    render_escaped(template, view, Escape::None)
}

/// Render `template` against `view`, encoding `{{name}}` values with `escape`.
pub fn render_escaped(template: &str, view: &TemplateView, escape: Escape) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some((tag, consumed)) = parse_tag(after_open) else {
            // Unterminated tag: emit the remainder untouched.
            out.push_str(&rest[start..]);
            return out;
        };

        match tag {
            Tag::Variable { name, raw } => {
                if let Some(value) = view.get(name) {
                    if raw {
                        out.push_str(value);
                    } else {
                        escape.apply(value, &mut out);
                    }
                }
            }
            Tag::Comment => {}
        }

        rest = &after_open[consumed..];
    }

    out.push_str(rest);
    out
}

enum Tag<'a> {
    Variable { name: &'a str, raw: bool },
    Comment,
}

/// Parse the tag body following `{{`. Returns the tag and the number of
/// bytes consumed, including the closing delimiter.
fn parse_tag(input: &str) -> Option<(Tag<'_>, usize)> {
    if let Some(body) = input.strip_prefix('{') {
        let end = body.find("}}}")?;
        let name = body[..end].trim();
        return Some((Tag::Variable { name, raw: true }, 1 + end + 3));
    }

    let end = input.find(CLOSE)?;
    let body = input[..end].trim();
    let consumed = end + CLOSE.len();

    let tag = if body.starts_with('!') {
        Tag::Comment
    } else if let Some(name) = body.strip_prefix('&') {
        Tag::Variable {
            name: name.trim(),
            raw: true,
        }
    } else {
        Tag::Variable {
            name: body,
            raw: false,
        }
    };

    Some((tag, consumed))
}
