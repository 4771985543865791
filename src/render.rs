//! Markup rendering: turns a tag name, attributes and inner content into
//! an HTML string. Attribute values are escaped here; inner content is
//! treated as an already-rendered fragment and passed through untouched.

use crate::attrs::{AttrValue, Attrs};

/// Renders tags and anchors from structured attributes.
///
/// Implementations own all attribute escaping. `inner_html` and
/// `label_html` arguments are fragments the caller has already rendered
/// (or escaped via [`MarkupRenderer::escape`]) and are not escaped again.
pub trait MarkupRenderer {
    fn tag(&self, name: &str, attrs: &Attrs, inner_html: &str) -> String;

    fn anchor(&self, label_html: &str, href: &str, attrs: &Attrs) -> String;

    /// Escape plain text for use as fragment content.
    fn escape(&self, text: &str) -> String;
}

/// Default renderer producing plain HTML with `& < > "` escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn push_attrs(out: &mut String, attrs: &Attrs) {
        for (name, value) in attrs.iter() {
            match value {
                AttrValue::Str(s) => {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_html(s)));
                }
                AttrValue::Flag => {
                    out.push(' ');
                    out.push_str(name);
                }
            }
        }
    }
}

impl MarkupRenderer for HtmlRenderer {
    fn tag(&self, name: &str, attrs: &Attrs, inner_html: &str) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(name);
        Self::push_attrs(&mut out, attrs);
        out.push('>');
        out.push_str(inner_html);
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        out
    }

    fn anchor(&self, label_html: &str, href: &str, attrs: &Attrs) -> String {
        let mut out = String::new();
        out.push_str("<a href=\"");
        out.push_str(&escape_html(href));
        out.push('"');
        Self::push_attrs(&mut out, attrs);
        out.push('>');
        out.push_str(label_html);
        out.push_str("</a>");
        out
    }

    fn escape(&self, text: &str) -> String {
        escape_html(text)
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
