// SPDX-License-Identifier: MIT OR Apache-2.0
//! Label composition: key beautification, title precedence, required marker,
//! and the parenthesized type annotation.

use crate::anchor::HandleSide;
use crate::handle::HandleStyle;
use crate::palette;
use crate::schema::{FieldSchema, SchemaType};
use egui::text::{LayoutJob, TextFormat};
use egui::FontId;

/// Turn an identifier-style key into human-readable words.
///
/// Splits on `_`, `-`, spaces, and camel-case boundaries (acronym runs stay
/// together: `"APIKey"` becomes `"API Key"`), then capitalizes each word.
/// Total over any string; an empty key yields an empty label.
pub fn beautify_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let camel_boundary = c.is_uppercase() && prev.is_lowercase();
            // End of an acronym run: "APIKey" splits before the 'K'.
            let acronym_boundary = c.is_uppercase()
                && prev.is_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if camel_boundary || acronym_boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    let capitalized: Vec<String> = words
        .into_iter()
        .map(|word| {
            let mut cs = word.chars();
            match cs.next() {
                Some(first) => first.to_uppercase().chain(cs).collect(),
                None => word,
            }
        })
        .collect();
    capitalized.join(" ")
}

/// Composed label of one handle: primary text plus type annotation.
///
/// Recomputed per render from the schema, key, and required flag; holds no
/// state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleLabel {
    text: String,
    kind: SchemaType,
}

impl HandleLabel {
    /// Compose the label for a field.
    ///
    /// The explicit schema title wins over the beautified key; a required
    /// field gets a trailing `*` with no separating space.
    pub fn compose(key: &str, schema: &FieldSchema, required: bool) -> Self {
        let mut text = match schema.title() {
            Some(title) => title.to_owned(),
            None => beautify_key(key),
        };
        if required {
            text.push('*');
        }
        Self {
            text,
            kind: schema.kind(),
        }
    }

    /// Primary label text (title or beautified key, `*` appended if required).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parenthesized type annotation, e.g. `"(text)"`.
    pub fn annotation(&self) -> String {
        format!("({})", self.kind.display_name())
    }

    /// Classified type the annotation and colors derive from.
    pub fn kind(&self) -> SchemaType {
        self.kind
    }

    /// Lay the label out as a single text block: primary text, then the
    /// annotation smaller and colored by type, aligned toward the handle's
    /// side.
    pub fn layout_job(&self, side: HandleSide, style: &HandleStyle) -> LayoutJob {
        let mut job = LayoutJob::default();
        job.halign = side.align();
        job.append(
            &self.text,
            0.0,
            TextFormat {
                font_id: FontId::proportional(style.label_font_size),
                color: palette::LABEL_TEXT,
                ..TextFormat::default()
            },
        );
        job.append(
            &self.annotation(),
            4.0,
            TextFormat {
                font_id: FontId::proportional(style.annotation_font_size),
                color: palette::type_text_color(self.kind),
                ..TextFormat::default()
            },
        );
        job
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beautify_snake_case() {
        assert_eq!(beautify_key("user_name"), "User Name");
        assert_eq!(beautify_key("count"), "Count");
    }

    #[test]
    fn test_beautify_kebab_and_spaces() {
        assert_eq!(beautify_key("max-retry-count"), "Max Retry Count");
        assert_eq!(beautify_key("already readable"), "Already Readable");
    }

    #[test]
    fn test_beautify_camel_case_and_acronyms() {
        assert_eq!(beautify_key("userName"), "User Name");
        assert_eq!(beautify_key("APIKey"), "API Key");
        assert_eq!(beautify_key("outputJSON"), "Output JSON");
    }

    #[test]
    fn test_beautify_degenerate_inputs() {
        assert_eq!(beautify_key(""), "");
        assert_eq!(beautify_key("___"), "");
        assert_eq!(beautify_key("x"), "X");
    }

    #[test]
    fn test_title_takes_precedence_over_key() {
        let schema = FieldSchema::new("number").with_title("Count");
        let label = HandleLabel::compose("count", &schema, false);
        assert_eq!(label.text(), "Count");
        assert_eq!(label.annotation(), "(number)");
    }

    #[test]
    fn test_empty_title_falls_back_to_beautified_key() {
        let schema = FieldSchema::new("string").with_title("");
        let label = HandleLabel::compose("user_name", &schema, false);
        assert_eq!(label.text(), "User Name");
    }

    #[test]
    fn test_required_marker_is_appended_without_space() {
        let schema = FieldSchema::new("string");
        let label = HandleLabel::compose("user_name", &schema, true);
        assert_eq!(label.text(), "User Name*");

        let titled = FieldSchema::new("string").with_title("Login");
        let label = HandleLabel::compose("user_name", &titled, true);
        assert_eq!(label.text(), "Login*");
    }

    #[test]
    fn test_no_marker_when_optional() {
        let schema = FieldSchema::new("boolean");
        let label = HandleLabel::compose("enabled", &schema, false);
        assert!(!label.text().contains('*'));
        assert_eq!(label.annotation(), "(true/false)");
    }

    #[test]
    fn test_unknown_type_annotates_as_any() {
        let schema = FieldSchema::new("unknown_tag");
        let label = HandleLabel::compose("payload", &schema, false);
        assert_eq!(label.annotation(), "(any)");
        assert_eq!(label.kind(), SchemaType::Any);
    }

    #[test]
    fn test_compose_is_pure() {
        let schema = FieldSchema::new("string").with_title("Name");
        let a = HandleLabel::compose("name", &schema, true);
        let b = HandleLabel::compose("name", &schema, true);
        assert_eq!(a, b);
    }
}
