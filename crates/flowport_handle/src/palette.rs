// SPDX-License-Identifier: MIT OR Apache-2.0
//! Type color tables for handle styling.
//!
//! Pure lookup functions over [`SchemaType`]: one semantic color per
//! recognized tag, one shared fallback for everything else. Text colors are
//! brighter for legibility against the node card; fill colors are the
//! saturated marker fills shown while connected.

use crate::schema::SchemaType;
use egui::Color32;

/// Outline color of an unconnected marker.
pub const NEUTRAL_OUTLINE: Color32 = Color32::from_gray(120);

/// Fill color of an unconnected marker while its handle row is hovered.
pub const HOVER_FILL: Color32 = Color32::from_gray(180);

/// Label text color (the primary label, not the type annotation).
pub const LABEL_TEXT: Color32 = Color32::from_gray(210);

/// Text color for a type's annotation in the handle label.
pub fn type_text_color(kind: SchemaType) -> Color32 {
    match kind {
        SchemaType::String => Color32::from_rgb(140, 220, 140),
        SchemaType::Number => Color32::from_rgb(120, 190, 240),
        SchemaType::Boolean => Color32::from_rgb(230, 140, 140),
        SchemaType::Object => Color32::from_rgb(240, 190, 120),
        SchemaType::Array => Color32::from_rgb(190, 150, 240),
        SchemaType::Null => Color32::from_gray(150),
        SchemaType::Any => Color32::from_gray(170),
    }
}

/// Fill color for a connected marker of the given type.
pub fn type_fill_color(kind: SchemaType) -> Color32 {
    match kind {
        SchemaType::String => Color32::from_rgb(80, 200, 80),
        SchemaType::Number => Color32::from_rgb(80, 160, 220),
        SchemaType::Boolean => Color32::from_rgb(200, 80, 80),
        SchemaType::Object => Color32::from_rgb(220, 150, 60),
        SchemaType::Array => Color32::from_rgb(160, 100, 220),
        SchemaType::Null => Color32::from_gray(110),
        SchemaType::Any => Color32::from_gray(150),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_types_have_distinct_fills() {
        let fills = [
            type_fill_color(SchemaType::String),
            type_fill_color(SchemaType::Number),
            type_fill_color(SchemaType::Boolean),
            type_fill_color(SchemaType::Object),
            type_fill_color(SchemaType::Array),
            type_fill_color(SchemaType::Null),
        ];
        for (i, a) in fills.iter().enumerate() {
            for b in &fills[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unrecognized_tag_uses_fallback_colors() {
        let kind = SchemaType::from_tag(Some("unknown_tag"));
        assert_eq!(type_fill_color(kind), type_fill_color(SchemaType::Any));
        assert_eq!(type_text_color(kind), type_text_color(SchemaType::Any));
    }
}
