// SPDX-License-Identifier: MIT OR Apache-2.0
//! The handle widget: a connectable port on one side of a node card.
//!
//! A handle renders a small circular marker protruding past the card edge,
//! a label inside the card, and registers its anchor with the host's
//! [`AnchorRegistry`] so edges can be routed to it. Rendering is a pure
//! function of the inputs: schema, key, side, connection flag, required
//! flag. The widget never mutates connection state; the returned response
//! covers the marker only and gesture meaning is left to the host.

use crate::anchor::{AnchorId, AnchorRegistry, HandleSide, NodeId};
use crate::label::HandleLabel;
use crate::palette;
use crate::schema::{FieldSchema, SchemaType};
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

/// Handle visual dimensions
const ROW_HEIGHT: f32 = 22.0;
const MARKER_RADIUS: f32 = 6.0;
const MARKER_OUTSET: f32 = 8.0;
const LABEL_PADDING: f32 = 12.0;
const LABEL_FONT_SIZE: f32 = 12.0;
const ANNOTATION_FONT_SIZE: f32 = 10.0;
const OUTLINE_WIDTH: f32 = 1.5;

/// Geometry and neutral colors of a handle, overridable by the host.
///
/// Type-keyed colors come from [`crate::palette`] and are not part of the
/// style; this struct carries only what a host theme would tune.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleStyle {
    /// Height of the handle row inside the card.
    pub row_height: f32,
    /// Radius of the circular marker.
    pub marker_radius: f32,
    /// How far the marker center sits outside the row edge.
    pub marker_outset: f32,
    /// Horizontal gap between the row edge and the label.
    pub label_padding: f32,
    /// Font size of the primary label text.
    pub label_font_size: f32,
    /// Font size of the parenthesized type annotation.
    pub annotation_font_size: f32,
    /// Outline color of an unconnected marker.
    pub neutral_outline: Color32,
    /// Fill color of an unconnected marker while hovered.
    pub hover_fill: Color32,
    /// Stroke width of the unconnected outline.
    pub outline_width: f32,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT,
            marker_radius: MARKER_RADIUS,
            marker_outset: MARKER_OUTSET,
            label_padding: LABEL_PADDING,
            label_font_size: LABEL_FONT_SIZE,
            annotation_font_size: ANNOTATION_FONT_SIZE,
            neutral_outline: palette::NEUTRAL_OUTLINE,
            hover_fill: palette::HOVER_FILL,
            outline_width: OUTLINE_WIDTH,
        }
    }
}

/// Resolved marker appearance for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MarkerVisual {
    fill: Color32,
    stroke: Stroke,
}

/// Select the marker appearance: connected markers fill with the type color;
/// unconnected markers stay a neutral outline that fills on hover.
fn marker_visual(kind: SchemaType, connected: bool, hovered: bool, style: &HandleStyle) -> MarkerVisual {
    if connected {
        MarkerVisual {
            fill: palette::type_fill_color(kind),
            stroke: Stroke::new(1.0, Color32::from_gray(30)),
        }
    } else if hovered {
        MarkerVisual {
            fill: style.hover_fill,
            stroke: Stroke::new(1.0, style.neutral_outline),
        }
    } else {
        MarkerVisual {
            fill: Color32::TRANSPARENT,
            stroke: Stroke::new(style.outline_width, style.neutral_outline),
        }
    }
}

/// What [`Handle::show`] hands back to the host.
pub struct HandleResponse {
    /// Interaction response covering the marker dot only.
    pub response: egui::Response,
    /// The anchor id this handle registered under.
    pub anchor: AnchorId,
    /// Screen position of the marker center, as registered.
    pub pin_pos: Pos2,
}

/// A connection handle for one field of a node's contract.
///
/// Built via [`Handle::input`] or [`Handle::output`]; each constructor fixes
/// the edge-endpoint role, the outward offset direction, the paint order,
/// and whether the description tooltip is shown (input side only).
pub struct Handle<'a> {
    node: NodeId,
    key: &'a str,
    schema: &'a FieldSchema,
    side: HandleSide,
    connected: bool,
    required: bool,
    style: HandleStyle,
}

impl<'a> Handle<'a> {
    fn new(node: NodeId, key: &'a str, schema: &'a FieldSchema, side: HandleSide) -> Self {
        Self {
            node,
            key,
            schema,
            side,
            connected: false,
            required: false,
            style: HandleStyle::default(),
        }
    }

    /// An input handle: left side, target of incoming edges.
    pub fn input(node: NodeId, key: &'a str, schema: &'a FieldSchema) -> Self {
        Self::new(node, key, schema, HandleSide::Input)
    }

    /// An output handle: right side, source of outgoing edges.
    pub fn output(node: NodeId, key: &'a str, schema: &'a FieldSchema) -> Self {
        Self::new(node, key, schema, HandleSide::Output)
    }

    /// Set whether an edge currently terminates at this handle.
    pub fn connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    /// Mark the field as required (appends `*` to the label).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Override the handle style.
    pub fn style(mut self, style: HandleStyle) -> Self {
        self.style = style;
        self
    }

    /// Tooltip text for this handle: the schema description, input side
    /// only. Output handles never show a tooltip, even with a description.
    fn tooltip(&self) -> Option<&str> {
        match self.side {
            HandleSide::Input => self.schema.description(),
            HandleSide::Output => None,
        }
    }

    /// Render the handle row, register its anchor, and return the marker
    /// response.
    pub fn show(self, ui: &mut egui::Ui, registry: &mut AnchorRegistry) -> HandleResponse {
        let style = &self.style;
        let (row_rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), style.row_height),
            Sense::hover(),
        );

        let edge_x = match self.side {
            HandleSide::Input => row_rect.left(),
            HandleSide::Output => row_rect.right(),
        };
        let marker_center = Pos2::new(
            edge_x + self.side.outward_sign() * style.marker_outset,
            row_rect.center().y,
        );
        let marker_rect =
            Rect::from_center_size(marker_center, Vec2::splat(style.marker_radius * 2.0));

        // Only the dot is interactive; the label never intercepts pointer
        // events, so connection drags are delegated cleanly to the host.
        let id = ui.make_persistent_id((self.node, self.side, self.key));
        let mut response = ui.interact(marker_rect, id, Sense::click_and_drag());

        let row_hovered = ui
            .input(|i| i.pointer.hover_pos())
            .is_some_and(|pos| row_rect.contains(pos));
        let hovered = response.hovered() || row_hovered;

        let visual = marker_visual(self.schema.kind(), self.connected, hovered, style);
        let label = HandleLabel::compose(self.key, self.schema, self.required);
        let galley = ui.fonts(|f| f.layout_job(label.layout_job(self.side, style)));
        let label_pos = match self.side {
            HandleSide::Input => Pos2::new(
                row_rect.left() + style.label_padding,
                row_rect.center().y - galley.size().y / 2.0,
            ),
            HandleSide::Output => Pos2::new(
                row_rect.right() - style.label_padding,
                row_rect.center().y - galley.size().y / 2.0,
            ),
        };

        let painter = ui.painter();
        match self.side {
            HandleSide::Input => {
                paint_marker(painter, marker_center, style.marker_radius, visual);
                painter.galley(label_pos, galley, palette::LABEL_TEXT);
            }
            HandleSide::Output => {
                painter.galley(label_pos, galley, palette::LABEL_TEXT);
                paint_marker(painter, marker_center, style.marker_radius, visual);
            }
        }

        if let Some(description) = self.tooltip() {
            response = response.on_hover_text(description.to_owned());
        }

        let anchor = AnchorId::new(self.node, self.side, self.key);
        registry.register(anchor.clone(), self.side.role(), marker_center);

        HandleResponse {
            response,
            anchor,
            pin_pos: marker_center,
        }
    }
}

fn paint_marker(painter: &egui::Painter, center: Pos2, radius: f32, visual: MarkerVisual) {
    if visual.fill != Color32::TRANSPARENT {
        painter.circle_filled(center, radius, visual.fill);
    }
    painter.circle_stroke(center, radius, visual.stroke);
}
