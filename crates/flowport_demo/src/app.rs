// SPDX-License-Identifier: MIT OR Apache-2.0
//! Demo application: hand-painted node cards hosting flowport handles.

use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use flowport_handle::{
    palette, AnchorId, AnchorRegistry, FieldSchema, Handle, HandleSide, NodeId, SchemaType,
};
use serde_json::json;
use std::collections::HashSet;

/// Card visual dimensions
const CARD_WIDTH: f32 = 240.0;
const CARD_HEADER_HEIGHT: f32 = 26.0;
const CARD_ROUNDING: f32 = 6.0;
const CARD_SHADOW_OFFSET: f32 = 3.0;
const ROW_HEIGHT: f32 = 22.0;
const BODY_PADDING: f32 = 6.0;

/// Edge visual parameters
const BEZIER_CURVATURE: f32 = 50.0;
const EDGE_THICKNESS: f32 = 2.5;

/// The field the demo edge runs between (source output to sink input).
const EDGE_KEY: &str = "reading";

/// One demo node card: a contract of fields rendered as handles on one side.
struct DemoNode {
    id: NodeId,
    title: &'static str,
    side: HandleSide,
    origin: Pos2,
    contract: FieldSchema,
    connected: HashSet<String>,
}

impl DemoNode {
    fn new(title: &'static str, side: HandleSide, origin: Pos2, contract: serde_json::Value) -> Self {
        let contract =
            FieldSchema::from_value(contract).expect("demo contract is a valid field schema");
        Self {
            id: NodeId::new(),
            title,
            side,
            origin,
            contract,
            connected: HashSet::new(),
        }
    }

    fn card_rect(&self) -> Rect {
        let height = CARD_HEADER_HEIGHT
            + self.contract.properties.len() as f32 * ROW_HEIGHT
            + BODY_PADDING * 2.0;
        Rect::from_min_size(self.origin, Vec2::new(CARD_WIDTH, height))
    }

    fn show(&mut self, ui: &mut egui::Ui, registry: &mut AnchorRegistry) {
        let rect = self.card_rect();
        let painter = ui.painter();

        // Shadow, body, header band
        painter.rect_filled(
            rect.translate(Vec2::splat(CARD_SHADOW_OFFSET)),
            CARD_ROUNDING,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.rect_filled(rect, CARD_ROUNDING, Color32::from_rgb(45, 45, 48));
        let header_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), CARD_HEADER_HEIGHT));
        painter.rect_filled(
            header_rect,
            egui::Rounding {
                nw: CARD_ROUNDING,
                ne: CARD_ROUNDING,
                sw: 0.0,
                se: 0.0,
            },
            Color32::from_rgb(70, 100, 130),
        );
        painter.text(
            header_rect.center(),
            egui::Align2::CENTER_CENTER,
            self.title,
            egui::FontId::proportional(13.0),
            Color32::WHITE,
        );

        let body_rect = Rect::from_min_max(
            Pos2::new(rect.left(), rect.top() + CARD_HEADER_HEIGHT + BODY_PADDING),
            Pos2::new(rect.right(), rect.bottom() - BODY_PADDING),
        );

        let mut toggled = Vec::new();
        ui.allocate_new_ui(egui::UiBuilder::new().max_rect(body_rect), |ui| {
            for (key, schema) in &self.contract.properties {
                let handle = match self.side {
                    HandleSide::Input => Handle::input(self.id, key, schema),
                    HandleSide::Output => Handle::output(self.id, key, schema),
                };
                let response = handle
                    .connected(self.connected.contains(key))
                    .required(self.contract.is_required(key))
                    .show(ui, registry);
                if response.response.clicked() {
                    toggled.push(key.clone());
                }
            }
        });

        for key in toggled {
            if !self.connected.remove(&key) {
                tracing::debug!(node = self.title, key = %key, "handle connected");
                self.connected.insert(key);
            } else {
                tracing::debug!(node = self.title, key = %key, "handle disconnected");
            }
        }
    }
}

/// The demo eframe application.
pub struct DemoApp {
    registry: AnchorRegistry,
    source: DemoNode,
    sink: DemoNode,
}

impl DemoApp {
    /// Build the two demo cards and an empty registry.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let source = DemoNode::new(
            "Sensor",
            HandleSide::Output,
            Pos2::new(80.0, 120.0),
            json!({
                "type": "object",
                "properties": {
                    "reading": {"type": "number", "title": "Reading"},
                    "unit": {"type": "string"},
                    "raw_frame": {"type": "unknown_tag"},
                },
            }),
        );
        let sink = DemoNode::new(
            "Alarm",
            HandleSide::Input,
            Pos2::new(520.0, 160.0),
            json!({
                "type": "object",
                "required": ["reading"],
                "properties": {
                    "reading": {
                        "type": "number",
                        "description": "Current sensor reading to compare against the threshold",
                    },
                    "threshold": {"type": "number"},
                    "armed": {"type": "boolean"},
                    "note": {"type": "string", "description": "Free-text note attached to alerts"},
                },
            }),
        );

        Self {
            registry: AnchorRegistry::new(),
            source,
            sink,
        }
    }

    fn draw_edge(&self, painter: &egui::Painter) {
        if !self.source.connected.contains(EDGE_KEY) || !self.sink.connected.contains(EDGE_KEY) {
            return;
        }
        let from = self
            .registry
            .resolve(&AnchorId::new(self.source.id, HandleSide::Output, EDGE_KEY));
        let to = self
            .registry
            .resolve(&AnchorId::new(self.sink.id, HandleSide::Input, EDGE_KEY));
        let (Some(from), Some(to)) = (from, to) else {
            return;
        };

        let kind = self
            .source
            .contract
            .field(EDGE_KEY)
            .map_or(SchemaType::Any, FieldSchema::kind);
        let color = palette::type_fill_color(kind);
        draw_bezier_edge(painter, from.pos, to.pos, color);
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.registry.begin_frame();
            self.source.show(ui, &mut self.registry);
            self.sink.show(ui, &mut self.registry);
            self.draw_edge(ui.painter());

            ui.painter().text(
                ui.max_rect().left_bottom() - Vec2::new(0.0, 8.0),
                egui::Align2::LEFT_BOTTOM,
                "Click a marker to toggle its connection; connect both \"reading\" markers to draw the edge.",
                egui::FontId::proportional(11.0),
                Color32::from_gray(150),
            );
        });
    }
}

fn draw_bezier_edge(painter: &egui::Painter, from: Pos2, to: Pos2, color: Color32) {
    let distance = (to.x - from.x).abs();
    let curvature = BEZIER_CURVATURE.min(distance * 0.5);

    let ctrl1 = Pos2::new(from.x + curvature, from.y);
    let ctrl2 = Pos2::new(to.x - curvature, to.y);

    let points = bezier_points(from, ctrl1, ctrl2, to, 32);
    for segment in points.windows(2) {
        painter.line_segment([segment[0], segment[1]], Stroke::new(EDGE_THICKNESS, color));
    }
}

/// Generate points along a cubic bezier curve
fn bezier_points(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, segments: usize) -> Vec<Pos2> {
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t3 * p3.x;
        let y = mt3 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t3 * p3.y;

        points.push(Pos2::new(x, y));
    }
    points
}
