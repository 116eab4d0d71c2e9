// SPDX-License-Identifier: MIT OR Apache-2.0
//! Anchor identity and the per-frame anchor registry.
//!
//! A handle registers one anchor per render: a stable id, an edge-endpoint
//! role, and the marker's screen position. The hosting engine owns the
//! registry and resolves anchors out of it when routing edges. Nothing here
//! mutates connection state; that belongs to the host's drag-and-drop logic.

use egui::Pos2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node hosting handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which side of the node a handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleSide {
    /// Left side; the handle is a target of incoming edges.
    Input,
    /// Right side; the handle is a source of outgoing edges.
    Output,
}

impl HandleSide {
    /// Edge-endpoint role this side registers with the host.
    pub fn role(&self) -> AnchorRole {
        match self {
            Self::Input => AnchorRole::Target,
            Self::Output => AnchorRole::Source,
        }
    }

    /// Horizontal text alignment of the handle label on this side.
    pub fn align(&self) -> egui::Align {
        match self {
            Self::Input => egui::Align::Min,
            Self::Output => egui::Align::Max,
        }
    }

    /// Sign of the outward horizontal offset (markers protrude past the
    /// node card edge: left handles shift left, right handles shift right).
    pub fn outward_sign(&self) -> f32 {
        match self {
            Self::Input => -1.0,
            Self::Output => 1.0,
        }
    }
}

/// Edge-endpoint role of an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorRole {
    /// Accepts incoming edges (input handles).
    Target,
    /// Originates outgoing edges (output handles).
    Source,
}

/// Stable identifier of one anchor: the field key scoped by node and side.
///
/// The (`node`, `side`, `key`) triple must be unique per frame so the host
/// can route edges to the correct field across re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorId {
    /// Hosting node.
    pub node: NodeId,
    /// Side the handle sits on.
    pub side: HandleSide,
    /// Field key within the node's contract.
    pub key: String,
}

impl AnchorId {
    /// Create an anchor id.
    pub fn new(node: NodeId, side: HandleSide, key: impl Into<String>) -> Self {
        Self {
            node,
            side,
            key: key.into(),
        }
    }
}

/// What the registry stores per anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPin {
    /// Edge-endpoint role.
    pub role: AnchorRole,
    /// Screen position of the marker center.
    pub pos: Pos2,
    /// Frame counter at registration time.
    pub frame: u64,
}

/// Insertion-ordered map of anchor id to registered pin.
///
/// Owned by the hosting engine and passed to each handle per render.
/// Registration is overwrite-idempotent: re-registering the same id on a
/// later frame replaces the pin in place, so repeated renders with identical
/// inputs leave identical contents. Duplicate registration within one frame
/// is an id collision and is reported via `tracing`, never a panic.
#[derive(Debug, Clone, Default)]
pub struct AnchorRegistry {
    pins: IndexMap<AnchorId, AnchorPin>,
    frame: u64,
}

impl AnchorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the frame counter. The host calls this once per render pass,
    /// before any handle is shown.
    pub fn begin_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Register an anchor for the current frame.
    ///
    /// Overwrites any pin already stored under `id`. A second registration
    /// of the same id within one frame, or a role change for an existing id,
    /// warns and keeps the latest pin.
    pub fn register(&mut self, id: AnchorId, role: AnchorRole, pos: Pos2) {
        if let Some(existing) = self.pins.get(&id) {
            if existing.frame == self.frame {
                tracing::warn!(
                    node = %id.node.0,
                    side = ?id.side,
                    key = %id.key,
                    "anchor id registered twice in one frame"
                );
            }
            if existing.role != role {
                tracing::warn!(
                    node = %id.node.0,
                    key = %id.key,
                    old = ?existing.role,
                    new = ?role,
                    "anchor changed role between registrations"
                );
            }
        }
        self.pins.insert(
            id,
            AnchorPin {
                role,
                pos,
                frame: self.frame,
            },
        );
    }

    /// Look up a registered pin, for edge routing.
    pub fn resolve(&self, id: &AnchorId) -> Option<&AnchorPin> {
        self.pins.get(id)
    }

    /// Iterate pins in registration order.
    pub fn pins(&self) -> impl Iterator<Item = (&AnchorId, &AnchorPin)> {
        self.pins.iter()
    }

    /// Number of registered anchors.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Whether no anchor has been registered.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Current frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(node: NodeId, side: HandleSide, key: &str) -> AnchorId {
        AnchorId::new(node, side, key)
    }

    #[test]
    fn test_side_roles() {
        assert_eq!(HandleSide::Input.role(), AnchorRole::Target);
        assert_eq!(HandleSide::Output.role(), AnchorRole::Source);
    }

    #[test]
    fn test_register_and_resolve() {
        let node = NodeId::new();
        let mut registry = AnchorRegistry::new();
        registry.begin_frame();
        registry.register(
            id(node, HandleSide::Input, "user_name"),
            AnchorRole::Target,
            Pos2::new(10.0, 20.0),
        );

        let pin = registry
            .resolve(&id(node, HandleSide::Input, "user_name"))
            .unwrap();
        assert_eq!(pin.role, AnchorRole::Target);
        assert_eq!(pin.pos, Pos2::new(10.0, 20.0));
        assert_eq!(pin.frame, registry.frame());
    }

    #[test]
    fn test_same_key_on_both_sides_is_two_anchors() {
        let node = NodeId::new();
        let mut registry = AnchorRegistry::new();
        registry.begin_frame();
        registry.register(
            id(node, HandleSide::Input, "value"),
            AnchorRole::Target,
            Pos2::ZERO,
        );
        registry.register(
            id(node, HandleSide::Output, "value"),
            AnchorRole::Source,
            Pos2::new(100.0, 0.0),
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_reregistration_across_frames_overwrites_in_place() {
        let node = NodeId::new();
        let mut registry = AnchorRegistry::new();

        registry.begin_frame();
        registry.register(
            id(node, HandleSide::Output, "count"),
            AnchorRole::Source,
            Pos2::new(5.0, 5.0),
        );

        registry.begin_frame();
        registry.register(
            id(node, HandleSide::Output, "count"),
            AnchorRole::Source,
            Pos2::new(5.0, 5.0),
        );

        assert_eq!(registry.len(), 1);
        let pin = registry
            .resolve(&id(node, HandleSide::Output, "count"))
            .unwrap();
        assert_eq!(pin.pos, Pos2::new(5.0, 5.0));
        assert_eq!(pin.frame, 2);
    }

    #[test]
    fn test_same_frame_collision_keeps_one_pin() {
        let node = NodeId::new();
        let mut registry = AnchorRegistry::new();
        registry.begin_frame();
        registry.register(
            id(node, HandleSide::Input, "payload"),
            AnchorRole::Target,
            Pos2::new(1.0, 1.0),
        );
        registry.register(
            id(node, HandleSide::Input, "payload"),
            AnchorRole::Target,
            Pos2::new(2.0, 2.0),
        );

        assert_eq!(registry.len(), 1);
        let pin = registry
            .resolve(&id(node, HandleSide::Input, "payload"))
            .unwrap();
        assert_eq!(pin.pos, Pos2::new(2.0, 2.0));
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let node = NodeId::new();
        let mut registry = AnchorRegistry::new();
        registry.begin_frame();
        for key in ["a", "b", "c"] {
            registry.register(id(node, HandleSide::Input, key), AnchorRole::Target, Pos2::ZERO);
        }
        let keys: Vec<&str> = registry.pins().map(|(id, _)| id.key.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }
}
