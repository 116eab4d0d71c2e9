// SPDX-License-Identifier: MIT OR Apache-2.0
//! Schema-driven connection handles for egui node editors.
//!
//! A handle is the visual, connectable point on a node representing one
//! input or output field. This crate maps a field's resolved data schema to
//! the handle's visual attributes (color, type annotation, label) and
//! renders it on either side of a node card:
//! - Input handles sit on the left and are targets of incoming edges
//! - Output handles sit on the right and are sources of outgoing edges
//!
//! ## Architecture
//!
//! - [`schema`]: the field schema model and primitive-type classification
//! - [`palette`]: type color tables (pure lookup functions)
//! - [`label`]: key beautification and label composition
//! - [`anchor`]: anchor ids, edge-endpoint roles, and the per-frame registry
//! - [`handle`]: the widget tying it together
//!
//! The hosting editor owns node layout, edge routing, and connection
//! mutation; a handle only registers a stable anchor per render and reports
//! the marker's interaction response.

pub mod anchor;
pub mod handle;
pub mod label;
pub mod palette;
pub mod schema;

pub use anchor::{AnchorId, AnchorPin, AnchorRegistry, AnchorRole, HandleSide, NodeId};
pub use handle::{Handle, HandleResponse, HandleStyle};
pub use label::{beautify_key, HandleLabel};
pub use schema::{FieldSchema, SchemaError, SchemaType};
