//! Rust types mirroring the editor's reactflow state.
//!
//! These types are the serde target for the flow JSON the frontend saves:
//! nodes carry an opaque id, canvas position, and a message payload; edges
//! carry a source and target node id.

use serde::{Deserialize, Serialize};

/// The full flow as the editor persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

/// One message node on the canvas.
///
/// `id` is opaque and assigned by the editor. The message payload is
/// normalized at this boundary: an absent `data.message` deserializes to an
/// empty string, so rule logic never distinguishes missing from blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: Option<String>,
    pub position: Position,
    #[serde(default)]
    pub data: NodeData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(default)]
    pub message: String,
}

/// A directed connection: after `source` sends its message, control passes
/// to `target`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: Option<String>,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl FlowNode {
    pub fn message(&self) -> &str {
        &self.data.message
    }
}
