use validator::flow::{FlowEdge, FlowNode, NodeData, Position};

// =============================================================================
// Flow builders
// =============================================================================

/// A text node at the origin with the given id and message.
pub fn node(id: &str, message: &str) -> FlowNode {
    FlowNode {
        id: id.into(),
        node_type: Some("textNode".into()),
        position: Position { x: 0.0, y: 0.0 },
        data: NodeData {
            message: message.into(),
        },
    }
}

pub fn edge(source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        id: Some(format!("e{}-{}", source, target)),
        source: source.into(),
        target: target.into(),
    }
}
