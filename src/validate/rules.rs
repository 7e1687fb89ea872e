//! Individual flow validation rules.
//!
//! Each rule appends to the shared diagnostic list; ordering across rules is
//! fixed by the caller in `validate::validate_flow`.

use std::collections::HashSet;

use crate::error::Diagnostic;
use crate::flow::{FlowEdge, FlowNode};
use crate::validate::reachability;

/// Nodes that are not the target of any edge. These are the flow's entry
/// points; several of them at once is legal (the flow is a forest of
/// reachability trees, not a single-rooted tree).
pub fn starting_nodes<'a>(nodes: &'a [FlowNode], edges: &[FlowEdge]) -> Vec<&'a FlowNode> {
    nodes
        .iter()
        .filter(|node| !edges.iter().any(|edge| edge.target == node.id))
        .collect()
}

pub fn check_has_starting_node(starts: &[&FlowNode], diagnostics: &mut Vec<Diagnostic>) {
    if starts.is_empty() {
        diagnostics.push(Diagnostic::error(
            "Flow must have at least one starting node (node without incoming connections)",
            None,
        ));
    }
}

/// One warning per node whose message is blank after trimming. Advisory
/// only; never affects the verdict.
pub fn check_message_content(nodes: &[FlowNode], diagnostics: &mut Vec<Diagnostic>) {
    for node in nodes {
        if node.message().trim().is_empty() {
            diagnostics.push(Diagnostic::warning(
                format!("Node '{}' has no message content", node.id),
                Some(node.id.clone()),
            ));
        }
    }
}

/// One error per node not reachable from any starting node. Only called when
/// at least one starting node exists.
pub fn check_reachability(
    nodes: &[FlowNode],
    edges: &[FlowEdge],
    starts: &[&FlowNode],
    diagnostics: &mut Vec<Diagnostic>,
) {
    let reachable: HashSet<String> =
        reachability::reachable_from(starts.iter().map(|n| n.id.as_str()), edges);

    for node in nodes {
        if !reachable.contains(&node.id) {
            diagnostics.push(Diagnostic::error(
                format!("Node '{}' is not reachable from any starting node", node.id),
                Some(node.id.clone()),
            ));
        }
    }
}
