//! Flow validation: structural and content rules over a node/edge graph.
//!
//! Pure and stateless: every call operates only on the node/edge slices
//! passed in and allocates a fresh diagnostic list, so the editor can safely
//! re-run it on every graph change.

pub mod reachability;
pub mod rules;

use crate::error::{Diagnostic, Severity};
use crate::flow::{FlowEdge, FlowNode};

/// Outcome of validating a flow: an overall verdict plus the ordered
/// diagnostics that produced it.
///
/// `is_valid` is true iff no diagnostic has `Severity::Error`; warnings
/// never block saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let is_valid = !diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error);
        ValidationResult {
            is_valid,
            diagnostics,
        }
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}

/// Validate a chatbot flow. Rules run in a fixed order and all diagnostics
/// are collected in one pass so the user sees the full set at once:
///
/// 1. an empty flow is invalid outright;
/// 2. a single node is always a valid (if minimal) flow;
/// 3. the flow must have at least one starting node;
/// 4. blank-message nodes get an advisory warning each;
/// 5. every node must be reachable from some starting node (skipped when
///    rule 3 found no start to search from).
pub fn validate_flow(nodes: &[FlowNode], edges: &[FlowEdge]) -> ValidationResult {
    let mut diagnostics = Vec::new();

    if nodes.is_empty() {
        diagnostics.push(Diagnostic::error("Flow must contain at least one node", None));
        return ValidationResult::from_diagnostics(diagnostics);
    }

    if nodes.len() == 1 {
        return ValidationResult::from_diagnostics(diagnostics);
    }

    let starts = rules::starting_nodes(nodes, edges);
    rules::check_has_starting_node(&starts, &mut diagnostics);
    rules::check_message_content(nodes, &mut diagnostics);
    if !starts.is_empty() {
        rules::check_reachability(nodes, edges, &starts, &mut diagnostics);
    }

    ValidationResult::from_diagnostics(diagnostics)
}

/// Whether the flow may be saved. Convenience wrapper over [`validate_flow`]
/// for callers that only gate the save action and don't render diagnostics.
pub fn can_save_flow(nodes: &[FlowNode], edges: &[FlowEdge]) -> bool {
    validate_flow(nodes, edges).is_valid
}
