//! Diagnostic types shared by all validation rules.

use thiserror::Error;

/// How severe a diagnostic is. Only `Error` blocks saving a flow;
/// `Warning` is advisory and never gates the save action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation finding, optionally attributable to one node so the
/// editor can highlight it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub node_id: Option<String>,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(f, "[{}] {} (node '{}')", self.severity, self.message, id),
            None => write!(f, "[{}] {}", self.severity, self.message),
        }
    }
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, node_id: Option<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            node_id,
        }
    }

    pub fn warning(message: impl Into<String>, node_id: Option<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            node_id,
        }
    }
}

/// Failure to deserialize a flow JSON payload. The only fallible boundary in
/// the crate; validation itself reports through [`Diagnostic`] values.
#[derive(Debug, Error)]
pub enum FlowParseError {
    #[error("Failed to parse flow JSON: {0}")]
    Json(#[from] serde_json::Error),
}
