//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::{Diagnostic, Severity};
use crate::validate::ValidationResult;

/// Validate a flow JSON payload: parse + rule evaluation.
/// Returns `{ isValid, errors: [{ type, message, nodeId }] }`.
#[wasm_bindgen]
pub fn validate_flow_json(json: &str) -> JsValue {
    let result = validate_flow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Whether the flow described by `json` may be saved. A payload that fails
/// to parse cannot be saved.
#[wasm_bindgen]
pub fn can_save_flow_json(json: &str) -> bool {
    validate_flow_inner(json).is_valid
}

fn validate_flow_inner(json: &str) -> ResultDto {
    let flow = match crate::flow::parse(json) {
        Ok(f) => f,
        Err(e) => {
            return ResultDto {
                is_valid: false,
                errors: vec![DiagnosticDto {
                    severity: "error".into(),
                    message: e.to_string(),
                    node_id: None,
                }],
            };
        }
    };

    ResultDto::from(crate::validate::validate_flow(&flow.nodes, &flow.edges))
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct DiagnosticDto {
    /// "error" | "warning" — matches the frontend's ValidationError shape.
    #[serde(rename = "type")]
    severity: String,
    message: String,
    #[serde(rename = "nodeId")]
    node_id: Option<String>,
}

impl From<Diagnostic> for DiagnosticDto {
    fn from(d: Diagnostic) -> Self {
        DiagnosticDto {
            severity: match d.severity {
                Severity::Error => "error".into(),
                Severity::Warning => "warning".into(),
            },
            message: d.message,
            node_id: d.node_id,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct ResultDto {
    #[serde(rename = "isValid")]
    is_valid: bool,
    errors: Vec<DiagnosticDto>,
}

impl From<ValidationResult> for ResultDto {
    fn from(r: ValidationResult) -> Self {
        ResultDto {
            is_valid: r.is_valid,
            errors: r.diagnostics.into_iter().map(DiagnosticDto::from).collect(),
        }
    }
}
