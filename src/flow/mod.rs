//! Flow data model: JSON → Rust types.

pub mod types;

pub use types::*;

use crate::error::FlowParseError;

/// Deserialize a flow JSON string into a [`Flow`].
pub fn parse(json: &str) -> Result<Flow, FlowParseError> {
    Ok(serde_json::from_str::<Flow>(json)?)
}
