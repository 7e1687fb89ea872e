pub mod error;
pub mod flow;
pub mod validate;
pub mod wasm;
