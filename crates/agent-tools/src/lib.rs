//! Tool management and execution framework
//!
//! Tools are named, schema-described operations that an LLM client (or any
//! other caller) can invoke with JSON parameters. The [`ToolRegistry`] owns the
//! conversion from tool errors to `{ "error": ... }` payloads so transports
//! never have to string-match to tell success from failure.

pub mod registry;
pub mod tool;

pub use registry::{ToolOutput, ToolRegistry};
pub use tool::Tool;
