//! Tool trait definition

use agent_core::Result;
use async_trait::async_trait;
use serde_json::{Value, json};

/// Trait for tools that callers can execute
///
/// Each tool must provide a name, description, and JSON schema for its input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// Tool output as JSON value
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    ///
    /// // Schema for a tool taking one enum-constrained argument:
    /// let schema = json!({
    ///     "type": "object",
    ///     "properties": {
    ///         "agent_name": {
    ///             "type": "string",
    ///             "enum": ["grok-4", "gpt-5.1"]
    ///         }
    ///     },
    ///     "required": ["agent_name"]
    /// });
    /// ```
    fn input_schema(&self) -> Value;

    /// Listing entry for this tool: name, description and input schema
    fn definition(&self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        })
    }
}
