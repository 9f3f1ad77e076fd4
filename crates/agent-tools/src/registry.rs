//! Tool registry for managing available tools

use crate::Tool;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// Result of invoking a tool through the registry
///
/// Failures are represented as data: `content` is `{ "error": message }` and
/// `is_error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolOutput {
    /// Payload returned by the tool, or the error object
    pub content: Value,
    /// Whether `content` describes a failure
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolOutput {
    /// Successful output
    pub fn success(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Failure output carrying a user-visible message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: json!({ "error": message.into() }),
            is_error: true,
        }
    }
}

/// Registry for managing tools
///
/// Tools are kept in registration order so listings are stable.
#[derive(Default)]
pub struct ToolRegistry {
    tools: RwLock<Vec<Arc<dyn Tool>>>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool already registered under its name
    pub fn register(&self, tool: Arc<dyn Tool>) {
        let mut tools = self.tools.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = tools.iter_mut().find(|t| t.name() == tool.name()) {
            *slot = tool;
        } else {
            tools.push(tool);
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.iter().find(|t| t.name() == name).cloned()
    }

    /// List all registered tools in registration order
    pub fn list_tools(&self) -> Vec<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.clone()
    }

    /// Definitions (name, description, input schema) of every registered tool
    pub fn definitions(&self) -> Vec<Value> {
        self.list_tools().iter().map(|t| t.definition()).collect()
    }

    /// Invoke a tool by name
    ///
    /// Never fails: unknown tools and tool errors come back as an error
    /// [`ToolOutput`].
    pub async fn invoke(&self, name: &str, params: Value) -> ToolOutput {
        let Some(tool) = self.get(name) else {
            warn!(tool = name, "Unknown tool requested");
            return ToolOutput::error(agent_core::Error::UnknownTool(name.to_string()).to_string());
        };

        debug!(tool = name, "Invoking tool");
        match tool.execute(params).await {
            Ok(content) => ToolOutput::success(content),
            Err(e) => {
                warn!(tool = name, error = %e, "Tool returned an error");
                ToolOutput::error(e.to_string())
            }
        }
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.is_empty()
    }
}
