//! Run events streamed to the caller

use serde::Serialize;
use serde_json::Value;

/// Event emitted while a message runs through the agent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum RunEvent {
    // LLM streaming
    TextDelta {
        content: String,
    },
    // Tool dispatch (executed inside the framework; reported verbatim)
    ToolCall {
        name: String,
        arguments: Value,
    },
    // Terminal events: exactly one of these ends the stream
    Completed {
        response: String,
    },
    Failed {
        error: String,
    },
}

impl RunEvent {
    /// Whether this event ends the run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunEvent::Completed { .. } | RunEvent::Failed { .. })
    }
}
