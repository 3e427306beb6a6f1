//! ToolBridge - glue between rig agents and MCP tool servers
//!
//! This crate provides:
//! - Tool provider bootstrap over stdio MCP (child-process transport)
//! - Agent construction from a model, instruction and discovered tools
//! - Built-in flight-search and markdown scenarios
//! - In-memory sessions and a single-shot streaming runner

pub mod agent;
pub mod config;
pub mod error;
pub mod event;
pub mod presets;
pub mod provider;
pub mod runner;
pub mod session;

// Re-export commonly used types
pub use agent::{AgentSpec, GeminiAgent, build_agent};
pub use config::AppConfig;
pub use error::{BridgeError, Result};
pub use event::RunEvent;
pub use presets::Preset;
pub use provider::{ToolProvider, ToolServerParams};
pub use runner::{Runner, UserMessage};
pub use session::{InMemorySessionService, Session};
