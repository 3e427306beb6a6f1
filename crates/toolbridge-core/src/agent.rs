//! Agent construction
//!
//! Builds a rig agent from a model identifier, a name, a free-text
//! instruction and the tools discovered from an MCP server. No logic beyond
//! field assignment and tool registration.

use rig::{client::CompletionClient, providers::gemini};

use crate::config::AppConfig;
use crate::provider::ToolProvider;

/// Agent over the Gemini completion model
pub type GeminiAgent = rig::agent::Agent<gemini::completion::CompletionModel>;

/// Declarative description of an agent
#[derive(Debug, Clone)]
pub struct AgentSpec {
    /// Agent name, used as part of console output and session app naming
    pub name: String,
    /// Per-agent model override; falls back to the configured model
    pub model: Option<String>,
    /// Natural-language instruction (system preamble)
    pub instruction: String,
}

impl AgentSpec {
    pub fn new(name: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: None,
            instruction: instruction.into(),
        }
    }
}

/// Model for this agent: spec override first, configured model otherwise.
pub fn resolve_model<'a>(config: &'a AppConfig, spec: &'a AgentSpec) -> &'a str {
    spec.model.as_deref().unwrap_or(&config.model)
}

/// Build a Gemini agent carrying exactly the tools the provider advertised.
pub fn build_agent(config: &AppConfig, spec: &AgentSpec, provider: &ToolProvider) -> GeminiAgent {
    let client = gemini::Client::new(&config.google_api_key);
    let builder = client
        .agent(resolve_model(config, spec))
        .preamble(&spec.instruction);

    let sink = provider.sink();
    let mut tools = provider.tools().iter();

    // Registering the first tool changes the builder type in rig-core, so
    // seed the fold with it instead of reassigning in a loop.
    match tools.next() {
        None => builder.build(),
        Some(first) => tools
            .fold(builder.rmcp_tool(first.clone(), sink.clone()), |b, tool| {
                b.rmcp_tools(vec![tool.clone()], sink.clone())
            })
            .build(),
    }
}
