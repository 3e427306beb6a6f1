//! Tool provider bootstrap
//!
//! Spawns an MCP tool server as a child process over stdio, runs the
//! initialize handshake and discovers the tools it exposes. The provider
//! owns the running client service; dropping or closing it tears the child
//! process connection down.

use rmcp::{
    ServiceExt,
    model::Tool,
    service::{RoleClient, RunningService, ServerSink},
    transport::{ConfigureCommandExt, TokioChildProcess},
};
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{BridgeError, Result};

/// Exact command line and environment for a tool server subprocess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolServerParams {
    pub command: String,
    pub args: Vec<String>,
    /// Extra variables set in the child environment (secrets forwarded to
    /// the tool server)
    pub envs: Vec<(String, String)>,
}

impl ToolServerParams {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

/// A connected MCP tool server and the tools it advertised
#[derive(Debug)]
pub struct ToolProvider {
    service: RunningService<RoleClient, ()>,
    tools: Vec<Tool>,
}

impl ToolProvider {
    /// Spawn the tool server and list its tools.
    ///
    /// Any failure here is fatal for the run: a missing binary, a broken
    /// handshake or a tool listing error all abort with `ToolServer`.
    pub async fn spawn(params: &ToolServerParams) -> Result<Self> {
        info!(command = %params.command, "spawning MCP tool server");

        let transport = TokioChildProcess::new(Command::new(&params.command).configure(|cmd| {
            for arg in &params.args {
                cmd.arg(arg);
            }
            for (key, value) in &params.envs {
                cmd.env(key, value);
            }
        }))
        .map_err(|e| {
            BridgeError::ToolServer(format!("failed to spawn '{}': {}", params.command, e))
        })?;

        let service = ().serve(transport).await.map_err(|e| {
            BridgeError::ToolServer(format!("MCP handshake with '{}' failed: {}", params.command, e))
        })?;

        let listed = service
            .list_tools(Default::default())
            .await
            .map_err(|e| BridgeError::ToolServer(format!("failed to list tools: {}", e)))?;

        debug!(count = listed.tools.len(), "MCP tool listing complete");

        Ok(Self {
            service,
            tools: listed.tools,
        })
    }

    /// Tools advertised by the server during bootstrap.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Clonable handle for issuing tool calls against the server.
    pub fn sink(&self) -> ServerSink {
        self.service.peer().clone()
    }

    /// Shut the client service down, ending the child process connection.
    ///
    /// Consumes the provider, so teardown can only happen once.
    pub async fn close(self) -> Result<()> {
        self.service
            .cancel()
            .await
            .map_err(|e| BridgeError::ToolServer(format!("shutdown failed: {}", e)))?;
        Ok(())
    }
}
