//! Single-shot execution
//!
//! The runner submits one user message to an agent and forwards framework
//! stream chunks as [`RunEvent`]s over an mpsc channel. The prompt/tool
//! dispatch loop itself lives in rig-core's multi-turn streaming; this
//! module only validates the session, drives the stream and translates
//! chunks.

use futures::StreamExt;
use rig::agent::MultiTurnStreamItem;
use rig::streaming::{StreamedAssistantContent, StreamingPrompt};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::agent::GeminiAgent;
use crate::error::{BridgeError, Result};
use crate::event::RunEvent;
use crate::session::InMemorySessionService;

/// Upper bound on LLM round-trips per message, tool feedback included.
const MAX_TOOL_TURNS: usize = 8;

/// Role-tagged message wrapper
#[derive(Debug, Clone, Serialize)]
pub struct UserMessage {
    pub role: &'static str,
    pub content: String,
}

impl UserMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Runs one message exchange against an agent
pub struct Runner {
    app_name: String,
    agent: Arc<GeminiAgent>,
    sessions: Arc<InMemorySessionService>,
}

impl Runner {
    pub fn new(
        app_name: impl Into<String>,
        agent: GeminiAgent,
        sessions: Arc<InMemorySessionService>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            agent: Arc::new(agent),
            sessions,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Submit one message for the given session.
    ///
    /// The session must exist before the message is sent; otherwise this
    /// fails without touching the agent. Returns the event receiver; the
    /// channel closes after a terminal event.
    pub fn run(&self, session_id: &str, message: UserMessage) -> Result<mpsc::Receiver<RunEvent>> {
        let session = self
            .sessions
            .get(session_id)
            .ok_or_else(|| BridgeError::SessionNotFound(session_id.to_string()))?;

        debug!(
            app_name = %self.app_name,
            session_id = %session.id,
            user_id = %session.user_id,
            "submitting message"
        );

        let (tx, rx) = mpsc::channel(32);
        tokio::spawn(drive(Arc::clone(&self.agent), message, tx));
        Ok(rx)
    }
}

/// Drive the agent stream to exhaustion, translating chunks into events.
async fn drive(agent: Arc<GeminiAgent>, message: UserMessage, tx: mpsc::Sender<RunEvent>) {
    let mut answer = String::new();
    let mut stream = agent
        .stream_prompt(message.content.as_str())
        .multi_turn(MAX_TOOL_TURNS)
        .await;

    while let Some(item) = stream.next().await {
        match item {
            Ok(MultiTurnStreamItem::StreamAssistantItem(content)) => match content {
                StreamedAssistantContent::Text(text) => {
                    answer.push_str(&text.text);
                    if tx
                        .send(RunEvent::TextDelta { content: text.text })
                        .await
                        .is_err()
                    {
                        return;
                    }
                }
                StreamedAssistantContent::ToolCall(call) => {
                    if tx
                        .send(RunEvent::ToolCall {
                            name: call.function.name.clone(),
                            arguments: call.function.arguments.clone(),
                        })
                        .await
                        .is_err()
                    {
                        return;
                    }
                }
                _ => {}
            },
            Ok(MultiTurnStreamItem::FinalResponse(_)) => {
                let _ = tx
                    .send(RunEvent::Completed {
                        response: std::mem::take(&mut answer),
                    })
                    .await;
                return;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "agent stream failed");
                let _ = tx.send(RunEvent::Failed { error: e.to_string() }).await;
                return;
            }
        }
    }

    // Stream ended without a final marker; report what accumulated.
    let _ = tx.send(RunEvent::Completed { response: answer }).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig::client::CompletionClient;
    use rig::providers::gemini;

    fn offline_agent() -> GeminiAgent {
        gemini::Client::new("test-key")
            .agent("gemini-2.5-pro-exp-03-25")
            .preamble("test agent")
            .build()
    }

    #[test]
    fn user_message_is_role_tagged() {
        let message = UserMessage::new("Find flights from Atlanta to Las Vegas 2025-05-05");
        assert_eq!(message.role, "user");
        assert_eq!(
            message.content,
            "Find flights from Atlanta to Las Vegas 2025-05-05"
        );
    }

    #[tokio::test]
    async fn unknown_session_fails_before_reaching_the_agent() {
        let sessions = Arc::new(InMemorySessionService::new());
        let runner = Runner::new("flight_search_app", offline_agent(), sessions);

        let err = runner
            .run("missing-session", UserMessage::new("hello"))
            .unwrap_err();
        assert!(matches!(err, BridgeError::SessionNotFound(_)));
        assert!(err.to_string().contains("missing-session"));
    }

    #[tokio::test]
    async fn events_arrive_in_emission_order_and_channel_closes() {
        let (tx, mut rx) = mpsc::channel::<RunEvent>(8);

        tokio::spawn(async move {
            tx.send(RunEvent::ToolCall {
                name: "search_flights".to_string(),
                arguments: serde_json::json!({"origin": "ATL", "destination": "LAS"}),
            })
            .await
            .unwrap();
            tx.send(RunEvent::TextDelta {
                content: "Found 3 flights".to_string(),
            })
            .await
            .unwrap();
            tx.send(RunEvent::Completed {
                response: "Found 3 flights".to_string(),
            })
            .await
            .unwrap();
        });

        assert!(matches!(
            rx.recv().await.unwrap(),
            RunEvent::ToolCall { .. }
        ));
        assert!(matches!(
            rx.recv().await.unwrap(),
            RunEvent::TextDelta { .. }
        ));
        let last = rx.recv().await.unwrap();
        assert!(last.is_terminal());
        assert!(rx.recv().await.is_none());
    }
}
