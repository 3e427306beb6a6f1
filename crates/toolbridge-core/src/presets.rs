//! Built-in agent scenarios
//!
//! Two fixed wirings: a flight-search assistant backed by the
//! `mcp-flight-search` server and a markdown transformation assistant
//! backed by `markitdown-mcp`. Each preset pins the exact subprocess
//! command line and the default query.

use crate::agent::AgentSpec;
use crate::config::{AppConfig, SERP_API_KEY_VAR};
use crate::error::Result;
use crate::provider::ToolServerParams;

/// Query run by the flights scenario when none is given.
pub const FLIGHTS_DEFAULT_QUERY: &str = "Find flights from Atlanta to Las Vegas 2025-05-05";

/// Sample text converted by the markdown scenario when none is given.
pub const MARKDOWN_DEFAULT_QUERY: &str = "Convert this text to Markdown: Release 0.4 ships \
three changes. First, session logs rotate daily. Second, the importer accepts CSV. Third, \
errors now include the failing row number.";

const FLIGHTS_INSTRUCTION: &str = "Help the user search for flights using the available \
tools based on the prompt. If the return date is not specified, use an empty string for \
one-way trips.";

const MARKDOWN_INSTRUCTION: &str = "You are MarkdownMage, a Markdown transformation \
assistant. Transform any user-provided plain text into clear, well-structured, and \
idiomatic Markdown. Use appropriate headings, lists, links, code blocks, and other \
Markdown elements. Ensure the output is concise, readable, and follows best practices \
for Markdown syntax.";

/// Fully resolved scenario: agent description, tool server command line and
/// the default query
#[derive(Debug, Clone)]
pub struct Preset {
    pub agent: AgentSpec,
    pub server: ToolServerParams,
    pub default_query: &'static str,
}

/// Flight search scenario.
///
/// Requires `SERP_API_KEY`; the error surfaces here, before any subprocess
/// is spawned, with the variable named in the message.
pub fn flight_search(config: &AppConfig) -> Result<Preset> {
    let serp_key = config.require_serp_api_key()?;

    Ok(Preset {
        agent: AgentSpec::new("flight_search_assistant", FLIGHTS_INSTRUCTION),
        server: ToolServerParams::new("mcp-flight-search")
            .arg("--connection_type")
            .arg("stdio")
            .env(SERP_API_KEY_VAR, serp_key),
        default_query: FLIGHTS_DEFAULT_QUERY,
    })
}

/// Markdown transformation scenario. No secondary key, no arguments.
pub fn markdown(_config: &AppConfig) -> Result<Preset> {
    Ok(Preset {
        agent: AgentSpec::new("MarkdownMage", MARKDOWN_INSTRUCTION),
        server: ToolServerParams::new("markitdown-mcp"),
        default_query: MARKDOWN_DEFAULT_QUERY,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    fn config(serp: Option<&str>) -> AppConfig {
        AppConfig {
            google_api_key: "google".to_string(),
            serp_api_key: serp.map(str::to_string),
            model: "gemini-2.5-pro-exp-03-25".to_string(),
        }
    }

    #[test]
    fn flight_preset_pins_command_line_and_forwards_secret() {
        let preset = flight_search(&config(Some("serp-secret"))).unwrap();

        assert_eq!(preset.agent.name, "flight_search_assistant");
        assert_eq!(preset.server.command, "mcp-flight-search");
        assert_eq!(preset.server.args, vec!["--connection_type", "stdio"]);
        assert_eq!(
            preset.server.envs,
            vec![("SERP_API_KEY".to_string(), "serp-secret".to_string())]
        );
        assert_eq!(
            preset.default_query,
            "Find flights from Atlanta to Las Vegas 2025-05-05"
        );
    }

    #[test]
    fn flight_preset_fails_before_spawn_without_serp_key() {
        let err = flight_search(&config(None)).unwrap_err();
        assert!(matches!(err, BridgeError::MissingEnv("SERP_API_KEY")));
    }

    #[test]
    fn markdown_preset_has_no_args_and_no_extra_env() {
        let preset = markdown(&config(None)).unwrap();

        assert_eq!(preset.agent.name, "MarkdownMage");
        assert_eq!(preset.server.command, "markitdown-mcp");
        assert!(preset.server.args.is_empty());
        assert!(preset.server.envs.is_empty());
    }
}
