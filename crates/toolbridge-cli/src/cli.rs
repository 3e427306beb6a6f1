use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "toolbridge")]
#[command(version, about = "ToolBridge - run LLM agents against MCP tool servers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search flights through the mcp-flight-search tool server
    Flights {
        /// Query to send; defaults to the built-in example
        query: Option<String>,
    },

    /// Convert text to Markdown through the markitdown-mcp tool server
    Markdown {
        /// Text to convert; defaults to the built-in example
        query: Option<String>,
    },
}
