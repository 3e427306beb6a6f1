mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;
use toolbridge_core::{
    AppConfig, InMemorySessionService, Preset, RunEvent, Runner, ToolProvider, UserMessage,
    build_agent, presets,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    // Environment preconditions are checked here, before any subprocess
    // is spawned.
    let config = AppConfig::from_env()?;

    let (preset, query, app_name, user_id) = match cli.command {
        Commands::Flights { query } => (
            presets::flight_search(&config)?,
            query,
            "flight_search_app",
            "user_flights",
        ),
        Commands::Markdown { query } => (
            presets::markdown(&config)?,
            query,
            "markitdown_app",
            "user_markdown",
        ),
    };

    run_scenario(&config, preset, query, app_name, user_id).await
}

/// One full exchange: spawn the tool server, build the agent, run the
/// query, print events, tear the connection down.
async fn run_scenario(
    config: &AppConfig,
    preset: Preset,
    query: Option<String>,
    app_name: &str,
    user_id: &str,
) -> Result<()> {
    println!(
        "Connecting to MCP tool server: {}",
        preset.server.command.cyan()
    );
    let provider = ToolProvider::spawn(&preset.server).await?;
    println!("Fetched {} tools from the MCP server.", provider.tools().len());

    let agent = build_agent(config, &preset.agent, &provider);

    let sessions = Arc::new(InMemorySessionService::new());
    let session = sessions.create_session(app_name, user_id);
    let runner = Runner::new(app_name, agent, sessions);

    let query = query.unwrap_or_else(|| preset.default_query.to_string());
    println!("User query: '{}'", query);
    println!("{}", "Running agent...".bold());

    let mut events = runner.run(&session.id, UserMessage::new(query))?;

    let mut run_error = None;
    while let Some(event) = events.recv().await {
        print_event(&event);
        if let RunEvent::Failed { error } = &event {
            run_error = Some(error.clone());
        }
    }

    // Teardown runs on both the success and failure path.
    println!("Closing MCP server connection...");
    provider.close().await?;
    println!("Cleanup complete.");

    match run_error {
        Some(error) => Err(anyhow::anyhow!("agent run failed: {error}")),
        None => Ok(()),
    }
}

fn print_event(event: &RunEvent) {
    match event {
        RunEvent::TextDelta { content } => {
            print!("{content}");
            let _ = std::io::stdout().flush();
        }
        RunEvent::ToolCall { name, arguments } => {
            println!("\n{} {} {}", "[tool]".yellow(), name.bold(), arguments);
        }
        RunEvent::Completed { .. } => {
            println!("\n{}", "[done]".green());
        }
        RunEvent::Failed { error } => {
            println!("\n{} {}", "[error]".red(), error);
        }
    }
}
