//! templar MCP Server & CLI (Rust)
//!
//! Dual-mode application:
//! - MCP Server Mode (default): Model Context Protocol server using stdio
//! - CLI Mode: Command-line utility for direct tool execution
//!
//! Implements three tools over an in-memory UI template corpus:
//! - `search(query, limit)` - Fuzzy-ranked template lookup
//! - `status()` - Corpus size and configured template root
//! - `reload()` - Rebuild the corpus from disk

mod cli;
mod error;
mod http;
mod mcp;
mod search;
mod templates;
mod tools;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Detect mode: CLI if args present, MCP server otherwise
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        // CLI mode - parse arguments and execute
        run_cli_mode().await
    } else {
        // MCP server mode - default behavior
        run_mcp_mode().await
    }
}

/// Run in CLI mode
async fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    // The corpus is loaded once per invocation, before any command runs
    templates::initialize(cli.template_dir.clone());

    // Execute command
    let result = match cli.command {
        Some(Commands::Search(args)) => execute_search_cli(args).await,
        Some(Commands::Status(args)) => execute_status_cli(args).await,
        Some(Commands::Serve(args)) => execute_serve_cli(args).await,
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    // Handle result and exit with appropriate code
    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Execute search command in CLI mode
async fn execute_search_cli(args: cli::SearchArgs) -> Result<String> {
    match tools::search::execute_search(args).await {
        Ok(tool_result) => Ok(tool_result
            .content
            .first()
            .map(|c| c.text.clone())
            .unwrap_or_default()),
        Err(e) => Err(anyhow::anyhow!(e.message())),
    }
}

/// Execute status command in CLI mode
async fn execute_status_cli(args: cli::StatusArgs) -> Result<String> {
    match tools::status::execute_status(args).await {
        Ok(tool_result) => Ok(tool_result
            .content
            .first()
            .map(|c| c.text.clone())
            .unwrap_or_default()),
        Err(e) => Err(anyhow::anyhow!(e.message())),
    }
}

/// Execute serve command in CLI mode
async fn execute_serve_cli(args: cli::ServeArgs) -> Result<String> {
    http::serve(&args.addr).await?;
    Ok("HTTP server stopped".to_string())
}

/// Map error text to exit code
fn get_exit_code(err: &anyhow::Error) -> i32 {
    let err_str = err.to_string().to_lowercase();

    if err_str.contains("invalid") || err_str.contains("usage") {
        1 // Invalid arguments or usage error
    } else if err_str.contains("load") {
        2 // Corpus load error
    } else if err_str.contains("search") {
        3 // Search error
    } else {
        4 // Other application errors
    }
}

/// Run in MCP server mode
async fn run_mcp_mode() -> Result<()> {
    // Log to stderr; stdout carries the JSON-RPC stream
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    info!("Starting templar MCP Server");

    let root = std::env::var("TEMPLATE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(templates::DEFAULT_TEMPLATE_DIR));
    templates::initialize(root);

    // Handle stdio MCP communication
    mcp::handle_stdio().await?;

    Ok(())
}
