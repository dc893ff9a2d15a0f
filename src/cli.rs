//! CLI mode implementation
//!
//! Provides the command-line interface for the templar tools

use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Templar CLI
#[derive(Parser)]
#[command(name = "templar")]
#[command(about = "UI template fuzzy search server and utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Template root directory
    #[arg(long, env = "TEMPLATE_DIR", default_value = "./templates", global = true)]
    pub template_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fuzzy search the template corpus
    Search(SearchArgs),
    /// Show corpus size and configured template root
    Status(StatusArgs),
    /// Serve the search and health endpoints over HTTP
    Serve(ServeArgs),
}

/// Search tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct SearchArgs {
    /// Search terms (case-insensitive)
    #[arg(short = 'q', long)]
    #[schemars(description = "Search terms (case-insensitive)")]
    pub query: String,

    /// Maximum number of results (default 3)
    #[arg(short = 'l', long)]
    #[schemars(description = "Maximum number of results (default 3)")]
    pub limit: Option<usize>,
}

/// Status tool arguments (none)
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct StatusArgs {}

/// Reload tool arguments (none); MCP-only, the CLI reloads at startup anyway
#[derive(JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct ReloadArgs {}

/// HTTP server arguments
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1:3002")]
    pub addr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args() {
        let args = SearchArgs {
            query: "hero section".to_string(),
            limit: Some(10),
        };
        assert_eq!(args.query, "hero section");
        assert_eq!(args.limit, Some(10));
    }

    #[test]
    fn test_cli_parses_search_command() {
        let cli = Cli::parse_from(["templar", "search", "-q", "pricing", "-l", "5"]);
        match cli.command {
            Some(Commands::Search(args)) => {
                assert_eq!(args.query, "pricing");
                assert_eq!(args.limit, Some(5));
            }
            _ => panic!("Expected search command"),
        }
    }

    #[test]
    fn test_cli_template_dir_default() {
        let cli = Cli::parse_from(["templar", "status"]);
        assert_eq!(cli.template_dir, PathBuf::from("./templates"));
    }

    #[test]
    fn test_serve_args_default_addr() {
        let cli = Cli::parse_from(["templar", "serve"]);
        match cli.command {
            Some(Commands::Serve(args)) => assert_eq!(args.addr, "127.0.0.1:3002"),
            _ => panic!("Expected serve command"),
        }
    }
}
