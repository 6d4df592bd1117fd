//! Gantt MCP Server - Main Entry Point
//!
//! This is the main entry point for the Gantt MCP server application.
//! The actual implementation is in the `gantt_mcp` library.

use anyhow::Result;
use clap::Parser;
use gantt_mcp::GanttServerHandler;
use gantt_mcp::logging;
use gantt_mcp::render::DEFAULT_VIEWPORT_WIDTH;
use mcp_attr::server::serve_stdio;

/// Gantt MCP Server - project tasks on a timeline via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML seed file with the initial projects (read-only)
    file: Option<String>,

    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Visible width of the Gantt track in characters
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    viewport_width: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(&args.log_level)?;

    let handler = GanttServerHandler::new(args.file.as_deref(), args.viewport_width)?;
    log::info!(
        "event=server_ready seed={} viewport_width={}",
        args.file.as_deref().unwrap_or("<none>"),
        args.viewport_width
    );
    serve_stdio(handler).await?;
    Ok(())
}
