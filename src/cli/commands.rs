use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use http::Method;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use super::demo::demo_router;
use crate::dispatcher::Request;
use crate::ids::RequestId;
use crate::logging::{init_logging_with_config, LogConfig};
use crate::runtime_config::RouterConfig;

/// Command-line interface for radixmux
#[derive(Parser, Debug)]
#[command(name = "radixmux")]
#[command(about = "Inspect and exercise a radix-tree HTTP router", long_about = None)]
pub struct Cli {
    /// YAML router configuration (defaults come from RADIXMUX_* variables)
    #[arg(long, global = true, env = "RADIXMUX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit structured logs while running
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every route of the demo API
    Routes,
    /// Dispatch one request through the demo API
    Resolve {
        /// HTTP method (extension methods are accepted)
        method: String,

        /// Request path, optionally with a query string
        path: String,

        /// Request header as `name: value` (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
    },
}

/// Parse the process arguments and run the selected command against stdout
///
/// # Errors
///
/// Fails on an unreadable configuration, an invalid method or header, or
/// an I/O error while writing output.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let _guard = if cli.verbose {
        init_logging_with_config(&LogConfig::from_env())?
    } else {
        None
    };
    let stdout = std::io::stdout();
    execute(&cli, &mut stdout.lock())
}

/// Run `cli` writing all output to `out`
///
/// # Errors
///
/// See [`run_cli`].
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RouterConfig::load(path)?,
        None => RouterConfig::from_env(),
    };
    let router = demo_router(&config).context("Failed to build demo router")?;
    debug!(route_count = router.route_count(), "Demo router ready");

    match &cli.command {
        Commands::Routes => {
            for route in router.routes() {
                writeln!(out, "{route}")?;
            }
        }
        Commands::Resolve {
            method,
            path,
            headers,
        } => {
            let method = Method::from_bytes(method.to_uppercase().as_bytes())
                .with_context(|| format!("Invalid HTTP method: {method}"))?;
            let mut req = Request::new(method, path);
            for header in headers {
                let (name, value) = header
                    .split_once(':')
                    .with_context(|| format!("Header must look like 'name: value': {header}"))?;
                req = req.with_header(name.trim(), value.trim());
            }
            let request_id = RequestId::from_header_or_new(req.get_header("x-request-id"));
            req = req.with_request_id(request_id);

            let res = router.handle(&mut req);
            writeln!(out, "request_id: {}", req.request_id)?;
            writeln!(out, "status: {}", res.status)?;
            for (name, value) in req.params().iter() {
                writeln!(out, "param {name} = {value}")?;
            }
            for (name, value) in res.headers.iter() {
                writeln!(out, "header {name}: {value}")?;
            }
            writeln!(out, "body: {}", String::from_utf8_lossy(&res.body))?;
        }
    }
    Ok(())
}
