//! # CLI Module
//!
//! Command-line front end for inspecting a router without opening a socket.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! Print the route listing of the built-in demo API:
//!
//! ```bash
//! radixmux routes
//! ```
//!
//! ### `resolve`
//!
//! Dispatch a synthetic request through the demo API and print the status,
//! the bound path parameters and the response body:
//!
//! ```bash
//! radixmux resolve GET /api/users/42
//! radixmux resolve DELETE /admin/cache -H "authorization: Bearer demo-token"
//! ```
//!
//! ## Global Options
//!
//! - `--config <FILE>` - load a YAML [`RouterConfig`](crate::runtime_config::RouterConfig)
//!   (also read from `RADIXMUX_CONFIG`)
//! - `--verbose` - install the `tracing` subscriber configured by the
//!   `RADIXMUX_LOG_*` variables

mod commands;
mod demo;


pub use commands::{execute, run_cli, Cli, Commands};
pub use demo::{demo_router, DEMO_TOKEN};
