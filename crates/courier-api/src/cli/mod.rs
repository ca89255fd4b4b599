//! CLI command definitions for the `courier` binary.
//!
//! Uses clap derive macros for argument parsing.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Store and query two-party messages over HTTP.
#[derive(Parser)]
#[command(name = "courier", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "COURIER_JSON_LOGS")]
    pub json_logs: bool,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "COURIER_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the record log and start the HTTP server.
    Serve {
        /// Address to bind (defaults to `[server].host` from config.toml).
        #[arg(long, env = "COURIER_HOST")]
        host: Option<String>,

        /// Port to listen on (defaults to `[server].port` from config.toml).
        #[arg(short, long, env = "COURIER_PORT")]
        port: Option<u16>,
    },

    /// Truncate the record log to its header row and exit.
    Init,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Default log filter directive for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,courier=debug,courier_core=debug,courier_infra=debug,courier_api=debug",
            _ => "trace",
        }
    }
}
