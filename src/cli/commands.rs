//! Command definitions and structures for the CLI

use clap::{Parser, Subcommand};

/// Main CLI structure
#[derive(Parser)]
#[command(name = "pushwoosh-client")]
#[command(about = "Send push notifications through the Pushwoosh createMessage API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send a notification to one or more device tokens
    Send {
        /// API access token
        #[arg(long, env = "PUSHWOOSH_AUTH_TOKEN")]
        auth: String,

        /// Application code identifying the target application
        #[arg(long, env = "PUSHWOOSH_APPLICATION")]
        application: String,

        /// Notification text
        #[arg(short, long)]
        message: String,

        /// Device token to deliver to (repeat for multiple devices)
        #[arg(short, long = "device", value_name = "TOKEN")]
        devices: Vec<String>,

        /// Proxy server URL to route the request through
        #[arg(long)]
        proxy: Option<String>,

        /// Pick up the proxy from HTTPS_PROXY/ALL_PROXY instead of --proxy
        #[arg(long, conflicts_with = "proxy")]
        system_proxy: bool,
    },
}
