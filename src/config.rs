//! Command-line and environment configuration

use crate::client::ClientOptions;
use crate::types::MAX_WINDOW_HOURS;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Review sender-maturity quarantined mail and release a message
#[derive(Debug, Clone, Parser)]
#[command(name = "sma-quarantine", version, about)]
pub struct Cli {
    /// Base URL of the security management appliance, e.g. `https://sma.example.com`
    #[arg(long, env = "SMA_BASE_URL")]
    pub base_url: String,

    /// Originating ESA address to list; repeat for several appliances
    #[arg(
        long = "esa",
        env = "SMA_ESA_IPS",
        value_delimiter = ',',
        required = true,
        num_args = 1..
    )]
    pub appliances: Vec<String>,

    /// API user; prompted for when absent
    #[arg(short, long, env = "SMA_USERNAME")]
    pub username: Option<String>,

    /// Directory for message body files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Length of the listing window, ending at the current minute
    #[arg(
        long,
        default_value_t = 24,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_HOURS))
    )]
    pub window_hours: u32,

    /// Per-request timeout; requests wait indefinitely when unset
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Connect directly even when a proxy is configured in the environment
    #[arg(long)]
    pub no_proxy: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout_secs.map(Duration::from_secs),
            accept_invalid_certs: self.insecure,
            bypass_proxy: self.no_proxy,
        }
    }

    /// Default `tracing` filter when `RUST_LOG` is not set
    #[must_use]
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "sma_quarantine=debug"
        } else {
            "warn"
        }
    }
}
