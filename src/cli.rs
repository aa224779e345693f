//! CLI definitions for Nightqueue.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

use nightqueue_config::{Config, ConfigLoader};

/// Nightqueue CLI.
#[derive(Parser)]
#[command(name = "nightqueue")]
#[command(about = "Nightbot request queue served over HTTP")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to ./nightqueue.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run(RunArgs),

    /// Load and validate the configuration, then print it
    CheckConfig,
}

/// Overrides applied on top of the config file and environment.
#[derive(Args, Default)]
pub(crate) struct RunArgs {
    /// Server host
    #[arg(long)]
    pub host: Option<String>,

    /// Server port
    #[arg(long)]
    pub port: Option<u16>,

    /// Queue persistence file
    #[arg(long)]
    pub queue_file: Option<PathBuf>,

    /// Public URL used for keepalive pings
    #[arg(long)]
    pub self_url: Option<Url>,

    /// Never self-ping, even while the queue is open
    #[arg(long)]
    pub no_keepalive: bool,
}

impl RunArgs {
    pub fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(queue_file) = self.queue_file {
            config.storage.queue_file =
                PathBuf::from(ConfigLoader::expand_path(&queue_file.to_string_lossy()));
        }
        if let Some(url) = self.self_url {
            config.keepalive.url = url;
        }
        if self.no_keepalive {
            config.keepalive.enabled = false;
        }
    }
}
