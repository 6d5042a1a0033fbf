//! Command implementations for the SNO CLI.
//!
//! Provides subcommands that drive the loading toggle from real HTTP
//! traffic (`fetch`) or from a scripted notification sequence (`replay`).

use clap::Subcommand;
use sno_activity::Notification;
use std::path::PathBuf;

pub mod client;
pub mod config;
pub mod fetch;
pub mod replay;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch URLs concurrently and report loading-marker transitions
    Fetch {
        /// URLs counted towards the loading marker
        #[arg(required = true)]
        urls: Vec<String>,

        /// URLs fetched alongside but never counted (background requests)
        #[arg(short = 'u', long)]
        untracked: Vec<String>,

        /// Path to a JSON toggle config
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },

    /// Feed a sequence of notifications (active/idle) into a fresh toggle
    Replay {
        /// Notifications in delivery order, e.g. `active active idle`
        notifications: Vec<Notification>,

        /// Path to a JSON toggle config
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch {
            urls,
            untracked,
            config,
            timeout_secs,
        } => {
            let config = config::load_config(config.as_deref())?;
            fetch::run_fetch(&urls, &untracked, &config, timeout_secs).await
        }
        Command::Replay {
            notifications,
            config,
        } => {
            let config = config::load_config(config.as_deref())?;
            for line in replay::replay_lines(&notifications, &config) {
                println!("{line}");
            }
            Ok(())
        }
    }
}
