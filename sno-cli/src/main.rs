//! SNO CLI - drive the loading toggle from real or scripted request activity.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sno-cli",
    version,
    about = "Loading indicator toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sno_cmd::Command,
}

// The request tracker is single-threaded, so stay on one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sno_cmd::run(cli.command).await
}
