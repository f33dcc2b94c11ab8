//! DadosJusBr CLI - query the remuneration API from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "djbr-cli",
    version,
    about = "DadosJusBr remuneration data toolkit"
)]
struct Cli {
    #[command(flatten)]
    api: djbr_cmd::ApiArgs,

    #[command(subcommand)]
    command: djbr_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using API at {}", cli.api.api_base_url);
    djbr_cmd::run(&cli.api, cli.command).await
}
