mod cli;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    printdesk_core::tracing_setup::init_tracing();
    let args = cli::Cli::parse();
    cli::run(args).await
}
