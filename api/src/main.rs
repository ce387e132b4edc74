use api::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    api::telemetry::init_tracing();
    api::run(Cli::parse()).await
}
