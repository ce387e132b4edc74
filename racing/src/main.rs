use clap::Parser;
use racing::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    racing::telemetry::init_tracing();
    racing::run(Cli::parse()).await
}
