use clap::Parser;
use sports::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sports::telemetry::init_tracing();
    sports::run(Cli::parse()).await
}
