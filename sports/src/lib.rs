pub mod cli;
pub mod db;
pub mod error;
pub mod service;
pub mod telemetry;

pub mod proto {
    tonic::include_proto!("sports");

    pub const FILE_DESCRIPTOR_SET: &[u8] =
        include_bytes!(concat!(env!("OUT_DIR"), "/sports_descriptor.bin"));
}

use crate::cli::Cli;
use crate::db::EventsRepo;
use std::sync::Arc;
use tokio::task;
use tracing::info;

/// Opens the events store, seeds it, and serves the sports gRPC API.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let conn = db::open(&cli.database)?;
    let events = Arc::new(EventsRepo::new(conn));

    let repo = Arc::clone(&events);
    task::spawn_blocking(move || repo.init()).await??;
    info!(path = %cli.database.display(), "events store ready");

    service::serve(cli.grpc_endpoint, events).await
}
