pub mod cli;
pub mod db;
pub mod error;
pub mod service;
pub mod telemetry;

pub mod proto {
    tonic::include_proto!("racing");

    pub const FILE_DESCRIPTOR_SET: &[u8] =
        include_bytes!(concat!(env!("OUT_DIR"), "/racing_descriptor.bin"));
}

use crate::cli::Cli;
use crate::db::RacesRepo;
use std::sync::Arc;
use tokio::task;
use tracing::info;

/// Opens the races store, seeds it, and serves the racing gRPC API.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let conn = db::open(&cli.database)?;
    let races = Arc::new(RacesRepo::new(conn));

    let repo = Arc::clone(&races);
    task::spawn_blocking(move || repo.init()).await??;
    info!(path = %cli.database.display(), "races store ready");

    service::serve(cli.grpc_endpoint, races).await
}
