pub mod cli;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;
pub mod telemetry;

pub mod proto {
    pub mod racing {
        tonic::include_proto!("racing");
    }

    pub mod sports {
        tonic::include_proto!("sports");
    }
}

use crate::cli::Cli;
use crate::server::Server;

/// Connects the gateway to its gRPC backends and serves the HTTP API.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    Server::new(cli)?.run().await
}
