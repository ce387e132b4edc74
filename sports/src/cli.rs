use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trackside-sports")]
#[command(about = "Trackside sports event data gRPC service", long_about = None)]
pub struct Cli {
    /// gRPC listen address
    #[arg(
        long = "grpc-endpoint",
        env = "SPORTS_GRPC_ENDPOINT",
        default_value = "127.0.0.1:9001"
    )]
    pub grpc_endpoint: SocketAddr,

    /// Path to the sports events SQLite database
    #[arg(long = "database", env = "SPORTS_DATABASE", default_value = "sports.db")]
    pub database: PathBuf,
}
