use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trackside-racing")]
#[command(about = "Trackside racing data gRPC service", long_about = None)]
pub struct Cli {
    /// gRPC listen address
    #[arg(
        long = "grpc-endpoint",
        env = "RACING_GRPC_ENDPOINT",
        default_value = "127.0.0.1:9000"
    )]
    pub grpc_endpoint: SocketAddr,

    /// Path to the races SQLite database
    #[arg(long = "database", env = "RACING_DATABASE", default_value = "racing.db")]
    pub database: PathBuf,
}
