use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "trackside-api")]
#[command(about = "HTTP/JSON gateway for the Trackside gRPC services", long_about = None)]
pub struct Cli {
    /// HTTP listen address
    #[arg(long = "api-endpoint", env = "API_ENDPOINT", default_value = "127.0.0.1:8000")]
    pub api_endpoint: SocketAddr,

    /// Racing gRPC backend endpoint
    #[arg(
        long = "racing-endpoint",
        env = "RACING_ENDPOINT",
        default_value = "http://127.0.0.1:9000"
    )]
    pub racing_endpoint: String,

    /// Sports gRPC backend endpoint
    #[arg(
        long = "sports-endpoint",
        env = "SPORTS_ENDPOINT",
        default_value = "http://127.0.0.1:9001"
    )]
    pub sports_endpoint: String,
}
