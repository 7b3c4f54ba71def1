use clap::Parser;
use conway_server::{serve, telemetry, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    telemetry::init(config.log_level);
    serve(config).await
}
