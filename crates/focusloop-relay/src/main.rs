//! Thin relay server binary.
//!
//! Holds the shared task mirror in memory for the lifetime of the process;
//! a restart loses all tasks for all viewers.

use clap::Parser;
use focusloop_core::sync::Relay;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "focusloop-relay", version, about = "FocusLoop task relay")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:4750")]
    bind: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let listener = TcpListener::bind(&args.bind).await?;
    log::info!("relay listening on {}", args.bind);

    Relay::new().serve(listener).await
}
