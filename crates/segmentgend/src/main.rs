//! segmentgend - VXLAN Network Segment Generator Daemon
//!
//! Entry point for the segmentgend daemon. Runs one generator invocation
//! over a query-result payload file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use fabgen_common::Generator;
use fabgen_segmentgend::{load_payload, SegmentGenerator};

#[derive(Parser, Debug)]
#[command(name = "segmentgend", about = "VXLAN network-segment generator")]
struct Args {
    /// Path to the query-result payload JSON file
    #[arg(long, value_name = "FILE")]
    payload: PathBuf,
}

/// Initializes tracing/logging subsystem
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();

    info!("--- Starting segmentgend ---");

    let payload = match load_payload(&args.payload) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Failed to load payload: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut generator = SegmentGenerator::new();
    if let Err(e) = generator.generate(&payload).await {
        error!("Generator {} failed: {}", generator.name(), e);
        return ExitCode::FAILURE;
    }

    info!(
        "segmentgend complete, {} trace events emitted",
        generator.trace().len()
    );

    ExitCode::SUCCESS
}
