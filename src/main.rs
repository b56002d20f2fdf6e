use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::sync::atomic::Ordering;
use tracing::info;

use packet_stream_sim::config::{DEFAULT_PACKET_COUNT, StreamConfig};
use packet_stream_sim::packet::DEFAULT_PAYLOAD_SIZE;
use packet_stream_sim::security::{self, ANOMALY_MESSAGE};
use packet_stream_sim::{PacketQueue, PacketSource, StreamProcessor};

#[derive(Parser, Debug)]
#[command(name = "packet-stream-sim")]
#[command(about = "Generate a synthetic packet stream, validate it and report anomalies")]
#[command(version = "1.0.0")]
struct Args {
    /// Number of packets to generate
    #[arg(short, long, default_value_t = DEFAULT_PACKET_COUNT)]
    count: usize,

    /// Payload size of each packet in bytes
    #[arg(short = 's', long, default_value_t = DEFAULT_PAYLOAD_SIZE)]
    payload_size: usize,

    /// Delay after each processed packet in milliseconds (0 = no delay)
    #[arg(short, long, default_value = "100")]
    delay_ms: u64,

    /// Pace at a fixed rate in packets per second instead of a fixed delay
    #[arg(short, long)]
    rate: Option<u64>,

    /// Seed for reproducible payloads
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging (default: false)
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

impl Args {
    fn config(&self) -> packet_stream_sim::Result<StreamConfig> {
        StreamConfig::from_options(
            self.count,
            self.payload_size,
            self.delay_ms,
            self.rate,
            self.seed,
        )
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout carries only the stream results
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let config = args.config()?;
    info!("Starting packet stream simulation: {:?}", config);

    let queue = PacketQueue::new();
    let mut source = match config.seed {
        Some(seed) => PacketSource::seeded(seed, config.payload_size),
        None => PacketSource::new(config.payload_size),
    };
    source.generate(&queue, config.packet_count);

    let mut processor = StreamProcessor::new(io::stdout(), config.pacing);

    // Setup graceful shutdown
    let running = processor.running_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, stopping stream processing...");
            running.store(false, Ordering::Relaxed);
        }
    });

    let summary = processor
        .run(&queue)
        .await
        .context("Failed to process packet stream")?;
    summary.log();

    security::log_event(processor.output(), ANOMALY_MESSAGE)
        .context("Failed to write security event")?;

    info!("Packet stream simulation complete");
    Ok(())
}
