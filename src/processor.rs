use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{Result, StreamError};
use crate::pacing::{PacingMode, PacketPacer};
use crate::packet::Packet;
use crate::queue::PacketQueue;
use crate::validation::{Verdict, payload_sum};

/// Totals for one drain of the queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub processed: u64,
    pub valid: u64,
    pub corrupted: u64,
    pub bytes: u64,
    pub elapsed: Duration,
    pub interrupted: bool,
}

impl StreamSummary {
    fn record(&mut self, packet: &Packet, verdict: Verdict) {
        self.processed += 1;
        self.bytes += packet.len() as u64;
        if verdict.is_valid() {
            self.valid += 1;
        } else {
            self.corrupted += 1;
        }
    }

    pub fn log(&self) {
        info!("======= STREAM SUMMARY =======");
        info!("Total time: {:.2} seconds", self.elapsed.as_secs_f64());
        info!("Packets processed: {}", self.processed);
        info!("Valid: {} - Corrupted: {}", self.valid, self.corrupted);
        info!("Payload bytes: {}", self.bytes);
        if self.interrupted {
            info!("Run was interrupted before the queue drained");
        }
        info!("==============================");
    }
}

/// Remove the head packet, failing instead of inventing one when empty
pub fn pop_next(queue: &PacketQueue) -> Result<Packet> {
    queue.pop().ok_or(StreamError::EmptyQueue)
}

/// Drains a packet queue in FIFO order, validating and reporting each packet
pub struct StreamProcessor<W: Write> {
    out: W,
    pacer: PacketPacer,
    running: Arc<AtomicBool>,
}

impl<W: Write> StreamProcessor<W> {
    pub fn new(out: W, mode: PacingMode) -> Self {
        Self {
            out,
            pacer: PacketPacer::new(mode),
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Flag that stops the loop before the next packet once cleared
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Validate one packet and write its result line
    pub fn process_packet(&mut self, packet: &Packet) -> Result<Verdict> {
        debug!(
            "Processing packet ID: {} ({} bytes, sum {})",
            packet.id(),
            packet.len(),
            payload_sum(packet.payload())
        );

        let verdict = Verdict::of(packet.payload());
        writeln!(self.out, "Packet {} is {}", packet.id(), verdict)?;
        self.out.flush()?;
        Ok(verdict)
    }

    /// Process packets until the queue is empty or the run is interrupted
    pub async fn run(&mut self, queue: &PacketQueue) -> Result<StreamSummary> {
        info!(
            "Processing {} queued packets with {:?} pacing",
            queue.len(),
            self.pacer.mode()
        );

        let start = Instant::now();
        let mut summary = StreamSummary::default();

        while queue.has_packets() {
            if !self.running.load(Ordering::Relaxed) {
                warn!("Stream processing interrupted with {} packets still queued", queue.len());
                summary.interrupted = true;
                break;
            }

            let packet = pop_next(queue)?;
            let verdict = self.process_packet(&packet)?;
            summary.record(&packet, verdict);

            debug!("Queue depth after packet {}: {}", packet.id(), queue.len());
            self.pacer.pace().await;
        }

        summary.elapsed = start.elapsed();
        Ok(summary)
    }
}
