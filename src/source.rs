use std::ops::Range;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use crate::packet::{DEFAULT_PAYLOAD_SIZE, Packet};
use crate::queue::PacketQueue;

/// Produces synthetic packets with random payloads.
///
/// Ids come from a counter owned by the source. It starts at 0 and is never
/// reset, so packets from repeated `generate` calls keep unique, ascending ids.
pub struct PacketSource<R: RngCore = StdRng> {
    rng: R,
    payload_size: usize,
    next_id: u64,
}

impl PacketSource<StdRng> {
    pub fn new(payload_size: usize) -> Self {
        Self::with_rng(StdRng::from_entropy(), payload_size)
    }

    /// Reproducible payloads for a given seed
    pub fn seeded(seed: u64, payload_size: usize) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), payload_size)
    }
}

impl Default for PacketSource<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_PAYLOAD_SIZE)
    }
}

impl<R: RngCore> PacketSource<R> {
    pub fn with_rng(rng: R, payload_size: usize) -> Self {
        Self {
            rng,
            payload_size,
            next_id: 0,
        }
    }

    pub fn payload_size(&self) -> usize {
        self.payload_size
    }

    /// Id the next packet will get
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Append `count` random packets to `queue`, returning the ids assigned
    pub fn generate(&mut self, queue: &PacketQueue, count: usize) -> Range<u64> {
        let first = self.next_id;

        for _ in 0..count {
            let payload = self.random_payload();
            self.enqueue_payload(queue, payload);
        }

        info!(
            "Generated {} packets of {} bytes (ids {}..{})",
            count,
            self.payload_size(),
            first,
            self.next_id
        );
        first..self.next_id
    }

    /// Stamp a caller-provided payload with the next id and enqueue it
    pub fn enqueue_payload(&mut self, queue: &PacketQueue, payload: Vec<u8>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        debug!("Queued packet {} ({} bytes)", id, payload.len());
        queue.push(Packet::new(id, payload));
        id
    }

    fn random_payload(&mut self) -> Vec<u8> {
        let mut payload = vec![0u8; self.payload_size];
        self.rng.fill_bytes(&mut payload);
        payload
    }
}
