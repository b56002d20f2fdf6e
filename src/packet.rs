use std::time::Instant;

/// Payload length used when no size is configured
pub const DEFAULT_PAYLOAD_SIZE: usize = 128;

/// Synthetic packet flowing through the stream
#[derive(Debug, Clone)]
pub struct Packet {
    id: u64,              // Sequential id, matches enqueue order
    timestamp: Instant,   // Monotonic creation time
    payload: Vec<u8>,     // Packet payload - random bytes
}

impl Packet {
    pub fn new(id: u64, payload: Vec<u8>) -> Self {
        Self {
            id,
            timestamp: Instant::now(),
            payload,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
