use crossbeam_queue::SegQueue;
use tracing::warn;

use crate::packet::Packet;

/// Depth above which the queue starts complaining
const LARGE_QUEUE_WARNING: usize = 100_000;

/// Unbounded FIFO of packets waiting to be processed
#[derive(Debug, Default)]
pub struct PacketQueue {
    packets: SegQueue<Packet>,
}

impl PacketQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a packet at the tail
    pub fn push(&self, packet: Packet) {
        self.packets.push(packet);

        let len = self.packets.len();
        if crossed_large_queue_threshold(len) {
            warn!("Packet queue is large: approx {} packets", len);
        }
    }

    /// Remove the head packet, if any
    pub fn pop(&self) -> Option<Packet> {
        self.packets.pop()
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// True while at least one packet is waiting
    pub fn has_packets(&self) -> bool {
        !self.is_empty()
    }
}

/// True only for the push that takes the queue past the warning depth
fn crossed_large_queue_threshold(len: usize) -> bool {
    len == LARGE_QUEUE_WARNING + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let queue = PacketQueue::new();
        for id in 0..5 {
            queue.push(Packet::new(id, vec![id as u8]));
        }

        let ids: Vec<u64> = std::iter::from_fn(|| queue.pop()).map(|p| p.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_has_packets() {
        let queue = PacketQueue::new();
        assert!(!queue.has_packets());
        assert_eq!(queue.len(), 0);

        queue.push(Packet::new(0, Vec::new()));
        assert!(queue.has_packets());
        assert_eq!(queue.len(), 1);

        queue.pop();
        assert!(!queue.has_packets());
    }

    #[test]
    fn test_large_queue_warns_once() {
        let warnings = (1..=LARGE_QUEUE_WARNING * 3)
            .filter(|&len| crossed_large_queue_threshold(len))
            .count();
        assert_eq!(warnings, 1);
        assert!(!crossed_large_queue_threshold(LARGE_QUEUE_WARNING));
        assert!(crossed_large_queue_threshold(LARGE_QUEUE_WARNING + 1));
        assert!(!crossed_large_queue_threshold(LARGE_QUEUE_WARNING + 2));
    }

    #[test]
    fn test_pop_empty() {
        let queue = PacketQueue::new();
        assert!(queue.pop().is_none());

        // Still usable afterwards
        queue.push(Packet::new(3, vec![9]));
        assert_eq!(queue.pop().map(|p| p.id()), Some(3));
    }
}
