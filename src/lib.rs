//! Toy packet stream: generate random packets, queue them, then drain the
//! queue in FIFO order while checking each payload with a parity rule.

pub mod config;
pub mod error;
pub mod pacing;
pub mod packet;
pub mod processor;
pub mod queue;
pub mod security;
pub mod source;
pub mod validation;

pub use config::StreamConfig;
pub use error::{Result, StreamError};
pub use pacing::{PacingMode, PacketPacer};
pub use packet::Packet;
pub use processor::{StreamProcessor, StreamSummary, pop_next};
pub use queue::PacketQueue;
pub use source::PacketSource;
pub use validation::{Verdict, is_valid, payload_sum};
