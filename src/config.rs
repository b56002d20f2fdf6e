use std::time::Duration;

use crate::error::{Result, StreamError};
use crate::pacing::PacingMode;
use crate::packet::DEFAULT_PAYLOAD_SIZE;

/// Packets generated per run unless told otherwise
pub const DEFAULT_PACKET_COUNT: usize = 10;

/// Largest payload accepted, the size of a maximal UDP datagram payload
pub const MAX_PAYLOAD_SIZE: usize = 65_535;

/// Settings for one simulated run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    pub packet_count: usize,
    pub payload_size: usize,
    pub pacing: PacingMode,
    pub seed: Option<u64>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            packet_count: DEFAULT_PACKET_COUNT,
            payload_size: DEFAULT_PAYLOAD_SIZE,
            pacing: PacingMode::default(),
            seed: None,
        }
    }
}

impl StreamConfig {
    /// Build a config from raw command-line values.
    ///
    /// A rate, when given, takes precedence over the fixed delay. A delay of
    /// zero turns pacing off. Payloads larger than `MAX_PAYLOAD_SIZE` are
    /// rejected.
    pub fn from_options(
        packet_count: usize,
        payload_size: usize,
        delay_ms: u64,
        rate: Option<u64>,
        seed: Option<u64>,
    ) -> Result<Self> {
        if payload_size > MAX_PAYLOAD_SIZE {
            return Err(StreamError::InvalidConfig(format!(
                "payload size {} exceeds maximum of {} bytes",
                payload_size, MAX_PAYLOAD_SIZE
            )));
        }

        let pacing = match rate {
            Some(0) => {
                return Err(StreamError::InvalidConfig(
                    "rate must be at least 1 packet per second".to_string(),
                ));
            }
            Some(rate) => PacingMode::FixedRate(rate),
            None if delay_ms == 0 => PacingMode::Unpaced,
            None => PacingMode::FixedDelay(Duration::from_millis(delay_ms)),
        };

        Ok(Self {
            packet_count,
            payload_size,
            pacing,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_run() {
        let config = StreamConfig::default();
        assert_eq!(config.packet_count, 10);
        assert_eq!(config.payload_size, 128);
        assert_eq!(config.pacing, PacingMode::FixedDelay(Duration::from_millis(100)));
        assert_eq!(config.seed, None);

        let parsed = StreamConfig::from_options(10, 128, 100, None, None).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rate_overrides_delay() {
        let config = StreamConfig::from_options(5, 64, 100, Some(50), Some(7)).unwrap();
        assert_eq!(config.pacing, PacingMode::FixedRate(50));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_zero_delay_is_unpaced() {
        let config = StreamConfig::from_options(1, 1, 0, None, None).unwrap();
        assert_eq!(config.pacing, PacingMode::Unpaced);
    }

    #[test]
    fn test_zero_rate_rejected() {
        let err = StreamConfig::from_options(1, 1, 100, Some(0), None).unwrap_err();
        assert!(matches!(err, StreamError::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let err = StreamConfig::from_options(1, usize::MAX, 0, None, Some(1)).unwrap_err();
        assert!(matches!(err, StreamError::InvalidConfig(_)));

        let err = StreamConfig::from_options(1, MAX_PAYLOAD_SIZE + 1, 0, None, None).unwrap_err();
        assert!(matches!(err, StreamError::InvalidConfig(_)));

        let config = StreamConfig::from_options(1, MAX_PAYLOAD_SIZE, 0, None, None).unwrap();
        assert_eq!(config.payload_size, MAX_PAYLOAD_SIZE);
    }
}
