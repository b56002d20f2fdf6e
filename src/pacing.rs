use std::time::{Duration, Instant};

/// Delay applied after each packet when nothing else is configured
pub const DEFAULT_PACKET_DELAY: Duration = Duration::from_millis(100);

/// Waits shorter than this spin instead of sleeping
const SPIN_THRESHOLD: Duration = Duration::from_micros(100);

/// Pacing mode for packet processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingMode {
    /// Sleep a fixed delay after every packet
    FixedDelay(Duration),
    /// Fixed rate in packets per second
    FixedRate(u64),
    /// No pacing at all
    Unpaced,
}

impl Default for PacingMode {
    fn default() -> Self {
        PacingMode::FixedDelay(DEFAULT_PACKET_DELAY)
    }
}

/// Spaces packets out in time without touching their order
#[derive(Debug)]
pub struct PacketPacer {
    mode: PacingMode,
    interval: Duration,           // Used for fixed rate mode
    last_packet: Option<Instant>,
}

impl PacketPacer {
    pub fn new(mode: PacingMode) -> Self {
        let interval = match mode {
            PacingMode::FixedRate(rate) => {
                if rate > 0 {
                    Duration::from_nanos(1_000_000_000 / rate)
                } else {
                    Duration::from_secs(1) // 1 second default interval for zero rate
                }
            }
            PacingMode::FixedDelay(delay) => delay,
            PacingMode::Unpaced => Duration::ZERO,
        };

        Self {
            mode,
            interval,
            last_packet: None,
        }
    }

    pub fn mode(&self) -> PacingMode {
        self.mode
    }

    /// Called once a packet has been handled; returns when the next one may go
    pub async fn pace(&mut self) {
        match self.mode {
            PacingMode::Unpaced => {}
            PacingMode::FixedDelay(delay) => {
                tokio::time::sleep(delay).await;
            }
            PacingMode::FixedRate(_) => {
                let now = Instant::now();
                if let Some(last) = self.last_packet {
                    let elapsed = now.duration_since(last);
                    if elapsed < self.interval {
                        wait(self.interval - elapsed).await;
                    }
                } else {
                    wait(self.interval).await;
                }
                self.last_packet = Some(Instant::now());
            }
        }
    }
}

async fn wait(duration: Duration) {
    if duration > SPIN_THRESHOLD {
        tokio::time::sleep(duration).await;
    } else {
        // Busy wait for sub-100us precision
        let start = Instant::now();
        while start.elapsed() < duration {
            std::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unpaced_does_not_sleep() {
        let mut pacer = PacketPacer::new(PacingMode::Unpaced);
        let start = Instant::now();
        for _ in 0..100 {
            pacer.pace().await;
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_fixed_delay() {
        let mut pacer = PacketPacer::new(PacingMode::FixedDelay(Duration::from_millis(5)));
        let start = Instant::now();
        for _ in 0..4 {
            pacer.pace().await;
        }
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_fixed_rate_spacing() {
        // 200 pps -> 5ms between packets
        let mut pacer = PacketPacer::new(PacingMode::FixedRate(200));
        let start = Instant::now();
        for _ in 0..4 {
            pacer.pace().await;
        }
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_zero_rate_falls_back() {
        let pacer = PacketPacer::new(PacingMode::FixedRate(0));
        assert_eq!(pacer.interval, Duration::from_secs(1));
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(PacingMode::default(), PacingMode::FixedDelay(Duration::from_millis(100)));
    }
}
