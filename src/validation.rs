use std::fmt;

/// Widened sum of all payload bytes
pub fn payload_sum(payload: &[u8]) -> u64 {
    payload.iter().map(|&b| b as u64).sum()
}

/// Parity rule: a payload is valid when its byte sum is even
pub fn is_valid(payload: &[u8]) -> bool {
    payload_sum(payload) % 2 == 0
}

/// Outcome of validating one packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Corrupted,
}

impl Verdict {
    pub fn of(payload: &[u8]) -> Self {
        if is_valid(payload) {
            Verdict::Valid
        } else {
            Verdict::Corrupted
        }
    }

    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid."),
            Verdict::Corrupted => write!(f, "corrupted!"),
        }
    }
}
