use std::time::Duration;
use thiserror::Error;

pub mod tcp;
pub mod udp;


/// Why a single probe did not get through.
///
/// Every per-port outcome is captured here; probes never let an error
/// escape past their own boundary.
#[derive(Error, Debug)]
pub enum ProbeFailure {
    #[error("connection timed out")]
    Timeout,
    #[error("connection refused")]
    Refused,
    #[error("host unreachable")]
    Unreachable,
    #[error("no response (expected for UDP)")]
    NoResponse,
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of probing one port with one protocol.
#[must_use]
#[derive(Debug)]
pub struct PortResult {
    pub port: u16,
    pub success: bool,
    /// Connect latency, recorded only for successful TCP probes.
    pub latency: Option<Duration>,
    pub error: Option<ProbeFailure>,
}

impl PortResult {
    /// A TCP connect that completed within the timeout.
    pub fn connected(port: u16, latency: Duration) -> Self {
        Self {
            port,
            success: true,
            latency: Some(latency),
            error: None,
        }
    }

    /// A UDP probe that got a datagram back. No latency is kept for UDP.
    pub fn replied(port: u16) -> Self {
        Self {
            port,
            success: true,
            latency: None,
            error: None,
        }
    }

    pub fn failed(port: u16, error: ProbeFailure) -> Self {
        Self {
            port,
            success: false,
            latency: None,
            error: Some(error),
        }
    }
}
