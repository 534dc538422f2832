use crate::probe::PortResult;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::time::Duration;


/// Single-value reachability classification, derived from the probe
/// outcomes each time a report is built and never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallStatus {
    #[serde(rename = "REACHABLE")]
    Reachable,
    #[serde(rename = "PARTIALLY_REACHABLE")]
    PartiallyReachable,
    #[serde(rename = "UNREACHABLE")]
    Unreachable,
}

impl OverallStatus {
    /// Pure classification over the three booleans that matter.
    ///
    /// Resolution failure dominates. Any TCP success means the host is
    /// reachable. Without one, a UDP reply still proves something is
    /// alive; UDP silence proves nothing and never downgrades a result
    /// on its own.
    pub fn derive(resolved: bool, any_tcp_success: bool, any_udp_reply: bool) -> Self {
        if !resolved {
            Self::Unreachable
        } else if any_tcp_success {
            Self::Reachable
        } else if any_udp_reply {
            Self::PartiallyReachable
        } else {
            Self::Unreachable
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reachable => write!(f, "REACHABLE"),
            Self::PartiallyReachable => write!(f, "PARTIALLY_REACHABLE"),
            Self::Unreachable => write!(f, "UNREACHABLE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcpPortReport {
    pub port: u16,
    pub success: bool,
    pub latency_ms: Option<f64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UdpPortReport {
    pub port: u16,
    pub success: bool,
    pub error: Option<String>,
}

impl From<PortResult> for TcpPortReport {
    fn from(result: PortResult) -> Self {
        Self {
            port: result.port,
            success: result.success,
            latency_ms: result.latency.map(latency_ms),
            error: result.error.map(|e| e.to_string()),
        }
    }
}

impl From<PortResult> for UdpPortReport {
    fn from(result: PortResult) -> Self {
        Self {
            port: result.port,
            success: result.success,
            error: result.error.map(|e| e.to_string()),
        }
    }
}

/// Connect latency in milliseconds, rounded to two decimals.
pub fn latency_ms(latency: Duration) -> f64 {
    (latency.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
}

/// Aggregate outcome of one diagnostic run. Field names are the stable
/// machine-readable schema; `serde_json` output of this struct is the
/// tool's only machine artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub target: String,
    pub resolved_address: Option<IpAddr>,
    pub tcp: Vec<TcpPortReport>,
    pub udp: Vec<UdpPortReport>,
    pub overall_status: OverallStatus,
}

impl DiagnosticReport {
    /// Builds the report and derives the overall status.
    ///
    /// Callers must pass empty probe sets when `resolved_address` is
    /// `None`; no probing happens without an address.
    pub fn new(
        target: impl Into<String>,
        resolved_address: Option<IpAddr>,
        tcp: Vec<PortResult>,
        udp: Vec<PortResult>,
    ) -> Self {
        let any_tcp_success = tcp.iter().any(|r| r.success);
        let any_udp_reply = udp.iter().any(|r| r.success);
        let overall_status = OverallStatus::derive(
            resolved_address.is_some(),
            any_tcp_success,
            any_udp_reply,
        );

        Self {
            target: target.into(),
            resolved_address,
            tcp: tcp.into_iter().map(TcpPortReport::from).collect(),
            udp: udp.into_iter().map(UdpPortReport::from).collect(),
            overall_status,
        }
    }

    /// Renders the human-facing summary.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);

        out.push_str(&format!("{}\n", rule.blue()));
        out.push_str(&format!("{}\n", "Diagnostic Summary".bold().blue()));
        out.push_str(&format!("{}\n", rule.blue()));
        out.push_str(&format!("Target: {}\n", self.target));

        match self.resolved_address {
            Some(addr) => {
                out.push_str(&format!(
                    "DNS Resolution: {} (resolved to {addr})\n",
                    "PASS".green().bold()
                ));
            }
            None => {
                out.push_str(&format!(
                    "DNS Resolution: {} (name could not be resolved)\n",
                    "FAIL".red().bold()
                ));
            }
        }

        if !self.tcp.is_empty() {
            out.push_str("\nTCP Connectivity:\n");
            for entry in &self.tcp {
                match (entry.success, entry.latency_ms) {
                    (true, Some(ms)) => out.push_str(&format!(
                        "  - Port {}: {} ({} ms)\n",
                        entry.port,
                        "PASS".green().bold(),
                        format!("{ms:.2}").cyan()
                    )),
                    _ => out.push_str(&format!(
                        "  - Port {}: {} ({})\n",
                        entry.port,
                        "FAIL".red().bold(),
                        entry.error.as_deref().unwrap_or("unknown error").red()
                    )),
                }
            }
        }

        if !self.udp.is_empty() {
            out.push_str("\nUDP Connectivity (best-effort):\n");
            for entry in &self.udp {
                if entry.success {
                    out.push_str(&format!(
                        "  - Port {}: {} (reply received)\n",
                        entry.port,
                        "PASS".green().bold()
                    ));
                } else {
                    out.push_str(&format!(
                        "  - Port {}: {} ({})\n",
                        entry.port,
                        "WARN".yellow().bold(),
                        entry.error.as_deref().unwrap_or("unknown error").yellow()
                    ));
                }
            }
        }

        let status = match self.overall_status {
            OverallStatus::Reachable => self.overall_status.to_string().green().bold(),
            OverallStatus::PartiallyReachable => self.overall_status.to_string().yellow().bold(),
            OverallStatus::Unreachable => self.overall_status.to_string().red().bold(),
        };
        out.push_str(&format!("\nOverall Status: {status}\n"));
        out.push_str(&format!("{}\n", rule.blue()));

        out
    }
}
