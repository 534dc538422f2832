use super::{PortResult, ProbeFailure};
use log::info;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Attempts a TCP connection to each port in input order, one at a time.
///
/// Latency is measured with a monotonic clock and recorded only when the
/// connect succeeds. The stream is dropped immediately; no data is
/// exchanged.
pub async fn probe_ports(ip: IpAddr, ports: &[u16], per_port_timeout: Duration) -> Vec<PortResult> {
    let mut results = Vec::with_capacity(ports.len());
    for &port in ports {
        results.push(probe_port(ip, port, per_port_timeout).await);
    }
    results
}

async fn probe_port(ip: IpAddr, port: u16, per_port_timeout: Duration) -> PortResult {
    let addr = SocketAddr::new(ip, port);
    info!(
        "[TCP] probing {addr} (timeout {:.1}s)",
        per_port_timeout.as_secs_f64()
    );

    let start = Instant::now();
    match timeout(per_port_timeout, TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => {
            let latency = start.elapsed();
            drop(stream);
            info!(
                "[TCP] {addr} connected in {:.2} ms",
                latency.as_secs_f64() * 1000.0
            );
            PortResult::connected(port, latency)
        }
        Ok(Err(e)) => PortResult::failed(port, classify(e)),
        Err(_) => PortResult::failed(port, ProbeFailure::Timeout),
    }
}

fn classify(e: io::Error) -> ProbeFailure {
    match e.kind() {
        io::ErrorKind::TimedOut => ProbeFailure::Timeout,
        io::ErrorKind::ConnectionRefused => ProbeFailure::Refused,
        io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable => {
            ProbeFailure::Unreachable
        }
        _ => ProbeFailure::Io(e),
    }
}
