use super::{PortResult, ProbeFailure};
use log::info;
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::timeout;

/// Payload for the unsolicited probe datagram. Content is arbitrary; it
/// only needs to be something a responsive service might answer.
pub const PROBE_PAYLOAD: &[u8] = b"NETDIAG_PROBE";

/// Sends one datagram to each port in input order and waits for any reply.
///
/// Silence is the normal outcome for most UDP services, so it is recorded
/// with a neutral annotation rather than a hard failure. Only a failed
/// send (or an ICMP-signaled rejection surfacing on the socket) produces a
/// concrete error.
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
        "[UDP] sending probe to {addr} (timeout {:.1}s)",
        per_port_timeout.as_secs_f64()
    );

    match send_and_wait(addr, per_port_timeout).await {
        Ok(true) => {
            info!("[UDP] {addr} replied");
            PortResult::replied(port)
        }
        Ok(false) => PortResult::failed(port, ProbeFailure::NoResponse),
        Err(e) => PortResult::failed(port, classify(e)),
    }
}

async fn send_and_wait(addr: SocketAddr, per_port_timeout: Duration) -> io::Result<bool> {
    let bind_addr: SocketAddr = if addr.is_ipv4() {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
    } else {
        SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
    };

    let socket = UdpSocket::bind(bind_addr).await?;
    socket.connect(addr).await?;
    socket.send(PROBE_PAYLOAD).await?;

    let mut buf = [0u8; 1024];
    match timeout(per_port_timeout, socket.recv(&mut buf)).await {
        Ok(Ok(_)) => Ok(true),
        // An ICMP port-unreachable often surfaces here as a recv error on
        // connected sockets; that is a concrete signal, not silence.
        Ok(Err(e)) => Err(e),
        Err(_) => Ok(false),
    }
}

fn classify(e: io::Error) -> ProbeFailure {
    match e.kind() {
        io::ErrorKind::ConnectionRefused => ProbeFailure::Refused,
        io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable => {
            ProbeFailure::Unreachable
        }
        _ => ProbeFailure::Io(e),
    }
}
