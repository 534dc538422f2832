use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netdiag")]
#[command(about = "Network reachability diagnostics: DNS resolution + TCP/UDP probes for a single target")]
#[command(version)]
pub struct Cli {
    /// Target hostname or IP address (e.g. google.com or 8.8.8.8)
    pub target: String,

    /// TCP ports to probe
    #[arg(long, num_args = 1.., value_parser = clap::value_parser!(u16).range(1..), default_values_t = [80, 443])]
    pub tcp: Vec<u16>,

    /// UDP ports to probe (best-effort)
    #[arg(long, num_args = 1.., value_parser = clap::value_parser!(u16).range(1..), default_values_t = [53])]
    pub udp: Vec<u16>,

    /// Per-probe timeout in seconds
    #[arg(long, default_value_t = 3.0, value_parser = parse_timeout)]
    pub timeout: f64,

    /// Emit the JSON report on stdout instead of the text summary
    #[arg(long)]
    pub json: bool,

    /// Additionally write the JSON report to a file
    #[arg(long, value_name = "PATH")]
    pub json_out: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_timeout(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if secs > 0.0 && secs.is_finite() {
        Ok(secs)
    } else {
        Err("timeout must be a positive number of seconds".to_string())
    }
}

/// Drops repeated ports while keeping the first occurrence's position.
pub fn dedup_ports(ports: &[u16]) -> Vec<u16> {
    let mut seen = std::collections::HashSet::new();
    ports
        .iter()
        .copied()
        .filter(|p| seen.insert(*p))
        .collect()
}
