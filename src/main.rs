use clap::Parser;
use log::{info, warn};
use netdiag::*;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let target = cli.target.trim().to_string();
    if target.is_empty() {
        eprintln!("error: target cannot be empty");
        std::process::exit(2);
    }

    let tcp_ports = cli::dedup_ports(&cli.tcp);
    let udp_ports = cli::dedup_ports(&cli.udp);
    let per_probe_timeout = Duration::from_secs_f64(cli.timeout);

    info!("target: {target}");
    info!("TCP ports: {tcp_ports:?}");
    info!("UDP ports: {udp_ports:?} (best-effort)");
    info!("timeout: {:.1}s per probe", cli.timeout);

    // Resolution is the single short-circuit point: without an address
    // there is nothing to probe.
    let (resolved, tcp_results, udp_results) = match resolver::resolve(&target).await {
        Ok(ip) => {
            let tcp = probe::tcp::probe_ports(ip, &tcp_ports, per_probe_timeout).await;
            let udp = probe::udp::probe_ports(ip, &udp_ports, per_probe_timeout).await;
            (Some(ip), tcp, udp)
        }
        Err(e) => {
            warn!("{e}");
            (None, Vec::new(), Vec::new())
        }
    };

    let report = DiagnosticReport::new(target, resolved, tcp_results, udp_results);

    let json = match serde_json::to_string_pretty(&report) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: failed to serialize report: {e}");
            std::process::exit(1);
        }
    };

    // Stdout is reserved for the machine-readable report; the human
    // summary rides the diagnostic stream with the rest of the narration
    // so the two can be redirected independently.
    if cli.json {
        println!("{json}");
    } else {
        eprint!("{}", report.render_text());
    }

    if let Some(path) = &cli.json_out {
        if let Err(e) = std::fs::write(path, &json) {
            eprintln!("error: failed to write {}: {e}", path.display());
            std::process::exit(1);
        }
        info!("JSON report written to {}", path.display());
    }

    // An UNREACHABLE result is a finding, not a tool failure; exit 0
    // whenever a report was produced.
}
