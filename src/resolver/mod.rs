use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveError;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, info};
use std::net::IpAddr;
use thiserror::Error;

mod tests;

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("DNS resolution failed for {input}: {source}")]
    Lookup {
        input: String,
        #[source]
        source: ResolveError,
    },
    #[error("no address records returned for {input}")]
    NoRecords { input: String },
}

impl ResolutionError {
    /// The target string the caller asked to resolve.
    pub fn input(&self) -> &str {
        match self {
            Self::Lookup { input, .. } | Self::NoRecords { input } => input,
        }
    }
}

/// Resolves a hostname to a single numeric address, preferring IPv4.
///
/// Literal addresses are returned as-is without touching the resolver.
/// One lookup, no retries; the platform's default resolution timeout
/// applies.
pub async fn resolve(target: &str) -> Result<IpAddr, ResolutionError> {
    if let Ok(ip) = target.parse::<IpAddr>() {
        debug!("[DNS] {target} is a literal address, skipping lookup");
        return Ok(ip);
    }

    info!("[DNS] resolving hostname: {target}");

    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());
    let lookup = resolver
        .lookup_ip(target)
        .await
        .map_err(|e| ResolutionError::Lookup {
            input: target.to_string(),
            source: e,
        })?;

    let addr = lookup
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| lookup.iter().next())
        .ok_or_else(|| ResolutionError::NoRecords {
            input: target.to_string(),
        })?;

    info!("[DNS] resolution successful: {target} -> {addr}");
    Ok(addr)
}
