use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use ftpsweep_common::error::EnrichError;
use ftpsweep_common::network::host::Host;
use tokio::net::lookup_host;

use crate::ports::Resolver;

/// Resolves through the operating system's resolver.
pub struct SystemResolver;

#[async_trait]
impl Resolver for SystemResolver {
    async fn resolve_ipv4(&self, host: &Host) -> Result<Ipv4Addr, EnrichError> {
        let addrs = lookup_host((host.as_str(), 0))
            .await
            .map_err(|source| EnrichError::Resolve {
                host: host.to_string(),
                source,
            })?;

        first_ipv4(addrs.map(|addr| addr.ip()))
            .ok_or_else(|| EnrichError::NoIpv4(host.to_string()))
    }
}

fn first_ipv4(addrs: impl IntoIterator<Item = IpAddr>) -> Option<Ipv4Addr> {
    addrs.into_iter().find_map(|ip| match ip {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
