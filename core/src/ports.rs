//! # Ports
//!
//! Contracts between the scan engine and the outside world. The engine only
//! ever sees these traits, concrete adapters live in [`crate::network`] and in
//! the CLI.

use std::net::Ipv4Addr;

use async_trait::async_trait;
use ftpsweep_common::error::{EnrichError, ProbeError};
use ftpsweep_common::network::{geo::GeoInfo, host::Host};
use ftpsweep_common::scan::ProbeResult;

/// Opens FTP control connections.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Connects to `host` and waits for the server greeting.
    ///
    /// Not bounded in time; the probe wraps the call in the configured timeout.
    async fn connect(&self, host: &Host) -> Result<Box<dyn Session>, ProbeError>;
}

/// An established control connection.
#[async_trait]
pub trait Session: Send {
    async fn login(&mut self, user: &str, password: &str) -> Result<(), ProbeError>;

    /// Says goodbye. Errors are irrelevant at this point and swallowed.
    async fn quit(&mut self);
}

#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve_ipv4(&self, host: &Host) -> Result<Ipv4Addr, EnrichError>;
}

#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self, ip: Ipv4Addr) -> Result<GeoInfo, EnrichError>;
}

/// Receives scan events as the aggregator drains them.
pub trait Reporter {
    fn verdict(&mut self, result: &ProbeResult);
    fn located(&mut self, host: &Host, geo: &GeoInfo);
}
