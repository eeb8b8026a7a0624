//! # Error Taxonomy
//!
//! Failures fall in three buckets:
//!
//! * **Fatal**: the host list or the findings log cannot be used. These never
//!   show up here, they travel as `anyhow::Error` up to `main`.
//! * **Verdict**: [`ProbeError`], the reason a host was reported as failed.
//! * **Enrichment**: [`EnrichError`], logged where it happens and otherwise
//!   swallowed. It never changes a verdict.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Why a host did not grant anonymous access.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("FTP connection error: {0}")]
    Connect(io::Error),

    #[error("FTP connection error: timed out after {:.1}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("login rejected: {0}")]
    Auth(String),

    #[error("FTP protocol error: {0}")]
    Protocol(String),
}

impl ProbeError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Timeout(_))
    }
}

/// Failures of the best-effort steps that follow a successful login.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("failed to resolve hostname {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("no IPv4 address found for hostname {0}")]
    NoIpv4(String),

    #[error("failed to get geo information for IP {ip}: {reason}")]
    Geo { ip: String, reason: String },

    #[error("failed to write to findings log: {0}")]
    Write(#[from] io::Error),
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
