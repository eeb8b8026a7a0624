//! # Scan Results
//!
//! Values produced by probes and handed over, exactly once, to the consumer
//! of the result stream.

use std::fmt;

use crate::error::ProbeError;
use crate::network::{geo::GeoInfo, host::Host};

/// Outcome of the connect and login steps for one host.
#[derive(Debug)]
pub struct ProbeResult {
    pub host: Host,
    pub error: Option<ProbeError>,
}

impl ProbeResult {
    pub fn success(host: Host) -> Self {
        Self { host, error: None }
    }

    pub fn failure(host: Host, error: ProbeError) -> Self {
        Self {
            host,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// A confirmed anonymous login together with where the server lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub host: Host,
    pub geo: GeoInfo,
}

/// Renders the findings log line, without the trailing newline.
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, ISP: {}, Country: {}",
            self.host, self.geo.isp, self.geo.country
        )
    }
}

/// Items travelling on the result stream.
///
/// Every host yields exactly one `Verdict`. A successful host may later yield
/// one `Located`, never before its `Verdict`.
#[derive(Debug)]
pub enum ScanEvent {
    Verdict(ProbeResult),
    Located { host: Host, geo: GeoInfo },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub probed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub located: usize,
    /// Findings that actually reached the log. Set once the writer is done.
    pub persisted: usize,
}

impl ScanSummary {
    pub fn record(&mut self, event: &ScanEvent) {
        match event {
            ScanEvent::Verdict(result) => {
                self.probed += 1;
                if result.is_success() {
                    self.succeeded += 1;
                } else {
                    self.failed += 1;
                }
            }
            ScanEvent::Located { .. } => self.located += 1,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
