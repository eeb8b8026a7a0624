//! # Scan Engine
//!
//! The concurrent heart of the tool:
//!
//! ```text
//! HostSource → dispatcher → probe (one task per host) → event stream → aggregator → Reporter
//!                                  └──→ FindingsLog
//! ```
//!
//! * The **dispatcher** admits at most `concurrency` probes at a time through a
//!   semaphore and closes the event stream once every probe has finished.
//! * A **probe** decides the verdict for one host (connect, anonymous login),
//!   reports it right away, then enriches a success with geolocation and
//!   records it in the findings log.
//! * The **aggregator** drains the stream in completion order.
//!
//! Only connect and login failures change a verdict. Everything after a
//! successful login is best effort and only ever logged.

use std::sync::Arc;

use anyhow::{Context, ensure};
use ftpsweep_common::config::Config;
use ftpsweep_common::scan::{ScanEvent, ScanSummary};
use tokio::io::AsyncRead;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::hosts::HostSource;
use crate::network::{ftp::FtpTransport, geo::HttpGeoLocator, resolver::SystemResolver};
use crate::ports::{GeoLocator, Reporter, Resolver, Transport};
use crate::sink::FindingsLog;

mod aggregator;
mod dispatcher;
mod probe;


pub use aggregator::aggregate;

pub const ANONYMOUS_USER: &str = "anonymous";
pub const ANONYMOUS_PASSWORD: &str = "";

/// Capacity of the event stream. Probes wait for the aggregator rather than
/// piling results up.
const EVENT_BUFFER: usize = 1;

/// Application service wiring the engine to its collaborators.
pub struct ScanService {
    transport: Arc<dyn Transport>,
    resolver: Arc<dyn Resolver>,
    geo: Arc<dyn GeoLocator>,
}

/// A running scan.
pub struct ScanHandle {
    /// Closed once every dispatched probe has finished.
    pub events: mpsc::Receiver<ScanEvent>,
    dispatcher: JoinHandle<anyhow::Result<usize>>,
}

impl ScanService {
    pub fn new(
        transport: Arc<dyn Transport>,
        resolver: Arc<dyn Resolver>,
        geo: Arc<dyn GeoLocator>,
    ) -> Self {
        Self {
            transport,
            resolver,
            geo,
        }
    }

    /// Production wiring: plain FTP, the system resolver and an HTTP geolocation client.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let geo = HttpGeoLocator::new(&cfg.geo_endpoint).context("building geolocation client")?;
        Ok(Self::new(
            Arc::new(FtpTransport::new(cfg.port)),
            Arc::new(SystemResolver),
            Arc::new(geo),
        ))
    }

    /// Starts dispatching `hosts` in the background.
    ///
    /// The caller must drain [`ScanHandle::events`], probes block on a full stream.
    pub fn start<R>(
        &self,
        hosts: HostSource<R>,
        findings: FindingsLog,
        cfg: &Config,
    ) -> anyhow::Result<ScanHandle>
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        ensure!(cfg.concurrency > 0, "concurrency must be at least 1");

        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let ctx = Arc::new(probe::ProbeContext {
            transport: self.transport.clone(),
            resolver: self.resolver.clone(),
            geo: self.geo.clone(),
            findings,
            timeout: cfg.timeout,
        });

        let dispatcher = tokio::spawn(dispatcher::dispatch(hosts, ctx, cfg.concurrency, tx));

        Ok(ScanHandle {
            events: rx,
            dispatcher,
        })
    }
}

impl ScanHandle {
    /// Waits for the dispatcher and returns how many hosts were probed.
    ///
    /// Fails when the host list could not be read to the end.
    pub async fn finish(self) -> anyhow::Result<usize> {
        self.dispatcher.await.context("dispatcher task panicked")?
    }
}

/// Runs a whole scan as configured: reads `cfg.input`, appends to
/// `cfg.output` and reports every event to `reporter`.
pub async fn perform_scan(
    service: &ScanService,
    cfg: &Config,
    reporter: &mut dyn Reporter,
) -> anyhow::Result<ScanSummary> {
    let hosts = HostSource::open(&cfg.input).await?;
    let (findings, writer) = FindingsLog::open(&cfg.output).await?;
    let writer = tokio::spawn(writer.run());

    let mut handle = service.start(hosts, findings, cfg)?;
    let mut summary = aggregate(&mut handle.events, reporter).await;
    let dispatched = handle.finish().await;

    // The log is flushed even when the host list broke half way.
    let writer = writer.await.context("findings writer panicked")?;
    let dispatched =
        dispatched.with_context(|| format!("Error reading {} file", cfg.input.display()))?;

    summary.persisted = writer.written();
    debug!(
        dispatched,
        written = writer.written(),
        failed = writer.failed(),
        "scan finished"
    );
    Ok(summary)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
