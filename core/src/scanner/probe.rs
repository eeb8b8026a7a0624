//! Per-host probe.
//!
//! connect → login → report verdict → resolve → geolocate → persist → report location
//!
//! The verdict is settled by connect and login alone and goes out before any
//! enrichment starts. The connection is closed and the admission permit
//! released on every path.

use std::sync::Arc;
use std::time::Duration;

use ftpsweep_common::error::{EnrichError, ProbeError};
use ftpsweep_common::network::{geo::GeoInfo, host::Host};
use ftpsweep_common::scan::{Finding, ProbeResult, ScanEvent};
use tokio::sync::{OwnedSemaphorePermit, mpsc};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::{ANONYMOUS_PASSWORD, ANONYMOUS_USER};
use crate::ports::{GeoLocator, Resolver, Session, Transport};
use crate::sink::FindingsLog;

pub(crate) struct ProbeContext {
    pub transport: Arc<dyn Transport>,
    pub resolver: Arc<dyn Resolver>,
    pub geo: Arc<dyn GeoLocator>,
    pub findings: FindingsLog,
    pub timeout: Duration,
}

pub(crate) async fn run(
    host: Host,
    ctx: Arc<ProbeContext>,
    events: mpsc::Sender<ScanEvent>,
    _permit: OwnedSemaphorePermit,
) {
    let mut session = match connect(&host, &ctx).await {
        Ok(session) => session,
        Err(e) => {
            emit(&events, ScanEvent::Verdict(ProbeResult::failure(host, e))).await;
            return;
        }
    };

    if let Err(e) = session.login(ANONYMOUS_USER, ANONYMOUS_PASSWORD).await {
        emit(&events, ScanEvent::Verdict(ProbeResult::failure(host, e))).await;
        session.quit().await;
        return;
    }

    emit(&events, ScanEvent::Verdict(ProbeResult::success(host.clone()))).await;

    match locate(&host, &ctx).await {
        Ok(geo) => {
            ctx.findings.record(Finding {
                host: host.clone(),
                geo: geo.clone(),
            });
            emit(&events, ScanEvent::Located { host, geo }).await;
        }
        Err(e) => warn!("{e}"),
    }

    session.quit().await;
}

async fn connect(host: &Host, ctx: &ProbeContext) -> Result<Box<dyn Session>, ProbeError> {
    match timeout(ctx.timeout, ctx.transport.connect(host)).await {
        Ok(result) => result,
        Err(_elapsed) => Err(ProbeError::Timeout(ctx.timeout)),
    }
}

async fn locate(host: &Host, ctx: &ProbeContext) -> Result<GeoInfo, EnrichError> {
    let ip = match host.ipv4() {
        Some(ip) => ip,
        None => ctx.resolver.resolve_ipv4(host).await?,
    };
    ctx.geo.locate(ip).await
}

async fn emit(events: &mpsc::Sender<ScanEvent>, event: ScanEvent) {
    if let Err(e) = events.send(event).await {
        debug!("Result stream closed, dropping {:?}", e.0);
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
