use std::sync::Arc;

use anyhow::Context;
use ftpsweep_common::scan::ScanEvent;
use tokio::io::AsyncRead;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, error};

use super::probe::{self, ProbeContext};
use crate::hosts::HostSource;

/// Spawns one probe per host, never more than `limit` at once.
///
/// Returns once every probe has finished. `events` is dropped on return, so
/// the stream closes as soon as the last probe lets go of its sender.
pub(crate) async fn dispatch<R>(
    mut hosts: HostSource<R>,
    ctx: Arc<ProbeContext>,
    limit: usize,
    events: mpsc::Sender<ScanEvent>,
) -> anyhow::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let tokens = Arc::new(Semaphore::new(limit));
    let mut probes: JoinSet<()> = JoinSet::new();
    let mut dispatched: usize = 0;

    let admission: anyhow::Result<()> = loop {
        let host = match hosts.next_host().await {
            Ok(Some(host)) => host,
            Ok(None) => break Ok(()),
            Err(e) => break Err(e).context("reading host list"),
        };

        let permit = match tokens.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(e) => break Err(e).context("admission pool closed"),
        };

        while let Some(finished) = probes.try_join_next() {
            report_panic(finished);
        }

        debug!(outstanding = probes.len(), "dispatching {host}");
        probes.spawn(probe::run(host, ctx.clone(), events.clone(), permit));
        dispatched += 1;
    };

    while let Some(finished) = probes.join_next().await {
        report_panic(finished);
    }
    drop(events);

    admission?;
    Ok(dispatched)
}

fn report_panic(finished: Result<(), tokio::task::JoinError>) {
    if let Err(e) = finished {
        error!("Probe task failed: {e}");
    }
}
