//! # Findings Log
//!
//! Append-only record of confirmed hosts, one line per finding.
//!
//! Probes never touch the file themselves. They hand findings to a
//! [`FindingsLog`] handle and a single [`FindingsWriter`] task owns the file,
//! so concurrent probes can never interleave partial lines.

use std::io;
use std::path::Path;

use anyhow::Context;
use ftpsweep_common::error::EnrichError;
use ftpsweep_common::scan::Finding;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

#[derive(Clone)]
pub struct FindingsLog {
    tx: UnboundedSender<Finding>,
}

pub struct FindingsWriter<W> {
    out: W,
    rx: UnboundedReceiver<Finding>,
    written: usize,
    failed: usize,
}

impl FindingsLog {
    /// Opens `path` for appending, creating it when missing.
    pub async fn open(path: &Path) -> anyhow::Result<(Self, FindingsWriter<File>)> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("Error opening {} file", path.display()))?;
        Ok(Self::with_writer(file))
    }

    pub fn with_writer<W>(out: W) -> (Self, FindingsWriter<W>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let writer = FindingsWriter {
            out,
            rx,
            written: 0,
            failed: 0,
        };
        (Self { tx }, writer)
    }

    pub fn record(&self, finding: Finding) {
        if let Err(e) = self.tx.send(finding) {
            warn!("Findings writer has stopped, dropping: {}", e.0);
        }
    }
}

impl<W> FindingsWriter<W>
where
    W: AsyncWrite + Unpin,
{
    /// Writes findings until every [`FindingsLog`] handle is dropped.
    pub async fn run(mut self) -> Self {
        while let Some(finding) = self.rx.recv().await {
            match self.append(&finding).await {
                Ok(()) => self.written += 1,
                Err(e) => {
                    self.failed += 1;
                    warn!("{} (lost: {finding})", EnrichError::Write(e));
                }
            }
        }
        self
    }

    async fn append(&mut self, finding: &Finding) -> io::Result<()> {
        let line = format!("{finding}\n");
        self.out.write_all(line.as_bytes()).await?;
        self.out.flush().await
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.out
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
