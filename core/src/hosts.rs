//! The host list.
//!
//! Hosts are read lazily, one line at a time, so the list can be longer than
//! what would comfortably fit in memory.

use std::io;
use std::path::Path;

use anyhow::Context;
use ftpsweep_common::network::host::Host;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

pub struct HostSource<R> {
    lines: Lines<BufReader<R>>,
}

impl HostSource<File> {
    pub async fn open(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .await
            .with_context(|| format!("Error opening {} file", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<R> HostSource<R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }

    /// Next non-blank entry, `Ok(None)` once the source is exhausted.
    pub async fn next_host(&mut self) -> io::Result<Option<Host>> {
        while let Some(line) = self.lines.next_line().await? {
            if let Some(host) = Host::parse(&line) {
                return Ok(Some(host));
            }
        }
        Ok(None)
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
