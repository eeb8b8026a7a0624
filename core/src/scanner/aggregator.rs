use ftpsweep_common::scan::{ScanEvent, ScanSummary};
use tokio::sync::mpsc;

use crate::ports::Reporter;

/// Drains `events` until the stream is closed, in arrival order.
pub async fn aggregate(
    events: &mut mpsc::Receiver<ScanEvent>,
    reporter: &mut dyn Reporter,
) -> ScanSummary {
    let mut summary = ScanSummary::default();

    while let Some(event) = events.recv().await {
        summary.record(&event);
        match &event {
            ScanEvent::Verdict(result) => reporter.verdict(result),
            ScanEvent::Located { host, geo } => reporter.located(host, geo),
        }
    }

    summary
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
