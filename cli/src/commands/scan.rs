use std::time::{Duration, Instant};

use colored::*;
use ftpsweep_common::config::Config;
use ftpsweep_common::network::{geo::GeoInfo, host::Host};
use ftpsweep_common::scan::{ProbeResult, ScanSummary};
use ftpsweep_core::ports::Reporter;
use ftpsweep_core::scanner::{self, ScanService};
use tracing::{Instrument, Span, info, info_span, warn};

use crate::terminal::{colors, print, spinner};

/// Prints each event as it arrives and keeps the spinner up to date.
struct TerminalReporter {
    quiet: u8,
    span: Span,
    probed: usize,
    open: usize,
}

impl Reporter for TerminalReporter {
    fn verdict(&mut self, result: &ProbeResult) {
        self.probed += 1;
        match &result.error {
            None => {
                self.open += 1;
                print::succeeded(&result.host);
            }
            Some(e) if self.quiet < 2 => print::failed(&result.host, e),
            Some(_) => {}
        }
        spinner::report_scan_progress(&self.span, self.probed, self.open);
    }

    fn located(&mut self, host: &Host, geo: &GeoInfo) {
        print::location(host, geo);
    }
}

pub async fn scan(cfg: &Config) -> anyhow::Result<()> {
    print::header("starting scanner", cfg.quiet);
    info!(
        "Probing hosts from {} with {} workers",
        cfg.input.display(),
        cfg.concurrency
    );

    let service = ScanService::from_config(cfg)?;

    let span = info_span!("scan", indicatif.pb_show = true);
    spinner::style_scan_span(&span);

    let mut reporter = TerminalReporter {
        quiet: cfg.quiet,
        span: span.clone(),
        probed: 0,
        open: 0,
    };

    let start_time = Instant::now();
    let summary = scanner::perform_scan(&service, cfg, &mut reporter)
        .instrument(span)
        .await?;

    scan_ends(&summary, start_time.elapsed(), cfg);
    Ok(())
}

fn scan_ends(summary: &ScanSummary, total_time: Duration, cfg: &Config) {
    if summary.probed == 0 {
        print::header("no hosts to scan", cfg.quiet);
        return;
    }

    let open: ColoredString = format!("{} open servers", summary.succeeded).bold().green();
    let probed: ColoredString = format!("{} hosts", summary.probed).bold();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Scan Complete: {open} among {probed} in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => info!(target: "ftpsweep::success", "{}", output),
    }

    if summary.persisted > 0 {
        info!(
            target: "ftpsweep::success",
            "{} findings appended to {}",
            summary.persisted,
            cfg.output.display()
        );
    }

    let lost = summary.located.saturating_sub(summary.persisted);
    if lost > 0 {
        warn!("{lost} findings could not be written to {}", cfg.output.display());
    }
}
