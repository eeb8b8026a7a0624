use colored::*;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
    "▁▁▁▁▁",
];

pub fn style_scan_span(span: &Span) {
    let style = ProgressStyle::default_spinner().tick_strings(TICKS);
    span.pb_set_style(&style);
    span.pb_set_message("Waiting for the first answers...");
}

pub fn report_scan_progress(span: &Span, probed: usize, open: usize) {
    span.pb_set_message(&format!(
        "Probed {} hosts, {} open so far...",
        probed.to_string().bold(),
        open.to_string().green().bold()
    ));
}
