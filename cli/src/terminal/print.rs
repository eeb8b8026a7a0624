use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use ftpsweep_common::network::{geo::GeoInfo, host::Host};
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Widest key printed by [`as_tree_one_level`].
const KEY_WIDTH: usize = 7;

pub fn print(msg: &str) {
    info!(target: "ftpsweep::print", raw_msg = msg);
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ FTPSWEEP v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn succeeded(host: &Host) {
    print(&format!(
        "{} {} {}",
        "[+]".green().bold(),
        host.as_str().color(colors::HOST),
        "FTP Anonymous Login Succeeded.".green()
    ));
}

pub fn failed(host: &Host, detail: &dyn Display) {
    print(&format!(
        "{} {} {} {}",
        "[-]".red().bold(),
        host.as_str().color(colors::HOST),
        "FTP Anonymous Login Failed:".red(),
        detail.to_string().color(colors::SEPARATOR)
    ));
}

pub fn location(host: &Host, geo: &GeoInfo) {
    print(&format!(
        "{} {}",
        "[@]".color(colors::ACCENT),
        host.as_str().color(colors::PRIMARY)
    ));
    as_tree_one_level(vec![
        ("ISP".to_string(), geo.isp.normal()),
        ("Country".to_string(), geo.country.normal()),
    ]);
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.len()));
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}
