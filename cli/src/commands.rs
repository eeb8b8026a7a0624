pub mod scan;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use ftpsweep_common::config::{self, Config};

#[derive(Parser)]
#[command(name = "ftpsweep", version)]
#[command(about = "Finds FTP servers that accept anonymous logins.")]
pub struct CommandLine {
    /// File with one host (IPv4 address or hostname) per line
    #[arg(short, long, default_value = config::DEFAULT_INPUT)]
    pub input: PathBuf,

    /// File confirmed hosts are appended to
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Maximum number of hosts probed at the same time
    #[arg(short, long, default_value_t = config::DEFAULT_CONCURRENCY as u32,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub concurrency: u32,

    /// Connection timeout in seconds
    #[arg(short, long, default_value_t = config::DEFAULT_TIMEOUT.as_secs(),
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// FTP control port
    #[arg(short, long, default_value_t = config::DEFAULT_FTP_PORT)]
    pub port: u16,

    /// Geolocation endpoint, the IP address is appended as a path segment
    #[arg(long, default_value = config::DEFAULT_GEO_ENDPOINT)]
    pub geo_endpoint: String,

    /// Less output (-q hides banners, -qq also hides failed hosts)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// More diagnostics (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            concurrency: self.concurrency as usize,
            timeout: Duration::from_secs(self.timeout),
            input: self.input.clone(),
            output: self.output.clone(),
            port: self.port,
            geo_endpoint: self.geo_endpoint.clone(),
            quiet: self.quiet,
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
