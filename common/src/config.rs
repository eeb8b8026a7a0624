use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CONCURRENCY: usize = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_INPUT: &str = "hosts.txt";
pub const DEFAULT_OUTPUT: &str = "found.txt";
pub const DEFAULT_FTP_PORT: u16 = 21;
pub const DEFAULT_GEO_ENDPOINT: &str = "http://ip-api.com/json";

#[derive(Clone, Debug)]
pub struct Config {
    /// Upper bound on probes holding a connection at the same time.
    pub concurrency: usize,
    /// Bounds TCP establishment plus the server greeting.
    ///
    /// Login, DNS and geolocation are not covered by it.
    pub timeout: Duration,
    /// Newline separated list of hosts.
    pub input: PathBuf,
    /// Findings are appended here, existing content is never touched.
    pub output: PathBuf,
    pub port: u16,
    /// Base URL of the geolocation service, the IP is appended as a path segment.
    pub geo_endpoint: String,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            port: DEFAULT_FTP_PORT,
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            quiet: 0,
        }
    }
}
