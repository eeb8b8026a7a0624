use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ftpsweep_common::config::Config;
use ftpsweep_common::network::{geo::GeoInfo, host::Host};
use ftpsweep_common::scan::ProbeResult;
use ftpsweep_core::network::{ftp::FtpTransport, geo::HttpGeoLocator, resolver::SystemResolver};
use ftpsweep_core::ports::Reporter;
use ftpsweep_core::scanner::ScanService;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Scratch directory holding one scan's input and output files.
pub struct Workspace {
    pub dir: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!(
            "ftpsweep-it-{}-{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    pub fn hosts(&self, content: &str) -> PathBuf {
        let path = self.dir.join("hosts.txt");
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn output(&self) -> PathBuf {
        self.dir.join("found.txt")
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output()).unwrap_or_default()
    }

    pub fn config(&self, ftp_port: u16, geo_endpoint: &str) -> Config {
        Config {
            input: self.dir.join("hosts.txt"),
            output: self.output(),
            port: ftp_port,
            geo_endpoint: geo_endpoint.to_string(),
            ..Config::default()
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Production wiring against whatever servers `cfg` points at.
pub fn service(cfg: &Config) -> ScanService {
    ScanService::new(
        Arc::new(FtpTransport::new(cfg.port)),
        Arc::new(SystemResolver),
        Arc::new(HttpGeoLocator::new(&cfg.geo_endpoint).unwrap()),
    )
}

/// Loopback FTP server answering `PASS` with `pass_reply` on every connection.
pub async fn ftp_server(pass_reply: &'static str) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let (rd, mut wr) = stream.into_split();
                let mut rd = BufReader::new(rd);
                if wr.write_all(b"220 integration server\r\n").await.is_err() {
                    return;
                }
                let mut line = String::new();
                while rd.read_line(&mut line).await.unwrap_or(0) > 0 {
                    let reply: &[u8] = match line.split_whitespace().next() {
                        Some("USER") => b"331 any password will do\r\n",
                        Some("PASS") => pass_reply.as_bytes(),
                        Some("QUIT") => b"221 goodbye\r\n",
                        _ => b"502 not implemented\r\n",
                    };
                    if wr.write_all(reply).await.is_err() {
                        return;
                    }
                    line.clear();
                }
            });
        }
    });
    port
}

/// Loopback geolocation service replying with `body` to every request.
pub async fn geo_server(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
            });
        }
    });
    format!("http://{addr}/json")
}

/// A port nothing listens on.
pub async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

/// Records the console transcript the terminal reporter would print.
#[derive(Default)]
pub struct Transcript {
    pub lines: Vec<String>,
}

impl Reporter for Transcript {
    fn verdict(&mut self, result: &ProbeResult) {
        let line = match &result.error {
            None => format!("[+] {} FTP Anonymous Login Succeeded.", result.host),
            Some(e) => format!("[-] {} FTP Anonymous Login Failed: {e}", result.host),
        };
        self.lines.push(line);
    }

    fn located(&mut self, host: &Host, geo: &GeoInfo) {
        self.lines
            .push(format!("[@] {host} ISP: {} Country: {}", geo.isp, geo.country));
    }
}
