use async_trait::async_trait;
use ftpsweep_common::error::ProbeError;
use ftpsweep_common::network::host::Host;
use suppaftp::tokio::AsyncFtpStream;
use suppaftp::types::Response;
use suppaftp::FtpError;
use tracing::debug;

use crate::ports::{Session, Transport};

/// Plain (non-TLS) FTP over TCP.
pub struct FtpTransport {
    port: u16,
}

struct FtpSession {
    host: Host,
    ftp: AsyncFtpStream,
}

impl FtpTransport {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

#[async_trait]
impl Transport for FtpTransport {
    async fn connect(&self, host: &Host) -> Result<Box<dyn Session>, ProbeError> {
        let ftp = AsyncFtpStream::connect((host.as_str(), self.port))
            .await
            .map_err(greeting_error)?;

        if let Some(welcome) = ftp.get_welcome_msg() {
            debug!("{host}: {}", welcome.trim_end());
        }

        Ok(Box::new(FtpSession {
            host: host.clone(),
            ftp,
        }))
    }
}

#[async_trait]
impl Session for FtpSession {
    async fn login(&mut self, user: &str, password: &str) -> Result<(), ProbeError> {
        self.ftp.login(user, password).await.map_err(login_error)?;
        debug!("{}: logged in as {user}", self.host);
        Ok(())
    }

    async fn quit(&mut self) {
        if let Err(e) = self.ftp.quit().await {
            debug!("{}: QUIT failed: {e}", self.host);
        }
    }
}

fn greeting_error(err: FtpError) -> ProbeError {
    match err {
        FtpError::ConnectionError(e) => ProbeError::Connect(e),
        FtpError::UnexpectedResponse(reply) => {
            ProbeError::Protocol(format!("unexpected greeting: {}", describe(&reply)))
        }
        other => ProbeError::Protocol(other.to_string()),
    }
}

fn login_error(err: FtpError) -> ProbeError {
    match err {
        FtpError::UnexpectedResponse(reply) => ProbeError::Auth(describe(&reply)),
        FtpError::ConnectionError(e) => {
            ProbeError::Protocol(format!("connection lost during login: {e}"))
        }
        other => ProbeError::Protocol(other.to_string()),
    }
}

/// Server reply as `<code> <text>`.
fn describe(reply: &Response) -> String {
    let code = reply.status.code().to_string();
    let text = String::from_utf8_lossy(&reply.body);
    let text = text.trim();
    if text.starts_with(&code) {
        text.to_string()
    } else {
        format!("{code} {text}")
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
