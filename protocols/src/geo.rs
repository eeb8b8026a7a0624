//! Decoding of the geolocation service's JSON body.
//!
//! The service answers `200 OK` even when it refuses a lookup (private or
//! reserved ranges, quota), flagging it with `"status": "fail"` and a
//! `message`. Such bodies are decoded into [`GeoBodyError::Rejected`].

use ftpsweep_common::network::geo::GeoInfo;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoBodyError {
    #[error("malformed body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("lookup rejected: {0}")]
    Rejected(String),

    #[error("response has no {0} field")]
    Missing(&'static str),
}

#[derive(Deserialize)]
struct LookupBody {
    status: Option<String>,
    message: Option<String>,
    isp: Option<String>,
    country: Option<String>,
}

pub fn decode(body: &[u8]) -> Result<GeoInfo, GeoBodyError> {
    let body: LookupBody = serde_json::from_slice(body)?;

    if body.status.as_deref() == Some("fail") {
        let reason = body.message.unwrap_or_else(|| "no reason given".to_string());
        return Err(GeoBodyError::Rejected(reason));
    }

    Ok(GeoInfo {
        isp: body.isp.ok_or(GeoBodyError::Missing("isp"))?,
        country: body.country.ok_or(GeoBodyError::Missing("country"))?,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
