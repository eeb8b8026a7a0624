use std::net::Ipv4Addr;

use async_trait::async_trait;
use ftpsweep_common::error::EnrichError;
use ftpsweep_common::network::geo::GeoInfo;
use ftpsweep_protocols::geo;

use crate::ports::GeoLocator;

/// Client for ip-api.com style services: `GET <endpoint>/<ip>` returning JSON.
pub struct HttpGeoLocator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGeoLocator {
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ftpsweep/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, ip: Ipv4Addr) -> String {
        format!("{}/{ip}", self.endpoint)
    }
}

#[async_trait]
impl GeoLocator for HttpGeoLocator {
    async fn locate(&self, ip: Ipv4Addr) -> Result<GeoInfo, EnrichError> {
        let failed = |reason: String| EnrichError::Geo {
            ip: ip.to_string(),
            reason,
        };

        let response = self
            .client
            .get(self.url(ip))
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("request failed with status: {status}")));
        }

        let body = response.bytes().await.map_err(|e| failed(e.to_string()))?;
        geo::decode(&body).map_err(|e| failed(e.to_string()))
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
