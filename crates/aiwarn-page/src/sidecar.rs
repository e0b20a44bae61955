use aiwarn_core::{AiwarnError, AiwarnResult, PageMetadata};
use tracing::debug;
use url::Url;

/// Fixed suffix appended to the page path to reach its metadata sidecar.
pub const SIDECAR_SUFFIX: &str = "/data.json";

/// Sibling resource carrying the page's metadata: same origin and path,
/// fixed suffix appended.
pub fn sidecar_url(page_url: &Url) -> String {
    format!(
        "{}{}{}",
        page_url.origin().ascii_serialization(),
        page_url.path(),
        SIDECAR_SUFFIX
    )
}

/// Retrieves the metadata sidecar for a product page. One best-effort GET,
/// no timeout, no retry.
pub struct SidecarClient {
    client: reqwest::Client,
}

impl SidecarClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fail-silent fetch: any non-200 status, network failure, or malformed
    /// body yields `None`. Absence of proof of AI content must not itself
    /// alarm the user, so nothing is surfaced.
    pub async fn fetch(&self, page_url: &Url) -> Option<PageMetadata> {
        match self.try_fetch(page_url).await {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                debug!(url = %page_url, error = %e, "sidecar fetch failed, suppressing warning");
                None
            }
        }
    }

    async fn try_fetch(&self, page_url: &Url) -> AiwarnResult<PageMetadata> {
        let url = sidecar_url(page_url);
        let resp = self.client.get(&url).send().await?;
        if resp.status().as_u16() != 200 {
            return Err(AiwarnError::Sidecar(format!("status {}", resp.status())));
        }
        Ok(resp.json::<PageMetadata>().await?)
    }
}

impl Default for SidecarClient {
    fn default() -> Self {
        Self::new()
    }
}
