// Page fetcher for the modem's embedded web server
//
// Wraps `reqwest::Client` with page URL construction and strict status
// handling. The body comes back as text; parsing it into a document is the
// caller's business so no parsed tree is ever held across an await.

use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the modem's status pages.
///
/// Every page lives directly under the base URL (`http://192.168.100.1/`),
/// e.g. `indexData.htm` or `cmSignalData.htm`.
pub struct PageClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PageClient {
    /// Create a new page client from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a page client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The modem base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL for a page: `{base}/{page}`.
    pub fn page_url(&self, page: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let page = page.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{page}"))?)
    }

    /// GET a page and return its body.
    ///
    /// Only `200 OK` counts as success; redirects are followed by reqwest
    /// before the status is checked.
    pub async fn fetch_page(&self, page: &str) -> Result<String, Error> {
        let url = self.page_url(page)?;
        debug!("GET {}", url);

        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        trace!(page, bytes = body.len(), "page fetched");
        Ok(body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> PageClient {
        PageClient::with_client(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn page_url_joins_without_double_slash() {
        let c = client("http://192.168.100.1/");
        assert_eq!(
            c.page_url("indexData.htm").unwrap().as_str(),
            "http://192.168.100.1/indexData.htm"
        );
    }

    #[test]
    fn page_url_keeps_base_path() {
        let c = client("http://modem.lan:8080/cm");
        assert_eq!(
            c.page_url("/cmSignalData.htm").unwrap().as_str(),
            "http://modem.lan:8080/cm/cmSignalData.htm"
        );
    }
}
