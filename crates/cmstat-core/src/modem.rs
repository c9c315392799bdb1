// ── Modem client ──
//
// One method per query. Each call fetches its pages fresh, parses them,
// and assembles the result; nothing is cached between calls. Pages are
// fetched one after another and every parsed document is dropped before
// the next request goes out.

use scraper::Html;
use tracing::{debug, info};

use cmstat_api::{PageClient, TransportConfig};

use crate::assemble;
use crate::config::ModemConfig;
use crate::error::CoreError;
use crate::model::{DeviceInfo, SignalData};
use crate::table::{HeaderLabel, RowMap, TableLocator, find_table, parse_table};

/// Operational status page.
pub const STATUS_PAGE: &str = "indexData.htm";
/// Serial number and address page.
pub const ADDRESS_PAGE: &str = "cmAddressData.htm";
/// Per-channel signal page.
pub const SIGNAL_PAGE: &str = "cmSignalData.htm";

pub const OPERATION_TABLE: &str = "Cable Modem Operation";
pub const ADDRESS_TABLE: &str = "Item";
pub const UPSTREAM_TABLE: &str = "Upstream";
pub const DOWNSTREAM_TABLE: &str = "Downstream";
pub const CODEWORDS_TABLE: &str = "Signal Stats (Codewords)";

/// Client for a single modem.
///
/// Generic over the [`TableLocator`] so alternate page layouts can swap in
/// their own table lookup without touching parsing or assembly.
pub struct Modem<L = HeaderLabel> {
    pages: PageClient,
    locator: L,
}

impl Modem {
    /// Create a client for the modem described by `config`.
    pub fn new(config: &ModemConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let pages = PageClient::new(config.url.clone(), &transport)?;
        Ok(Self::with_pages(pages))
    }

    /// Wrap an existing page client.
    pub fn with_pages(pages: PageClient) -> Self {
        Self {
            pages,
            locator: HeaderLabel,
        }
    }
}

impl<L: TableLocator> Modem<L> {
    /// Replace the table lookup strategy.
    pub fn with_locator<M: TableLocator>(self, locator: M) -> Modem<M> {
        Modem {
            pages: self.pages,
            locator,
        }
    }

    /// The modem base URL.
    pub fn url(&self) -> &url::Url {
        self.pages.base_url()
    }

    /// Identity, addresses and uptime.
    ///
    /// Fetches the status page and then the address page.
    pub async fn info(&self) -> Result<DeviceInfo, CoreError> {
        let [operation] = self.fetch_tables(STATUS_PAGE, [OPERATION_TABLE]).await?;
        let [addresses] = self.fetch_tables(ADDRESS_PAGE, [ADDRESS_TABLE]).await?;

        let info = assemble::device_info(&operation, &addresses)?;
        info!(serial = ?info.serial_number, "device info assembled");
        Ok(info)
    }

    /// Per-channel upstream and downstream statistics.
    pub async fn signal_data(&self) -> Result<SignalData, CoreError> {
        let [upstream, downstream, codewords] = self
            .fetch_tables(
                SIGNAL_PAGE,
                [UPSTREAM_TABLE, DOWNSTREAM_TABLE, CODEWORDS_TABLE],
            )
            .await?;

        let data = assemble::signal_data(&upstream, &downstream, &codewords)?;
        info!(
            upstream = data.upstream.len(),
            downstream = data.downstream.len(),
            "signal data assembled"
        );
        Ok(data)
    }

    /// Fetch one page and extract the named tables, in order.
    async fn fetch_tables<const N: usize>(
        &self,
        page: &str,
        labels: [&str; N],
    ) -> Result<[RowMap; N], CoreError> {
        let body = self.pages.fetch_page(page).await?;
        debug!(page, bytes = body.len(), "extracting tables");
        self.extract_tables(&body, labels)
    }

    fn extract_tables<const N: usize>(
        &self,
        body: &str,
        labels: [&str; N],
    ) -> Result<[RowMap; N], CoreError> {
        let document = Html::parse_document(body);
        let mut tables = [(); N].map(|()| RowMap::default());
        for (slot, label) in tables.iter_mut().zip(labels) {
            let table = find_table(&self.locator, &document, label)?;
            *slot = parse_table(table);
        }
        Ok(tables)
    }
}
