#![allow(clippy::unwrap_used)]
// End-to-end tests for `Modem` against recorded status pages served by wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use scraper::{ElementRef, Html};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cmstat_core::{CoreError, Modem, ModemConfig, UpstreamChannel};

const INDEX_PAGE: &str = include_str!("fixtures/indexData.htm");
const ADDRESS_PAGE: &str = include_str!("fixtures/cmAddressData.htm");
const SIGNAL_PAGE: &str = include_str!("fixtures/cmSignalData.htm");

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Modem) {
    let server = MockServer::start().await;
    let config = ModemConfig::from_host(&server.uri())
        .unwrap()
        .with_timeout(Duration::from_secs(5));
    let modem = Modem::new(&config).unwrap();
    (server, modem)
}

async fn serve(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{page}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

// ── Device info ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_info_merges_both_pages() {
    let (server, modem) = setup().await;
    serve(&server, "indexData.htm", INDEX_PAGE).await;
    serve(&server, "cmAddressData.htm", ADDRESS_PAGE).await;

    let info = modem.info().await.unwrap();

    assert_eq!(info.status.as_deref(), Some("Operational"));
    assert_eq!(info.uptime, Some(Duration::from_secs(1_038_790)));
    assert_eq!(info.serial_number.as_deref(), Some("398154123456789"));
    assert_eq!(info.hfc_mac.as_ref().unwrap().dotted(), "0011.22aa.bbcc");
    assert_eq!(
        info.ethernet_mac.as_ref().unwrap().colon(),
        "00:11:22:aa:bb:cd"
    );
    assert_eq!(info.ethernet_ip.as_deref(), Some("192.168.100.1"));
    assert_eq!(info.model, None);
}

#[tokio::test]
async fn test_info_without_ip_row() {
    let (server, modem) = setup().await;
    let page = ADDRESS_PAGE.replace(
        "<TD>Ethernet IP Address</TD>\n    <TD>192.168.100.1</TD>",
        "<TD>Cable Modem IP Address</TD>\n    <TD>10.1.2.3</TD>",
    );
    serve(&server, "indexData.htm", INDEX_PAGE).await;
    serve(&server, "cmAddressData.htm", &page).await;

    let info = modem.info().await.unwrap();

    assert_eq!(info.ethernet_ip, None);
    assert_eq!(info.serial_number.as_deref(), Some("398154123456789"));
}

#[tokio::test]
async fn test_info_stops_at_first_failed_fetch() {
    let (server, modem) = setup().await;
    Mock::given(method("GET"))
        .and(path("/indexData.htm"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cmAddressData.htm"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ADDRESS_PAGE))
        .expect(0)
        .mount(&server)
        .await;

    let err = modem.info().await.unwrap_err();

    assert!(
        matches!(
            err,
            CoreError::Fetch(cmstat_api::Error::Status { status: 500, .. })
        ),
        "expected Fetch error, got: {err:?}"
    );
}

// ── Signal data ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_signal_data_from_recorded_page() {
    let (server, modem) = setup().await;
    serve(&server, "cmSignalData.htm", SIGNAL_PAGE).await;

    let signal = modem.signal_data().await.unwrap();

    assert_eq!(signal.downstream.len(), 8);
    assert_eq!(signal.upstream.len(), 4);

    let ids: Vec<u32> = signal.downstream.iter().map(|c| c.id).collect();
    assert_eq!(ids, [3, 1, 2, 4, 5, 6, 7, 8]);

    let first = &signal.downstream[0];
    assert_eq!(first.frequency, 555_000_000);
    assert_eq!(first.snr, 38);
    assert_eq!(first.power, -1);
    assert_eq!(first.modulation, "QAM256");
    assert_eq!(first.unerrored_codewords, 123_456_789);
    assert_eq!(first.correctable_codewords, 10);
    assert_eq!(first.uncorrectable_codewords, 500);

    let last = &signal.downstream[7];
    assert_eq!(last.frequency, 597_000_000);
    assert_eq!(last.power, 3);
    assert_eq!(last.unerrored_codewords, 123_463_789);
    assert_eq!(last.uncorrectable_codewords, 507);

    assert_eq!(
        signal.upstream[0],
        UpstreamChannel {
            id: 3,
            frequency: 30_600_000,
            ranging_service_id: 4081,
            symbol_rate: 5.12,
            power: 44,
            modulation: "[3] QPSK [3] 64QAM".into(),
            ranging_status: "Success".into(),
        }
    );
}

#[tokio::test]
async fn test_missing_codeword_table() {
    let (server, modem) = setup().await;
    let page = SIGNAL_PAGE.replace("Signal Stats (Codewords)", "Codeword Stats");
    serve(&server, "cmSignalData.htm", &page).await;

    let err = modem.signal_data().await.unwrap_err();

    match err {
        CoreError::TableNotFound { label } => assert_eq!(label, "Signal Stats (Codewords)"),
        other => panic!("expected TableNotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_page() {
    let (server, modem) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = modem.signal_data().await.unwrap_err();

    assert!(err.is_fetch(), "expected fetch error, got: {err:?}");
}

// ── Pluggable locator ───────────────────────────────────────────────

/// Finds tables by their position on the page instead of by header text.
fn nth_table<'a>(document: &'a Html, label: &str) -> Option<ElementRef<'a>> {
    let index = match label {
        "Downstream" => 0,
        "Upstream" => 1,
        "Signal Stats (Codewords)" => 2,
        _ => return None,
    };
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| {
            el.value().name() == "table"
                && el.value().attr("align") == Some("center")
        })
        .nth(index)
}

#[tokio::test]
async fn test_custom_locator_for_relabelled_firmware() {
    let (server, modem) = setup().await;
    let page = SIGNAL_PAGE
        .replace("Downstream </FONT>", "Downstream Bonded Channels</FONT>")
        .replace("Upstream </FONT>", "Upstream Bonded Channels</FONT>");
    serve(&server, "cmSignalData.htm", &page).await;

    let modem = modem.with_locator(nth_table);
    let signal = modem.signal_data().await.unwrap();

    assert_eq!(signal.downstream.len(), 8);
    assert_eq!(signal.upstream.len(), 4);
}
