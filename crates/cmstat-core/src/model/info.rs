use std::time::Duration;

use serde::{Serialize, Serializer};

use super::mac::MacAddress;

/// Identity and status of the modem.
///
/// Assembled from two pages. A label the firmware doesn't print simply
/// leaves its field `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceInfo {
    pub model: Option<String>,
    pub vendor: Option<String>,
    pub hardware_version: Option<String>,
    pub firmware: Option<String>,
    pub serial_number: Option<String>,
    pub hfc_mac: Option<MacAddress>,
    pub ethernet_mac: Option<MacAddress>,
    pub ethernet_ip: Option<String>,
    /// Provisioning state, e.g. `Operational`.
    pub status: Option<String>,
    /// Time since the last reboot. Serialized as whole seconds.
    #[serde(serialize_with = "serialize_secs")]
    pub uptime: Option<Duration>,
}

#[allow(clippy::ref_option)]
fn serialize_secs<S: Serializer>(
    value: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(d) => serializer.serialize_u64(d.as_secs()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn uptime_serializes_as_seconds() {
        let info = DeviceInfo {
            serial_number: Some("123456789".into()),
            hfc_mac: Some("0011-22AA-BBCC".parse().unwrap()),
            uptime: Some(Duration::from_secs(1_038_790)),
            ..DeviceInfo::default()
        };

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["uptime"], json!(1_038_790));
        assert_eq!(value["hfc_mac"], json!("00:11:22:aa:bb:cc"));
        assert_eq!(value["ethernet_ip"], json!(null));
    }
}
