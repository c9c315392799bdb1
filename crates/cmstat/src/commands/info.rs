//! `cmstat info` handler.

use std::time::Duration;

use cmstat_core::{DeviceInfo, MacAddress, Modem};

use crate::error::CliError;
use crate::output;

use super::Ctx;

fn detail(info: &DeviceInfo, color: bool) -> String {
    let text = |v: &Option<String>| v.as_deref().unwrap_or("-").to_owned();
    let mac = |v: &Option<MacAddress>| v.as_ref().map_or_else(|| "-".into(), MacAddress::dotted);

    [
        format!("Model:        {}", text(&info.model)),
        format!("Vendor:       {}", text(&info.vendor)),
        format!("Hardware:     {}", text(&info.hardware_version)),
        format!("Firmware:     {}", text(&info.firmware)),
        format!("Serial:       {}", text(&info.serial_number)),
        format!("HFC MAC:      {}", mac(&info.hfc_mac)),
        format!("Ethernet MAC: {}", mac(&info.ethernet_mac)),
        format!("Ethernet IP:  {}", text(&info.ethernet_ip)),
        format!(
            "Status:       {}",
            info.status
                .as_deref()
                .map_or_else(|| "-".into(), |s| output::status_style(s, color))
        ),
        format!(
            "Uptime:       {}",
            info.uptime.map_or_else(|| "-".into(), format_uptime)
        ),
    ]
    .join("\n")
}

fn format_uptime(uptime: Duration) -> String {
    humantime::format_duration(uptime).to_string()
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(modem: &Modem, ctx: &Ctx<'_>) -> Result<(), CliError> {
    let info = modem.info().await?;
    let out = output::render_single(
        ctx.format,
        &info,
        |i| detail(i, ctx.color),
        |i| i.serial_number.clone().unwrap_or_default(),
    );
    output::print_output(&out, ctx.global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn detail_renders_missing_fields_as_dash() {
        let info = DeviceInfo {
            serial_number: Some("123456789".into()),
            hfc_mac: Some("0011-22aa-bbcc".parse().unwrap()),
            status: Some("Operational".into()),
            uptime: Some(Duration::from_secs(1_038_790)),
            ..DeviceInfo::default()
        };
        let out = detail(&info, false);
        assert!(out.contains("Serial:       123456789"));
        assert!(out.contains("HFC MAC:      0011.22aa.bbcc"));
        assert!(out.contains("Ethernet IP:  -"));
        assert!(out.contains("Status:       Operational"));
        assert!(out.contains("Uptime:       12days 33m 10s"));
    }
}
