// ── Record assembly ──
//
// Turns `RowMap`s into records. The row label picks the field, the column
// index picks the channel. Rows with labels we don't know are skipped so
// extra rows on newer firmware are harmless.

use tracing::debug;

use crate::convert::{to_duration, to_float, to_int, to_mac};
use crate::error::{CoreError, ParseError};
use crate::model::{DeviceInfo, DownstreamChannel, SignalData, UpstreamChannel};
use crate::table::RowMap;

/// Writes one cell into the field its row label names. Unknown labels are a
/// no-op.
type ApplyCell<T> = fn(&mut T, &str, &str) -> Result<(), ParseError>;

fn apply_upstream(ch: &mut UpstreamChannel, label: &str, value: &str) -> Result<(), ParseError> {
    match label {
        "Channel ID" => ch.id = to_int(value)?,
        "Frequency" => ch.frequency = to_int(value)?,
        "Ranging Service ID" => ch.ranging_service_id = to_int(value)?,
        "Symbol Rate" => ch.symbol_rate = to_float(value)?,
        "Power Level" => ch.power = to_int(value)?,
        "Upstream Modulation" => ch.modulation = value.to_owned(),
        "Ranging Status" => ch.ranging_status = value.to_owned(),
        _ => {}
    }
    Ok(())
}

fn apply_downstream(
    ch: &mut DownstreamChannel,
    label: &str,
    value: &str,
) -> Result<(), ParseError> {
    match label {
        "Channel ID" => ch.id = to_int(value)?,
        "Frequency" => ch.frequency = to_int(value)?,
        "Signal to Noise Ratio" => ch.snr = to_int(value)?,
        "Downstream Modulation" => ch.modulation = value.to_owned(),
        // The label cell carries a footnote table, so its text runs on.
        l if l.contains("Power Level") => ch.power = to_int(value)?,
        _ => {}
    }
    Ok(())
}

/// Only the counters are read from the codeword table; its own `Channel ID`
/// row repeats what the downstream table already said.
fn apply_codewords(
    ch: &mut DownstreamChannel,
    label: &str,
    value: &str,
) -> Result<(), ParseError> {
    match label {
        "Total Unerrored Codewords" => ch.unerrored_codewords = to_int(value)?,
        "Total Correctable Codewords" => ch.correctable_codewords = to_int(value)?,
        "Total Uncorrectable Codewords" => ch.uncorrectable_codewords = to_int(value)?,
        _ => {}
    }
    Ok(())
}

fn dispatch<T>(channels: &mut [T], rows: &RowMap, apply: ApplyCell<T>) -> Result<(), CoreError> {
    for (label, values) in rows.iter() {
        for (channel, value) in channels.iter_mut().zip(values) {
            apply(channel, label, value).map_err(|e| e.in_row(label))?;
        }
    }
    Ok(())
}

/// Build one [`UpstreamChannel`] per column of the upstream table.
pub fn upstream_channels(rows: &RowMap) -> Result<Vec<UpstreamChannel>, CoreError> {
    let mut channels = vec![UpstreamChannel::default(); rows.columns()];
    dispatch(&mut channels, rows, apply_upstream)?;
    debug!(count = channels.len(), "assembled upstream channels");
    Ok(channels)
}

/// Build one [`DownstreamChannel`] per column, merging the codeword counters
/// from their separate table by column position.
///
/// Both tables must have the same number of columns; otherwise counters
/// would land on the wrong channel, so the mismatch is reported instead.
pub fn downstream_channels(
    signal: &RowMap,
    codewords: &RowMap,
) -> Result<Vec<DownstreamChannel>, CoreError> {
    if codewords.columns() != signal.columns() {
        return Err(CoreError::ColumnMismatch {
            table: crate::modem::CODEWORDS_TABLE.into(),
            expected: signal.columns(),
            found: codewords.columns(),
        });
    }

    let mut channels = vec![DownstreamChannel::default(); signal.columns()];
    dispatch(&mut channels, signal, apply_downstream)?;
    dispatch(&mut channels, codewords, apply_codewords)?;
    debug!(count = channels.len(), "assembled downstream channels");
    Ok(channels)
}

/// Assemble the full signal report from the three signal-page tables.
pub fn signal_data(
    upstream: &RowMap,
    downstream: &RowMap,
    codewords: &RowMap,
) -> Result<SignalData, CoreError> {
    Ok(SignalData {
        downstream: downstream_channels(downstream, codewords)?,
        upstream: upstream_channels(upstream)?,
    })
}

/// Assemble [`DeviceInfo`] from the operation table and the address table.
///
/// Each row contributes its first value column. Either table may carry the
/// identity rows (model, vendor, versions) depending on firmware.
pub fn device_info(operation: &RowMap, addresses: &RowMap) -> Result<DeviceInfo, CoreError> {
    let mut info = DeviceInfo::default();

    for (label, values) in operation.iter().chain(addresses.iter()) {
        let Some(value) = values.first() else {
            continue;
        };
        apply_info(&mut info, label, value).map_err(|e| e.in_row(label))?;
    }

    Ok(info)
}

fn apply_info(info: &mut DeviceInfo, label: &str, value: &str) -> Result<(), ParseError> {
    let text = || Some(value.trim().to_owned());
    match label {
        "System Up Time" => info.uptime = Some(to_duration(value)?),
        "Cable Modem Status" => info.status = text(),
        "Serial Number" => info.serial_number = text(),
        "HFC MAC Address" => info.hfc_mac = Some(to_mac(value)?),
        "Ethernet MAC Address" => info.ethernet_mac = Some(to_mac(value)?),
        "Ethernet IP Address" => info.ethernet_ip = text(),
        "Model Name" => info.model = text(),
        "Vendor Name" => info.vendor = text(),
        "Hardware Version" => info.hardware_version = text(),
        "Firmware Name" | "Software Version" => info.firmware = text(),
        _ => {}
    }
    Ok(())
}
