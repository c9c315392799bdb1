//! `cmstat channels` handler.

use tabled::Tabled;

use cmstat_core::{DownstreamChannel, Modem, SignalData, UpstreamChannel};

use crate::cli::{ChannelsArgs, Direction, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::Ctx;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct DownstreamRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Power")]
    power: String,
    #[tabled(rename = "SNR")]
    snr: String,
    #[tabled(rename = "Modulation")]
    modulation: String,
    #[tabled(rename = "Unerrored")]
    unerrored: u64,
    #[tabled(rename = "Correctable")]
    correctable: u64,
    #[tabled(rename = "Uncorrectable")]
    uncorrectable: u64,
}

impl From<&DownstreamChannel> for DownstreamRow {
    fn from(c: &DownstreamChannel) -> Self {
        Self {
            id: c.id,
            frequency: format_mhz(c.frequency),
            power: format!("{} dBmV", c.power),
            snr: format!("{} dB", c.snr),
            modulation: c.modulation.clone(),
            unerrored: c.unerrored_codewords,
            correctable: c.correctable_codewords,
            uncorrectable: c.uncorrectable_codewords,
        }
    }
}

#[derive(Tabled)]
struct UpstreamRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Ranging SID")]
    ranging_service_id: u32,
    #[tabled(rename = "Symbol Rate")]
    symbol_rate: String,
    #[tabled(rename = "Power")]
    power: String,
    #[tabled(rename = "Modulation")]
    modulation: String,
    #[tabled(rename = "Ranging")]
    ranging_status: String,
}

impl From<&UpstreamChannel> for UpstreamRow {
    fn from(c: &UpstreamChannel) -> Self {
        Self {
            id: c.id,
            frequency: format_mhz(c.frequency),
            ranging_service_id: c.ranging_service_id,
            symbol_rate: format!("{} Msym/s", c.symbol_rate),
            power: format!("{} dBmV", c.power),
            modulation: c.modulation.clone(),
            ranging_status: c.ranging_status.clone(),
        }
    }
}

/// `555000000` -> `555 MHz`, `30600000` -> `30.6 MHz`.
fn format_mhz(hz: u64) -> String {
    let whole = hz / 1_000_000;
    let frac = hz % 1_000_000;
    if frac == 0 {
        return format!("{whole} MHz");
    }
    let frac = format!("{frac:06}");
    format!("{whole}.{} MHz", frac.trim_end_matches('0'))
}

fn render_both(signal: &SignalData, ctx: &Ctx<'_>) -> String {
    match ctx.format {
        OutputFormat::Table => {
            let down: Vec<DownstreamRow> = signal.downstream.iter().map(Into::into).collect();
            let up: Vec<UpstreamRow> = signal.upstream.iter().map(Into::into).collect();
            format!(
                "{}\n{}\n\n{}\n{}",
                output::heading("Downstream", ctx.color),
                output::render_table(&down),
                output::heading("Upstream", ctx.color),
                output::render_table(&up),
            )
        }
        OutputFormat::Plain => signal
            .downstream
            .iter()
            .map(|c| c.id)
            .chain(signal.upstream.iter().map(|c| c.id))
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        structured => output::render_structured(structured, signal),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(modem: &Modem, args: &ChannelsArgs, ctx: &Ctx<'_>) -> Result<(), CliError> {
    let signal = modem.signal_data().await?;

    let out = match args.direction {
        Some(Direction::Downstream) => output::render_list(
            ctx.format,
            &signal.downstream,
            |c| DownstreamRow::from(c),
            |c| c.id.to_string(),
        ),
        Some(Direction::Upstream) => output::render_list(
            ctx.format,
            &signal.upstream,
            |c| UpstreamRow::from(c),
            |c| c.id.to_string(),
        ),
        None => render_both(&signal, ctx),
    };
    output::print_output(&out, ctx.global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_in_mhz() {
        assert_eq!(format_mhz(555_000_000), "555 MHz");
        assert_eq!(format_mhz(30_600_000), "30.6 MHz");
        assert_eq!(format_mhz(18_250_000), "18.25 MHz");
    }

    #[test]
    fn downstream_row_units() {
        let row = DownstreamRow::from(&DownstreamChannel {
            id: 3,
            frequency: 555_000_000,
            power: -1,
            modulation: "QAM256".into(),
            snr: 38,
            unerrored_codewords: 10,
            correctable_codewords: 2,
            uncorrectable_codewords: 1,
        });
        assert_eq!(row.power, "-1 dBmV");
        assert_eq!(row.snr, "38 dB");
        assert_eq!(row.frequency, "555 MHz");
    }
}
