use serde::Serialize;

/// One upstream (modem → headend) channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpstreamChannel {
    pub id: u32,
    /// Center frequency in Hz.
    pub frequency: u64,
    pub ranging_service_id: u32,
    /// Msym/sec.
    pub symbol_rate: f64,
    /// dBmV.
    pub power: i32,
    pub modulation: String,
    pub ranging_status: String,
}

/// One downstream (headend → modem) channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DownstreamChannel {
    pub id: u32,
    /// Center frequency in Hz.
    pub frequency: u64,
    /// dBmV.
    pub power: i32,
    pub modulation: String,
    /// dB.
    pub snr: i32,
    pub unerrored_codewords: u64,
    pub correctable_codewords: u64,
    pub uncorrectable_codewords: u64,
}

/// Every bonded channel the modem reports, in table column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignalData {
    pub downstream: Vec<DownstreamChannel>,
    pub upstream: Vec<UpstreamChannel>,
}
