// ── Domain model ──
//
// Records handed to consumers. Built fresh per query and owned by the
// caller; nothing here keeps a reference into the fetched documents.

pub mod info;
pub mod mac;
pub mod signal;

pub use info::DeviceInfo;
pub use mac::MacAddress;
pub use signal::{DownstreamChannel, SignalData, UpstreamChannel};
