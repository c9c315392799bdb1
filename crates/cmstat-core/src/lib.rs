//! Table extraction and record assembly for cable modem status pages.
//!
//! The modem serves its telemetry as hand-written HTML tables: one row per
//! attribute, one column per channel. This crate turns those pages into
//! typed records:
//!
//! - **[`table`]**: finds a table by the text of one of its header cells
//!   ([`TableLocator`]) and flattens it into a [`RowMap`] of
//!   label → per-column values.
//! - **[`convert`]**: strict coercion of cell text into integers, floats,
//!   durations and MAC addresses.
//! - **[`assemble`]**: dispatches `RowMap` rows into [`DeviceInfo`] and
//!   per-channel [`UpstreamChannel`] / [`DownstreamChannel`] records.
//! - **[`Modem`]**: fetches the pages and runs the pipeline above for each
//!   query.

pub mod assemble;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod modem;
pub mod table;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_HOST, ModemConfig};
pub use error::{CoreError, ParseError};
pub use model::{DeviceInfo, DownstreamChannel, MacAddress, SignalData, UpstreamChannel};
pub use modem::Modem;
pub use table::{HeaderLabel, RowMap, TableLocator};
