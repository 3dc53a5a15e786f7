//! Book catalog client and search orchestration.
//!
//! Wraps the upstream volumes-search HTTP API, exposes it behind the
//! [`source::VolumeSource`] seam, and builds the two search stages on top:
//! the display page fetch and the chunked statistics scan.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod search;
pub mod source;
