//! Domain logic for the shelfstat catalog proxy.
//!
//! Everything here is pure: query validation and page math, the upstream
//! volume record and its display projection, and the statistics
//! accumulator. Network I/O lives in `shelfstat_catalog`.

pub mod error;
pub mod search;
pub mod stats;
pub mod volume;
