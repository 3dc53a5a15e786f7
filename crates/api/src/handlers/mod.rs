//! Request handlers.
//!
//! Handlers delegate to `shelfstat_catalog` and map its failures via
//! [`crate::error::AppError`].

pub mod search;
