//! Core county population-change library.
//!
//! Main components:
//! - [`record`] — the per-row population record and its column contract.
//! - [`extract`] — filtering sheet rows and projecting them into records.
//! - [`change`] — percentage change between two population counts.
//! - [`workbook`] — reading a sheet from disk into a cached table.
//! - [`config`] — data source and viewer settings.
//! - [`error`] — error taxonomy shared by the loader and the calculator.

pub mod change;
pub mod config;
pub mod error;
pub mod extract;
pub mod record;
pub mod workbook;
