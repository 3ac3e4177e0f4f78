//! sumtable-core - Summed-area tables over 8-bit grids
//!
//! This crate provides:
//!
//! - [`SummedAreaTable`] - Integral image answering window sums and
//!   averages in O(1)
//! - [`Window`] - Inclusive rectangle with unordered, possibly
//!   out-of-bounds corners
//! - [`TableLimits`] - Maximum grid size accepted at construction
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade: `debug` for construction,
//! `trace` for every preprocessed cell and every query step. Nothing is
//! emitted unless the host installs a logger, and results never depend on
//! it.

pub mod error;
pub mod table;

pub use error::{TableError, TableResult};
pub use table::{MAX_TABLE_HEIGHT, MAX_TABLE_WIDTH, SummedAreaTable, TableLimits, Window};
