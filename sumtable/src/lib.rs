//! sumtable - O(1) window sums and averages over 8-bit grids
//!
//! # Example
//!
//! ```
//! use sumtable::SummedAreaTable;
//!
//! let grid = vec![255u8; 64 * 48];
//! let table = SummedAreaTable::new(&grid, 64, 48).unwrap();
//! assert_eq!(table.sum(0, 0, 9, 9), 100 * 255);
//! assert_eq!(table.average(10, 10, 19, 19), 255.0);
//! ```

pub use sumtable_core::*;
