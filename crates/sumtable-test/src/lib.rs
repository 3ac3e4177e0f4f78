//! sumtable-test - Regression test helpers for sumtable
//!
//! Provides [`RegParams`], an indexed value checker that records every
//! failure and reports them together at [`RegParams::cleanup`], plus the
//! grids shared by the regression tests.
//!
//! # Usage
//!
//! ```ignore
//! use sumtable_test::{RegParams, GRID_4X4};
//!
//! let mut rp = RegParams::new("sum");
//! rp.compare_values(23.0, table.sum(1, 1, 2, 2) as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

/// Reference 4x4 grid, row-major.
pub const GRID_4X4: [u8; 16] = [
    0x01, 0x03, 0x02, 0x05, //
    0x08, 0x07, 0x04, 0x09, //
    0x06, 0x02, 0x0a, 0x03, //
    0x03, 0x01, 0x08, 0x00,
];

/// Running sums of [`GRID_4X4`], computed by hand.
pub const PREFIX_4X4: [u64; 16] = [
    1, 4, 6, 11, //
    9, 19, 25, 39, //
    15, 27, 43, 60, //
    18, 31, 55, 72,
];

/// Deterministic pseudo-random grid of `width * height` samples.
///
/// Uses a 32-bit LCG so the same seed always yields the same grid.
pub fn pattern_grid(width: u32, height: u32, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..(width as usize) * (height as usize))
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

/// Sum the cells of `input` inside the inclusive window by direct iteration.
///
/// Corners may be in any order; cells outside the grid are skipped.
pub fn brute_force_sum(
    input: &[u8],
    width: u32,
    height: u32,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> u64 {
    let (xa, xb) = (x0.min(x1) as i64, x0.max(x1) as i64);
    let (ya, yb) = (y0.min(y1) as i64, y0.max(y1) as i64);
    let xa = xa.max(0);
    let ya = ya.max(0);
    let xb = xb.min(width as i64 - 1);
    let yb = yb.min(height as i64 - 1);

    let mut sum = 0u64;
    for y in ya..=yb {
        for x in xa..=xb {
            sum += input[(y * width as i64 + x) as usize] as u64;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_grid_is_deterministic() {
        let a = pattern_grid(7, 5, 42);
        let b = pattern_grid(7, 5, 42);
        assert_eq!(a.len(), 35);
        assert_eq!(a, b);
        assert_ne!(a, pattern_grid(7, 5, 43));
    }

    #[test]
    fn test_brute_force_sum() {
        assert_eq!(brute_force_sum(&GRID_4X4, 4, 4, 0, 0, 3, 3), 72);
        assert_eq!(brute_force_sum(&GRID_4X4, 4, 4, 2, 2, 1, 1), 23);
        assert_eq!(brute_force_sum(&GRID_4X4, 4, 4, -1, -1, 0, 0), 1);
        assert_eq!(brute_force_sum(&GRID_4X4, 4, 4, -2, 0, -1, 3), 0);
    }
}
