//! SummedAreaTable - integral image over an 8-bit grid
//!
//! Each entry holds the sum of every input value in the rectangle from the
//! origin to that entry, inclusive. Any rectangular window sum then needs at
//! most four lookups, whatever the window size.
//!
//! # Memory layout
//!
//! Sums are stored as `u64` in row-major order with no padding. The sum at
//! (x, y) is at index `y * width + x`.
//!
//! # Window policy
//!
//! - Corners may be given in any order.
//! - A window entirely outside the grid on either axis sums to 0.
//! - A window partly outside is cropped to the overlap.
//! - [`SummedAreaTable::average`] divides by the *nominal* cell count of the
//!   requested window, not by the cropped count.
//!
//! # Examples
//!
//! ```
//! use sumtable_core::SummedAreaTable;
//!
//! let grid = [1u8, 2, 3, 4, 5, 6];
//! let table = SummedAreaTable::new(&grid, 3, 2).unwrap();
//!
//! assert_eq!(table.sum(0, 0, 2, 1), 21);
//! assert_eq!(table.sum(2, 1, 1, 0), 2 + 3 + 5 + 6);
//! assert_eq!(table.sum(-5, 0, -1, 1), 0);
//! assert_eq!(table.average(0, 0, 2, 1), 3.0);
//! assert_eq!(table.average_exact(0, 0, 2, 1), 3.5);
//! ```

mod limits;
mod window;

pub use limits::{MAX_TABLE_HEIGHT, MAX_TABLE_WIDTH, TableLimits};
pub use window::Window;

use crate::error::{TableError, TableResult};
use log::{Level, debug, log_enabled, trace};

/// Summed-area table built from a grid of 8-bit samples
///
/// Immutable once built. Cloning (or [`deep_clone`](Self::deep_clone))
/// allocates a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummedAreaTable {
    /// Width in cells
    width: u32,
    /// Height in cells
    height: u32,
    /// Running sums (row-major, no padding)
    data: Vec<u64>,
}

impl SummedAreaTable {
    /// Build a table from `width * height` row-major samples.
    ///
    /// # Errors
    ///
    /// - [`TableError::DimensionTooLarge`] if `width > 4096` or `height > 4096`
    /// - [`TableError::InvalidDimension`] if either dimension is 0
    /// - [`TableError::DataLengthMismatch`] if `input.len() != width * height`
    pub fn new(input: &[u8], width: u32, height: u32) -> TableResult<Self> {
        Self::with_limits(input, width, height, &TableLimits::default())
    }

    /// Build a table, rejecting grids larger than `limits`.
    pub fn with_limits(
        input: &[u8],
        width: u32,
        height: u32,
        limits: &TableLimits,
    ) -> TableResult<Self> {
        if let Err(e) = limits.check(width, height) {
            debug!("SummedAreaTable: rejected {width}x{height}: {e}");
            return Err(e);
        }
        if width == 0 || height == 0 {
            return Err(TableError::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if input.len() != expected {
            return Err(TableError::DataLengthMismatch {
                expected,
                actual: input.len(),
            });
        }

        debug!("SummedAreaTable: preprocessing {width}x{height}");
        let data = accumulate(input, width as usize, height as usize);

        Ok(SummedAreaTable {
            width,
            height,
            data,
        })
    }

    /// Copy the table into an independently owned buffer.
    pub fn deep_clone(&self) -> Self {
        SummedAreaTable {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }

    /// Get the grid width in cells
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in cells
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the grid dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Running sum of the rectangle (0,0)..=(x,y), or `None` outside the grid.
    pub fn prefix_sum(&self, x: u32, y: u32) -> Option<u64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.at(x as usize, y as usize))
    }

    /// Sum of the whole grid.
    #[inline]
    pub fn total(&self) -> u64 {
        // Construction guarantees a non-empty buffer
        self.data[self.data.len() - 1]
    }

    /// Row-major view of the running sums.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.data
    }

    /// Sum of the inclusive window with corners (x0, y0) and (x1, y1).
    ///
    /// See [`sum_window`](Self::sum_window).
    pub fn sum(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> u64 {
        self.sum_window(&Window::new(x0, y0, x1, y1))
    }

    /// Sum of an inclusive window.
    ///
    /// Returns 0 if the window is entirely outside the grid on either axis;
    /// otherwise the window is normalized, cropped to the grid, and summed
    /// in O(1).
    pub fn sum_window(&self, window: &Window) -> u64 {
        trace!("sum_window: requested {window:?}");
        if window.is_outside(self.width, self.height) {
            trace!("sum_window: {window:?} outside {}x{}", self.width, self.height);
            return 0;
        }

        let w = window.normalized().clamped(self.width, self.height);
        let (x0, y0, x1, y1) = (w.x0 as usize, w.y0 as usize, w.x1 as usize, w.y1 as usize);

        let mut sum = self.at(x1, y1);
        trace!("sum_window: cropped to {w:?}, P({x1}, {y1}) = {sum}");

        // Add the upper-left block first so no unsigned step goes negative
        if x0 > 0 && y0 > 0 {
            sum += self.at(x0 - 1, y0 - 1);
            trace!("sum_window: add P({}, {}) -> {sum}", x0 - 1, y0 - 1);
        }
        if x0 > 0 {
            sum -= self.at(x0 - 1, y1);
            trace!("sum_window: subtract P({}, {y1}) -> {sum}", x0 - 1);
        }
        if y0 > 0 {
            sum -= self.at(x1, y0 - 1);
            trace!("sum_window: subtract P({x1}, {}) -> {sum}", y0 - 1);
        }

        sum
    }

    /// Average over the window with integer-truncating division.
    ///
    /// The divisor is [`Window::nominal_count`] of the window as given:
    /// cells outside the grid count toward it but contribute nothing to the
    /// sum.
    pub fn average(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> f64 {
        self.average_window(&Window::new(x0, y0, x1, y1))
    }

    /// Truncating average over an inclusive window. See [`average`](Self::average).
    pub fn average_window(&self, window: &Window) -> f64 {
        (self.sum_window(window) / window.nominal_count()) as f64
    }

    /// Average over the window with real-valued division.
    ///
    /// Same sum and nominal divisor as [`average`](Self::average).
    pub fn average_exact(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> f64 {
        self.average_exact_window(&Window::new(x0, y0, x1, y1))
    }

    /// Real-valued average over an inclusive window.
    pub fn average_exact_window(&self, window: &Window) -> f64 {
        self.sum_window(window) as f64 / window.nominal_count() as f64
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> u64 {
        self.data[y * self.width as usize + x]
    }
}

/// Build running sums in row-major order.
///
/// `a(x,y) = v(x,y) + a(x-1,y) + a(x,y-1) - a(x-1,y-1)`
fn accumulate(input: &[u8], width: usize, height: usize) -> Vec<u64> {
    let tracing = log_enabled!(Level::Trace);
    let mut out = vec![0u64; width * height];

    let mut i = 0;
    for y in 0..height {
        for x in 0..width {
            let mut acc = input[i] as u64;
            if x > 0 {
                acc += out[i - 1];
            }
            if y > 0 {
                acc += out[i - width];
            }
            if x > 0 && y > 0 {
                acc -= out[i - width - 1];
            }
            out[i] = acc;

            if tracing {
                trace!("accumulate: ({x}, {y}) input = {} sum = {acc}", input[i]);
            }
            i += 1;
        }
    }

    out
}
