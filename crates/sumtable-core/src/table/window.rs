//! Inclusive rectangular windows
//!
//! A [`Window`] is given by two opposite corners in any order and any range.
//! Queries crop it to the table; the average divides by its nominal
//! (uncropped) cell count.

/// Axis-aligned rectangle, inclusive of both corners.
///
/// Corners need not be ordered and may lie outside the table.
///
/// # Examples
///
/// ```
/// use sumtable_core::Window;
///
/// let w = Window::new(3, 2, -1, 0);
/// assert_eq!(w.normalized(), Window::new(-1, 0, 3, 2));
/// assert_eq!(w.nominal_count(), 15);
/// assert_eq!(w.clamped(4, 4), Window::new(3, 2, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Window {
    /// Create a window from two corners.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Window { x0, y0, x1, y1 }
    }

    /// Window covering a single cell.
    pub fn cell(x: i32, y: i32) -> Self {
        Window::new(x, y, x, y)
    }

    /// Check whether the window lies entirely outside a `width` x `height`
    /// grid on at least one axis.
    ///
    /// Tested on the raw corners: both x's left of the grid, both right of
    /// it, or likewise for y. The check is symmetric in corner order.
    pub fn is_outside(&self, width: u32, height: u32) -> bool {
        let w = width as i64;
        let h = height as i64;
        let (x0, y0, x1, y1) = (
            self.x0 as i64,
            self.y0 as i64,
            self.x1 as i64,
            self.y1 as i64,
        );
        (x0 < 0 && x1 < 0) || (y0 < 0 && y1 < 0) || (x0 >= w && x1 >= w) || (y0 >= h && y1 >= h)
    }

    /// Swap corners so that `x0 <= x1` and `y0 <= y1`.
    pub fn normalized(&self) -> Self {
        Window {
            x0: self.x0.min(self.x1),
            y0: self.y0.min(self.y1),
            x1: self.x0.max(self.x1),
            y1: self.y0.max(self.y1),
        }
    }

    /// Clamp every coordinate into `[0, width-1]` x `[0, height-1]`.
    ///
    /// Corner order is preserved. `width` and `height` must be positive.
    pub fn clamped(&self, width: u32, height: u32) -> Self {
        let xmax = (width as i64 - 1).max(0);
        let ymax = (height as i64 - 1).max(0);
        let clamp = |v: i32, max: i64| (v as i64).clamp(0, max) as i32;
        Window {
            x0: clamp(self.x0, xmax),
            y0: clamp(self.y0, ymax),
            x1: clamp(self.x1, xmax),
            y1: clamp(self.y1, ymax),
        }
    }

    /// Number of cells in the window as requested, ignoring any cropping.
    ///
    /// Computed in 64 bits as `(|x1-x0|+1) * (|y1-y0|+1)`, saturating at
    /// `u64::MAX` for windows spanning the full `i32` range on both axes.
    pub fn nominal_count(&self) -> u64 {
        let dx = (self.x1 as i64 - self.x0 as i64).unsigned_abs() + 1;
        let dy = (self.y1 as i64 - self.y0 as i64).unsigned_abs() + 1;
        dx.saturating_mul(dy)
    }
}

impl From<(i32, i32, i32, i32)> for Window {
    fn from((x0, y0, x1, y1): (i32, i32, i32, i32)) -> Self {
        Window::new(x0, y0, x1, y1)
    }
}
