//! Construction-time size limits

use crate::error::{TableError, TableResult};

/// Hard cap on grid width.
///
/// With `u64` accumulators the cap is not needed for overflow safety; it
/// bounds the allocation and keeps every running sum below `u32::MAX`.
pub const MAX_TABLE_WIDTH: u32 = 4096;

/// Hard cap on grid height.
pub const MAX_TABLE_HEIGHT: u32 = 4096;

/// Maximum grid size accepted by [`SummedAreaTable::with_limits`].
///
/// Limits may be lowered below [`MAX_TABLE_WIDTH`] x [`MAX_TABLE_HEIGHT`]
/// but never raised above it.
///
/// [`SummedAreaTable::with_limits`]: crate::SummedAreaTable::with_limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLimits {
    max_width: u32,
    max_height: u32,
}

impl Default for TableLimits {
    fn default() -> Self {
        TableLimits {
            max_width: MAX_TABLE_WIDTH,
            max_height: MAX_TABLE_HEIGHT,
        }
    }
}

impl TableLimits {
    /// Create limits of `max_width` x `max_height`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidLimits`] if either value is 0 or
    /// exceeds the hard cap.
    pub fn new(max_width: u32, max_height: u32) -> TableResult<Self> {
        if max_width == 0
            || max_height == 0
            || max_width > MAX_TABLE_WIDTH
            || max_height > MAX_TABLE_HEIGHT
        {
            return Err(TableError::InvalidLimits {
                max_width,
                max_height,
            });
        }
        Ok(TableLimits {
            max_width,
            max_height,
        })
    }

    #[inline]
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    #[inline]
    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Check a grid size against these limits.
    pub(crate) fn check(&self, width: u32, height: u32) -> TableResult<()> {
        if width > self.max_width || height > self.max_height {
            return Err(TableError::DimensionTooLarge {
                width,
                height,
                max_width: self.max_width,
                max_height: self.max_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hard_cap() {
        let limits = TableLimits::default();
        assert_eq!(limits.max_width(), 4096);
        assert_eq!(limits.max_height(), 4096);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(TableLimits::new(0, 10).is_err());
        assert!(TableLimits::new(10, 0).is_err());
        assert!(TableLimits::new(4097, 10).is_err());
        assert!(matches!(
            TableLimits::new(10, 4097),
            Err(TableError::InvalidLimits {
                max_width: 10,
                max_height: 4097
            })
        ));
    }

    #[test]
    fn test_check() {
        let limits = TableLimits::new(8, 4).unwrap();
        assert!(limits.check(8, 4).is_ok());
        assert!(limits.check(9, 4).is_err());
        assert_eq!(
            limits.check(8, 5),
            Err(TableError::DimensionTooLarge {
                width: 8,
                height: 5,
                max_width: 8,
                max_height: 4
            })
        );
    }
}
