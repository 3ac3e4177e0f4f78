//! Window average regression test
//!
//! The divisor is always the nominal size of the requested window, so
//! windows hanging off the grid average in zeros for the missing cells.

use sumtable_core::{SummedAreaTable, Window};
use sumtable_test::{GRID_4X4, PREFIX_4X4, RegParams, pattern_grid};

fn table_4x4() -> SummedAreaTable {
    SummedAreaTable::new(&GRID_4X4, 4, 4).unwrap()
}

#[test]
fn average_reg_truncating() {
    let mut rp = RegParams::new("average_trunc");
    let table = table_4x4();

    // 72 / 16 = 4.5, truncated
    rp.compare_values((PREFIX_4X4[15] / 16) as f64, table.average(0, 0, 3, 3), 0.0);
    rp.compare_values(4.0, table.average(3, 3, 0, 0), 0.0);

    // 23 / 4 = 5.75, truncated
    rp.compare_values(5.0, table.average(1, 1, 2, 2), 0.0);

    // Single cells average to themselves
    for (i, &v) in GRID_4X4.iter().enumerate() {
        let (x, y) = ((i % 4) as i32, (i / 4) as i32);
        rp.compare_values(v as f64, table.average(x, y, x, y), 0.0);
    }

    assert!(rp.cleanup(), "average_reg truncating tests failed");
}

#[test]
fn average_reg_exact() {
    let mut rp = RegParams::new("average_exact");
    let table = table_4x4();

    rp.compare_values(4.5, table.average_exact(0, 0, 3, 3), 0.0);
    rp.compare_values(5.75, table.average_exact(1, 1, 2, 2), 0.0);
    rp.compare_values(72.0 / 36.0, table.average_exact(-1, -1, 4, 4), 1e-12);
    rp.compare_values(1.0 / 4.0, table.average_exact(-1, -1, 0, 0), 0.0);

    assert!(rp.cleanup(), "average_reg exact tests failed");
}

#[test]
fn average_reg_nominal_count() {
    let mut rp = RegParams::new("average_nominal");
    let table = table_4x4();

    // 6x6 nominal window around the 4x4 grid: 72 / 36 = 2
    rp.compare_values((PREFIX_4X4[15] / 36) as f64, table.average(-1, -1, 4, 4), 0.0);
    rp.compare_values(2.0, table.average(4, 4, -1, -1), 0.0);

    // 2x2 corner window with one cell inside: 1 / 4 truncates to 0
    rp.compare_values(0.0, table.average(-1, -1, 0, 0), 0.0);

    // Right edge 2x2: 5 + 9 = 14 over 4 cells
    rp.compare_values(3.0, table.average(3, 0, 4, 1), 0.0);
    rp.compare_values(3.5, table.average_exact(3, 0, 4, 1), 0.0);

    // Fully outside windows average to zero
    rp.compare_values(0.0, table.average(-2, 0, -1, 3), 0.0);
    rp.compare_values(0.0, table.average_exact(0, 4, 3, 5), 0.0);

    assert!(rp.cleanup(), "average_reg nominal count tests failed");
}

#[test]
fn average_reg_consistent_with_sum() {
    let mut rp = RegParams::new("average_sum");
    let grid = pattern_grid(9, 6, 11);
    let table = SummedAreaTable::new(&grid, 9, 6).unwrap();

    for y0 in -2..8 {
        for x0 in -2..11 {
            let w = Window::new(x0, y0, 4, 3);
            let sum = table.sum_window(&w);
            let count = w.nominal_count();
            rp.compare_values((sum / count) as f64, table.average_window(&w), 0.0);
            rp.compare_values(sum as f64 / count as f64, table.average_exact_window(&w), 1e-12);
        }
    }

    assert!(rp.cleanup(), "average_reg sum consistency tests failed");
}
