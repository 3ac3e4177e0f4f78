//! Regression test parameters and comparisons

use sumtable_core::SummedAreaTable;

/// Regression test parameters
///
/// Tracks the test name, a running comparison index and every failure
/// seen so far. Comparisons never panic; call [`cleanup`](Self::cleanup)
/// at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "sum")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two sum sequences element by element
    ///
    /// Reports the first differing position.
    pub fn compare_sums(&mut self, expected: &[u64], actual: &[u64]) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            self.fail(format!(
                "Failure in {}_reg: sum comparison for index {} - lengths {} vs {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len()
            ));
            return false;
        }

        if let Some(pos) = expected.iter().zip(actual).position(|(e, a)| e != a) {
            self.fail(format!(
                "Failure in {}_reg: sum comparison for index {} - position {}: expected {}, got {}",
                self.test_name, self.index, pos, expected[pos], actual[pos]
            ));
            return false;
        }

        true
    }

    /// Compare a table's dimensions and running sums against a reference
    pub fn compare_table(
        &mut self,
        table: &SummedAreaTable,
        width: u32,
        height: u32,
        expected: &[u64],
    ) -> bool {
        if table.dimensions() != (width, height) {
            self.index += 1;
            self.fail(format!(
                "Failure in {}_reg: table comparison for index {} - dimensions {:?} vs {}x{}",
                self.test_name,
                self.index,
                table.dimensions(),
                width,
                height
            ));
            return false;
        }
        self.compare_sums(expected, table.as_slice())
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
