//! Test assertion helpers
//!
//! Emission figures are products of decimal factors, so most of them are
//! not exactly representable. Compare them with a tolerance.

/// Assert that two floating-point values are approximately equal
///
/// # Arguments
/// * `actual` - The actual value
/// * `expected` - The expected value
/// * `epsilon` - Maximum allowed difference
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Assert a kilogram figure to within a microgram
#[allow(dead_code)]
pub fn assert_kg_approx(actual_kg: f64, expected_kg: f64) {
    assert_approx_eq(actual_kg, expected_kg, 1e-9);
}

/// Assert that a percentage value is within tolerance
///
/// # Arguments
/// * `actual_percent` - The actual percentage (0-100 scale)
/// * `expected_percent` - The expected percentage
/// * `tolerance_percent` - Maximum allowed difference
#[allow(dead_code)]
pub fn assert_percent_within(actual_percent: f64, expected_percent: f64, tolerance_percent: f64) {
    let diff = (actual_percent - expected_percent).abs();
    assert!(
        diff <= tolerance_percent,
        "Percentage outside tolerance:\n  actual: {:.2}%\n  expected: {:.2}%\n  diff: {:.2}% (tolerance: {:.2}%)",
        actual_percent, expected_percent, diff, tolerance_percent
    );
}

/// Assert that every CSV line has the same number of fields as the header
///
/// Returns the parsed records, header first.
#[allow(dead_code)]
pub fn assert_csv_shape(csv_text: &str, expected_columns: usize) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(csv_text.as_bytes());

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| {
            r.expect("CSV should parse")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();

    assert!(!rows.is_empty(), "CSV has no header row");
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            expected_columns,
            "CSV row {} has {} fields, expected {}: {:?}",
            i,
            row.len(),
            expected_columns,
            row
        );
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_accepts_close_values() {
        assert_approx_eq(100.0 * 2.2, 220.0, 1e-9);
    }

    #[test]
    #[should_panic(expected = "not approximately equal")]
    fn test_assert_approx_eq_rejects_distant_values() {
        assert_approx_eq(221.0, 220.0, 0.5);
    }

    #[test]
    fn test_assert_csv_shape_handles_quoted_commas() {
        let rows = assert_csv_shape("a,b\n\"x, y\",z\n", 2);
        assert_eq!(rows[1][0], "x, y");
    }
}
