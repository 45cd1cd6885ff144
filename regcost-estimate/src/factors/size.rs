use regcost_core::constants::SIZE_REFERENCE_EMPLOYEES;

/// Company-size factor: `ln(1 + employees) / ln(1 + 100)`.
///
/// 1.0 at 100 employees, strictly increasing, logarithmic growth
/// (~2.0 at 10k, ~3.0 at 1M).
pub fn calculate(employee_count: u32) -> f64 {
    (1.0 + employee_count as f64).ln() / (1.0 + SIZE_REFERENCE_EMPLOYEES).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_size_is_neutral() {
        assert!((calculate(100) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn grows_sub_linearly() {
        let small = calculate(100);
        let big = calculate(10_000);
        assert!(big > small);
        assert!(big < 2.1, "100x employees must not approach 100x cost");
    }

    #[test]
    fn strictly_increasing() {
        let mut prev = calculate(1);
        for n in [2, 10, 50, 500, 5_000, 50_000, u32::MAX] {
            let cur = calculate(n);
            assert!(cur > prev);
            prev = cur;
        }
    }
}
