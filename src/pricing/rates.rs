//! Rate conversions between annual and per-period figures

/// Number of installment periods in a year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert a nominal annual rate to a rate per period.
///
/// Proportional conversion (`annual / periods`). The compounding-equivalent
/// rate would instead be `(1 + annual)^(1/periods) - 1`.
pub fn periodic_rate(annual_rate: f64, periods_per_year: u32) -> f64 {
    annual_rate / periods_per_year as f64
}

/// Convert a monthly discount factor found by the solver to an annual effective rate
///
/// A discount factor `x` corresponds to a monthly rate `1/x - 1`, compounded
/// over twelve months.
pub fn annualize(discount_factor: f64) -> f64 {
    (1.0 / discount_factor).powi(MONTHS_PER_YEAR as i32) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_periodic_rate() {
        assert_relative_eq!(periodic_rate(0.06, 12), 0.005, epsilon = 1e-15);
        assert_eq!(periodic_rate(0.0, 12), 0.0);
        assert_relative_eq!(periodic_rate(0.08, 4), 0.02, epsilon = 1e-15);
    }

    #[test]
    fn test_annualize_unit_factor_is_zero_rate() {
        assert_eq!(annualize(1.0), 0.0);
    }

    #[test]
    fn test_annualize_compounds_monthly_rate() {
        let monthly = 0.005;
        let factor = 1.0 / (1.0 + monthly);
        let expected = (1.0_f64 + monthly).powi(12) - 1.0;
        assert_relative_eq!(annualize(factor), expected, epsilon = 1e-12);
        // 6% nominal compounds to ~6.17%
        assert!((annualize(factor) - 0.061678).abs() < 1e-6);
    }
}
