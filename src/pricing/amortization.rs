//! Equal-payment amortization formulas

use super::rates::{periodic_rate, MONTHS_PER_YEAR};

/// Installment per period for an equal-payment loan.
///
/// `P * r * (1 + r)^n / ((1 + r)^n - 1)`, or straight-line `P / n` when the
/// periodic rate is exactly zero. Evaluated as `P * r / (1 - (1 + r)^-n)`,
/// which stays finite when `(1 + r)^n` overflows.
pub fn installment(period_rate: f64, period_number: u32, initial_capital: f64) -> f64 {
    if period_rate == 0.0 {
        return initial_capital / period_number as f64;
    }

    let discount = (1.0 + period_rate).powf(-(period_number as f64));
    initial_capital * period_rate / (1.0 - discount)
}

/// Monthly installment and total interest paid over the loan.
///
/// Returns `(monthly_installment, total_interest)`.
pub fn interest_cost(annual_rate: f64, month_number: u32, initial_capital: f64) -> (f64, f64) {
    let monthly_rate = periodic_rate(annual_rate, MONTHS_PER_YEAR);
    let monthly_installment = installment(monthly_rate, month_number, initial_capital);
    let total_reimbursed = monthly_installment * month_number as f64;
    (monthly_installment, total_reimbursed - initial_capital)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_thirty_year_mortgage() {
        let (monthly, interest) = interest_cost(0.05, 360, 200_000.0);
        assert_abs_diff_eq!(monthly, 1073.64, epsilon = 0.01);
        assert_abs_diff_eq!(interest, 186_511.57, epsilon = 0.01);

        // 186510.40 is what the installment rounded to cents gives
        let rounded = (monthly * 100.0).round() / 100.0;
        assert_abs_diff_eq!(rounded * 360.0 - 200_000.0, 186_510.40, epsilon = 0.01);
    }

    #[test]
    fn test_very_long_term_tends_to_interest_only() {
        // Past i32::MAX periods the payment approaches P * r, never wrapping negative
        let pmt = installment(0.01, 2_147_483_649, 1_000.0);
        assert!(pmt.is_finite());
        assert_relative_eq!(pmt, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(installment(0.0, 360, 200_000.0), 200_000.0 / 360.0);

        let (monthly, interest) = interest_cost(0.0, 120, 12_000.0);
        assert_eq!(monthly, 100.0);
        assert_eq!(interest, 0.0);
    }

    #[test]
    fn test_single_period_repays_principal_plus_interest() {
        assert_relative_eq!(installment(0.01, 1, 1_000.0), 1_010.0, epsilon = 1e-9);
    }

    #[test]
    fn test_installment_matches_annuity_present_value() {
        // Discounting every installment at the periodic rate recovers the principal
        let r = 0.004;
        let n = 84;
        let principal = 25_000.0;
        let pmt = installment(r, n, principal);
        let pv: f64 = (1..=n).map(|k| pmt / (1.0_f64 + r).powf(k as f64)).sum();
        assert_relative_eq!(pv, principal, max_relative = 1e-10);
    }

    #[test]
    fn test_higher_rate_costs_more() {
        let (low, low_interest) = interest_cost(0.02, 240, 100_000.0);
        let (high, high_interest) = interest_cost(0.04, 240, 100_000.0);
        assert!(high > low);
        assert!(high_interest > low_interest);
    }
}
