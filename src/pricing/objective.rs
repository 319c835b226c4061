//! NPV objective for the effective rate (TAEG) equation
//!
//! Over a monthly discount factor `x`:
//!
//! ```text
//! value(x)      = C - P + A * sum_{k=1..n} x^k
//! derivative(x) = A * sum_{k=1..n} k * x^(k-1)
//! ```
//!
//! where `A` is the level installment, `C` the upfront cost, `P` the principal
//! and `n` the number of months. The root is the discount factor at which the
//! discounted installments plus upfront cost equal the principal disbursed.

/// NPV equation of a loan repaid by `month_number` level installments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaegObjective {
    pub month_number: u32,
    pub installment: f64,
    pub initial_cost: f64,
    pub initial_capital: f64,
}

impl TaegObjective {
    pub fn new(month_number: u32, installment: f64, initial_cost: f64, initial_capital: f64) -> Self {
        Self {
            month_number,
            installment,
            initial_cost,
            initial_capital,
        }
    }

    /// Net present value at discount factor `x`
    pub fn value(&self, x: f64) -> f64 {
        let discounted: f64 = (1..=self.month_number).map(|k| x.powf(k as f64)).sum();
        self.initial_cost - self.initial_capital + self.installment * discounted
    }

    /// Derivative of [`value`](Self::value) with respect to `x`
    pub fn derivative(&self, x: f64) -> f64 {
        let weighted: f64 = (0..self.month_number)
            .map(|k| (k + 1) as f64 * x.powf(k as f64))
            .sum();
        self.installment * weighted
    }

    /// Value and derivative together, as consumed by the Newton iteration
    pub fn evaluate(&self, x: f64) -> (f64, f64) {
        (self.value(x), self.derivative(x))
    }
}
