//! Loan evaluation: amortization, total costs, TAEG and TAEA

use super::amortization::interest_cost;
use super::solver::{solve_effective_rate_with, SolverConfig};
use crate::error::LoanOutcome;
use crate::loan::{LoanInputs, LoanResult};

/// Evaluates loans with a fixed solver configuration
#[derive(Debug, Clone, Default)]
pub struct LoanEvaluator {
    config: SolverConfig,
}

impl LoanEvaluator {
    /// Create an evaluator with the given solver configuration
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute every derived figure for one loan.
    ///
    /// Inputs are validated first; no solver runs on invalid inputs. The
    /// effective rate is solved twice, with and without insurance, and the
    /// insurance rate (TAEA) is their difference. Either solve failing fails
    /// the whole evaluation.
    pub fn evaluate_loan(&self, inputs: &LoanInputs) -> LoanOutcome<LoanResult> {
        inputs.validate()?;

        let LoanInputs {
            initial_capital,
            annual_rate,
            month_number,
            initial_cost,
            insurance_cost,
        } = *inputs;

        let (monthly_installment_no_insurance, total_interests) =
            interest_cost(annual_rate, month_number, initial_capital);

        let total_cost_no_insurance = total_interests + initial_cost;
        let total_cost = total_cost_no_insurance + insurance_cost;

        let (all_in, no_insurance) = rayon::join(
            || solve_effective_rate_with(&self.config, month_number, total_cost, initial_cost, initial_capital),
            || {
                solve_effective_rate_with(
                    &self.config,
                    month_number,
                    total_cost_no_insurance,
                    initial_cost,
                    initial_capital,
                )
            },
        );
        let (full_taeg, full_installments) = all_in?;
        let (taeg_no_insurance, _) = no_insurance?;

        let taea = full_taeg - taeg_no_insurance;

        log::debug!(
            "Evaluated loan of {:.2} over {} months: TAEG {:.6}, TAEA {:.6}",
            initial_capital,
            month_number,
            full_taeg,
            taea
        );

        Ok(LoanResult {
            monthly_installment_no_insurance,
            full_installments,
            total_interests,
            total_cost_no_insurance,
            total_cost,
            full_taeg,
            taea,
        })
    }
}

/// Compute all quantities for a loan with the default solver settings
pub fn compute_all_quantities(inputs: LoanInputs) -> LoanOutcome<LoanResult> {
    LoanEvaluator::default().evaluate_loan(&inputs)
}
