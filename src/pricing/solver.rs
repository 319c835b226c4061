//! Newton-Raphson solver for the effective annual rate
//!
//! Finds the monthly discount factor that zeroes the loan NPV, then annualizes it.

use std::env;

use super::objective::TaegObjective;
use super::rates::annualize;
use crate::error::{LoanError, LoanOutcome};

/// Default starting discount factor, just below 1 where typical consumer-loan
/// monthly discount factors lie
pub const DEFAULT_INITIAL_GUESS: f64 = 0.99;

/// Default absolute tolerance on the discount factor step
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default iteration budget
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for the Newton iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Starting discount factor
    pub initial_guess: f64,

    /// Convergence is declared once |x_{n+1} - x_n| falls below this
    pub tolerance: f64,

    /// Iteration budget before reporting non-convergence
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Read overrides from the environment, falling back to defaults:
    ///   LOAN_SOLVER_INITIAL_GUESS, LOAN_SOLVER_TOLERANCE, LOAN_SOLVER_MAX_ITERATIONS
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            initial_guess: env::var("LOAN_SOLVER_INITIAL_GUESS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.initial_guess),
            tolerance: env::var("LOAN_SOLVER_TOLERANCE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.tolerance),
            max_iterations: env::var("LOAN_SOLVER_MAX_ITERATIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_iterations),
        }
    }
}

/// Outcome of a converged Newton iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// Root found
    pub root: f64,

    /// Number of Newton steps taken
    pub iterations: u32,

    /// Objective value at the returned root
    pub residual: f64,
}

/// Newton-Raphson iteration on a function returning `(value, derivative)`.
///
/// Stops when the step size drops below `config.tolerance` or the value is
/// exactly zero. A derivative of exactly zero at any visited point is reported
/// as [`LoanError::ZeroDerivative`]; an exhausted budget, a non-finite
/// derivative or a non-finite iterate as [`LoanError::ConvergenceFailed`].
/// No absolute floor applies to the derivative, so the step `f / f'` is the
/// same for a loan and for any rescaling of it.
pub fn newton_raphson<F>(mut f: F, config: &SolverConfig) -> LoanOutcome<SolverResult>
where
    F: FnMut(f64) -> (f64, f64),
{
    let mut x = config.initial_guess;
    let mut step = f64::NAN;
    let mut iterations = 0;

    for iteration in 0..config.max_iterations {
        iterations = iteration + 1;
        let (value, derivative) = f(x);

        if value == 0.0 {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: value,
            });
        }

        if !derivative.is_finite() {
            break;
        }

        if derivative == 0.0 {
            log::warn!("Zero derivative at x = {} (iteration {})", x, iteration);
            return Err(LoanError::ZeroDerivative { x, iteration });
        }

        step = value / derivative;
        let next = x - step;
        log::trace!("Newton step {}: x = {:.10}, f = {:.6e}, next = {:.10}", iteration, x, value, next);

        if !next.is_finite() {
            break;
        }

        if step.abs() < config.tolerance {
            let (residual, _) = f(next);
            return Ok(SolverResult {
                root: next,
                iterations: iteration + 1,
                residual,
            });
        }

        x = next;
    }

    log::warn!(
        "Newton iteration did not converge after {} iterations (x = {})",
        iterations,
        x
    );
    Err(LoanError::ConvergenceFailed {
        iterations,
        last_x: x,
        last_step: step.abs(),
    })
}

/// Effective annual rate implied by a total cost, with the default solver settings.
///
/// Returns `(effective_annual_rate, average_installment)`.
pub fn solve_effective_rate(
    month_number: u32,
    total_cost: f64,
    initial_cost: f64,
    initial_capital: f64,
) -> LoanOutcome<(f64, f64)> {
    solve_effective_rate_with(
        &SolverConfig::default(),
        month_number,
        total_cost,
        initial_cost,
        initial_capital,
    )
}

/// Effective annual rate implied by a total cost.
///
/// The loan is re-expressed as `month_number` level installments repaying
/// `total_cost + initial_capital` net of the upfront cost; the monthly
/// discount factor zeroing the NPV is then annualized.
pub fn solve_effective_rate_with(
    config: &SolverConfig,
    month_number: u32,
    total_cost: f64,
    initial_cost: f64,
    initial_capital: f64,
) -> LoanOutcome<(f64, f64)> {
    let total_reimbursed = total_cost + initial_capital;
    let full_installments = average_installment(total_reimbursed, initial_cost, month_number);

    let objective = TaegObjective::new(month_number, full_installments, initial_cost, initial_capital);
    let solution = newton_raphson(|x| objective.evaluate(x), config)?;

    log::debug!(
        "Solved discount factor {:.10} in {} iterations (residual {:.3e})",
        solution.root,
        solution.iterations,
        solution.residual
    );

    Ok((annualize(solution.root), full_installments))
}

/// Level installment repaying everything except the upfront cost
fn average_installment(total_reimbursed: f64, initial_cost: f64, month_number: u32) -> f64 {
    (total_reimbursed - initial_cost) / month_number as f64
}
