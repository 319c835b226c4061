//! Loan pricing: amortization schedule figures and effective rate solving

mod amortization;
mod engine;
mod objective;
pub mod rates;
pub mod solver;

pub use amortization::{installment, interest_cost};
pub use engine::{compute_all_quantities, LoanEvaluator};
pub use objective::TaegObjective;
pub use rates::{annualize, periodic_rate, MONTHS_PER_YEAR};
pub use solver::{
    newton_raphson, solve_effective_rate, solve_effective_rate_with, SolverConfig, SolverResult,
};
