//! Loan Ranger - amortizing loan calculator with effective rate solving
//!
//! This library provides:
//! - Equal-payment amortization (installment, total interest)
//! - Effective annual rate (TAEG) via Newton-Raphson on the loan NPV
//! - Effective annual insurance rate (TAEA) as the difference of two solves
//! - CSV batch loading, text reports and an interactive prompt shell

pub mod error;
pub mod loan;
pub mod pricing;
pub mod report;
pub mod shell;

// Re-export commonly used types
pub use error::{LoanError, LoanOutcome};
pub use loan::{LoanInputs, LoanResult, LoanRecord};
pub use pricing::{compute_all_quantities, LoanEvaluator, SolverConfig};
pub use report::LoanReport;
pub use shell::Shell;
