//! Loan records and batch loading

mod data;
pub mod loader;

pub use data::{LoanInputs, LoanResult, MAX_MONTH_NUMBER};
pub use loader::{load_default_loans, load_loans, load_loans_from_reader, LoanRecord};
