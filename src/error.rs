//! Error types for loan evaluation

use thiserror::Error;

/// Result alias used throughout the library
pub type LoanOutcome<T> = Result<T, LoanError>;

/// Errors raised while validating, loading or evaluating a loan
#[derive(Error, Debug)]
pub enum LoanError {
    /// An input field violates its domain (checked before any computation)
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// Newton iteration did not reach the step tolerance within its budget
    #[error("Effective rate solver failed to converge after {iterations} iterations (x = {last_x}, last step = {last_step:.2e})")]
    ConvergenceFailed {
        iterations: u32,
        last_x: f64,
        last_step: f64,
    },

    /// The objective is flat at a visited point, so no Newton step exists
    #[error("Effective rate objective has zero derivative at x = {x} (iteration {iteration})")]
    ZeroDerivative { x: f64, iteration: u32 },

    /// A batch row failed validation
    #[error("Loan {loan_id}: {source}")]
    InvalidRow {
        loan_id: u32,
        #[source]
        source: Box<LoanError>,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LoanError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LoanError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for failures of the root finder (as opposed to bad inputs or I/O)
    pub fn is_solver_failure(&self) -> bool {
        matches!(
            self,
            LoanError::ConvergenceFailed { .. } | LoanError::ZeroDerivative { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = LoanError::invalid("month_number", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid input for `month_number`: must be at least 1"
        );
        assert!(!err.is_solver_failure());
    }

    #[test]
    fn test_solver_failures_are_distinct() {
        let flat = LoanError::ZeroDerivative { x: 0.99, iteration: 0 };
        let exhausted = LoanError::ConvergenceFailed {
            iterations: 100,
            last_x: 0.5,
            last_step: 1e-3,
        };
        assert!(flat.is_solver_failure());
        assert!(exhausted.is_solver_failure());
        assert!(matches!(flat, LoanError::ZeroDerivative { .. }));
        assert!(matches!(exhausted, LoanError::ConvergenceFailed { .. }));
    }

    #[test]
    fn test_invalid_row_wraps_source() {
        let err = LoanError::InvalidRow {
            loan_id: 7,
            source: Box::new(LoanError::invalid("initial_capital", "must be positive")),
        };
        assert_eq!(
            err.to_string(),
            "Loan 7: Invalid input for `initial_capital`: must be positive"
        );
    }
}
