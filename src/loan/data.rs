//! Loan input and result records

use serde::{Deserialize, Serialize};

use crate::error::{LoanError, LoanOutcome};

/// Longest accepted term, 1000 years of monthly installments
pub const MAX_MONTH_NUMBER: u32 = 12_000;

/// Parameters of a fixed-rate, fixed-term amortizing loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Principal amount borrowed
    pub initial_capital: f64,

    /// Nominal annual interest rate as a decimal (0.05 for 5%)
    pub annual_rate: f64,

    /// Number of monthly installments
    pub month_number: u32,

    /// Upfront fees paid at origination
    #[serde(default)]
    pub initial_cost: f64,

    /// Total insurance paid over the life of the loan
    #[serde(default)]
    pub insurance_cost: f64,
}

impl LoanInputs {
    /// Create a loan with no upfront fees and no insurance
    pub fn new(initial_capital: f64, annual_rate: f64, month_number: u32) -> Self {
        Self::with_costs(initial_capital, annual_rate, month_number, 0.0, 0.0)
    }

    /// Create a loan with upfront fees and insurance
    pub fn with_costs(
        initial_capital: f64,
        annual_rate: f64,
        month_number: u32,
        initial_cost: f64,
        insurance_cost: f64,
    ) -> Self {
        Self {
            initial_capital,
            annual_rate,
            month_number,
            initial_cost,
            insurance_cost,
        }
    }

    /// Check every field against its domain, reporting the first violation
    pub fn validate(&self) -> LoanOutcome<()> {
        if !self.initial_capital.is_finite() || self.initial_capital <= 0.0 {
            return Err(LoanError::invalid(
                "initial_capital",
                format!("must be a positive amount, got {}", self.initial_capital),
            ));
        }

        if !self.annual_rate.is_finite() || self.annual_rate < 0.0 {
            return Err(LoanError::invalid(
                "annual_rate",
                format!("must be a non-negative rate, got {}", self.annual_rate),
            ));
        }

        if self.month_number == 0 {
            return Err(LoanError::invalid("month_number", "must be at least 1"));
        }

        if self.month_number > MAX_MONTH_NUMBER {
            return Err(LoanError::invalid(
                "month_number",
                format!("must be at most {}, got {}", MAX_MONTH_NUMBER, self.month_number),
            ));
        }

        non_negative_cost("initial_cost", self.initial_cost)?;
        non_negative_cost("insurance_cost", self.insurance_cost)?;

        Ok(())
    }

    /// Copy of these inputs with every monetary field multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            initial_capital: self.initial_capital * factor,
            initial_cost: self.initial_cost * factor,
            insurance_cost: self.insurance_cost * factor,
            ..*self
        }
    }
}

fn non_negative_cost(field: &'static str, value: f64) -> LoanOutcome<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LoanError::invalid(
            field,
            format!("must be a non-negative amount, got {}", value),
        ));
    }
    Ok(())
}

/// Derived figures for one loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Schedule installment excluding insurance
    pub monthly_installment_no_insurance: f64,

    /// Average monthly installment including interest, fees and insurance
    pub full_installments: f64,

    /// Total interest paid over the loan
    pub total_interests: f64,

    /// Interest plus upfront fees
    pub total_cost_no_insurance: f64,

    /// Interest plus upfront fees plus insurance
    pub total_cost: f64,

    /// Effective annual rate including all costs (TAEG)
    pub full_taeg: f64,

    /// Effective annual insurance rate (TAEA)
    pub taea: f64,
}
