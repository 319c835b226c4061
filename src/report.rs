//! Text and JSON rendering of loan results

use serde::Serialize;
use std::fmt::Write;

use crate::loan::{LoanInputs, LoanResult};

/// Default right-alignment width for values
pub const VALUE_WIDTH: usize = 10;

/// Left-alignment width for labels
pub const LABEL_WIDTH: usize = 34;

/// Inputs and results of one evaluation, serialized together for JSON output
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoanReport {
    pub inputs: LoanInputs,
    pub result: LoanResult,
}

impl LoanReport {
    pub fn new(inputs: LoanInputs, result: LoanResult) -> Self {
        Self { inputs, result }
    }

    /// Human-readable summary, one line per figure
    pub fn render(&self) -> String {
        render_results(&self.inputs, &self.result)
    }
}

/// Monetary amount with two decimals and a euro sign
pub fn format_currency(value: f64, width: usize) -> String {
    format!("{:>width$.2} €", value, width = width)
}

/// Fraction rendered as a percentage with two decimals
pub fn format_percentage(value: f64, width: usize) -> String {
    format!("{:>width$}", format!("{:.2}%", value * 100.0), width = width)
}

/// Duration in months with its equivalent in years
pub fn format_duration(month_number: u32, width: usize) -> String {
    let years = month_number as f64 / 12.0;
    format!("{:>width$} mois ({:.1} années)", month_number, years, width = width)
}

fn push_line(out: &mut String, label: &str, value: &str) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{:<width$} {}", label, value, width = LABEL_WIDTH);
}

/// Render the full summary of a loan evaluation
pub fn render_results(inputs: &LoanInputs, result: &LoanResult) -> String {
    let mut out = String::new();

    push_line(&mut out, "Capital emprunté:", &format_currency(inputs.initial_capital, VALUE_WIDTH));
    push_line(&mut out, "Taux annuel:", &format_percentage(inputs.annual_rate, VALUE_WIDTH));
    push_line(&mut out, "Durée d'emprunt:", &format_duration(inputs.month_number, VALUE_WIDTH));
    push_line(&mut out, "Frais initiaux:", &format_currency(inputs.initial_cost, VALUE_WIDTH));
    push_line(&mut out, "Coût total assurance:", &format_currency(inputs.insurance_cost, VALUE_WIDTH));
    push_line(
        &mut out,
        "Mensualités hors assurance:",
        &format!("{}/mois", format_currency(result.monthly_installment_no_insurance, VALUE_WIDTH)),
    );
    push_line(
        &mut out,
        "Mensualités moyennes tout compris:",
        &format!("{}/mois", format_currency(result.full_installments, VALUE_WIDTH)),
    );
    push_line(&mut out, "Intérêt totaux:", &format_currency(result.total_interests, VALUE_WIDTH));
    push_line(
        &mut out,
        "Coût total hors assurance:",
        &format_currency(result.total_cost_no_insurance, VALUE_WIDTH),
    );
    push_line(&mut out, "Coût total:", &format_currency(result.total_cost, VALUE_WIDTH));
    push_line(&mut out, "TAEG (recalculé):", &format_percentage(result.full_taeg, VALUE_WIDTH));
    push_line(&mut out, "TAEA (recalculé):", &format_percentage(result.taea, VALUE_WIDTH));

    out
}
