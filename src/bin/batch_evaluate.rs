//! Evaluate every loan in a CSV batch
//!
//! Reads data/loans.csv (or --input), evaluates loans in parallel and writes one
//! result row per loan to --output (CSV) or stdout (--json).
//! Solver settings come from LOAN_SOLVER_INITIAL_GUESS, LOAN_SOLVER_TOLERANCE
//! and LOAN_SOLVER_MAX_ITERATIONS.

use anyhow::{Context, Result};
use clap::Parser;
use loan_ranger::loan::{load_loans, loader::DEFAULT_LOANS_PATH};
use loan_ranger::{LoanEvaluator, LoanRecord, SolverConfig};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "batch_evaluate", version, about = "Evaluate a CSV batch of loans")]
struct Args {
    /// Loan batch file
    #[arg(long, default_value = DEFAULT_LOANS_PATH)]
    input: PathBuf,

    /// Result file
    #[arg(long, default_value = "loan_results.csv")]
    output: PathBuf,

    /// Print results to stdout as JSON instead of writing CSV
    #[arg(long)]
    json: bool,
}

/// One output row; result fields are empty when evaluation failed
#[derive(Debug, Serialize)]
struct BatchRow {
    loan_id: u32,
    initial_capital: f64,
    annual_rate: f64,
    month_number: u32,
    initial_cost: f64,
    insurance_cost: f64,
    monthly_installment_no_insurance: Option<f64>,
    full_installments: Option<f64>,
    total_interests: Option<f64>,
    total_cost_no_insurance: Option<f64>,
    total_cost: Option<f64>,
    full_taeg: Option<f64>,
    taea: Option<f64>,
    error: Option<String>,
    #[serde(skip)]
    solver_failure: bool,
}

fn evaluate(evaluator: &LoanEvaluator, record: &LoanRecord) -> BatchRow {
    let inputs = record.inputs;
    let mut row = BatchRow {
        loan_id: record.loan_id,
        initial_capital: inputs.initial_capital,
        annual_rate: inputs.annual_rate,
        month_number: inputs.month_number,
        initial_cost: inputs.initial_cost,
        insurance_cost: inputs.insurance_cost,
        monthly_installment_no_insurance: None,
        full_installments: None,
        total_interests: None,
        total_cost_no_insurance: None,
        total_cost: None,
        full_taeg: None,
        taea: None,
        error: None,
        solver_failure: false,
    };

    match evaluator.evaluate_loan(&inputs) {
        Ok(result) => {
            row.monthly_installment_no_insurance = Some(result.monthly_installment_no_insurance);
            row.full_installments = Some(result.full_installments);
            row.total_interests = Some(result.total_interests);
            row.total_cost_no_insurance = Some(result.total_cost_no_insurance);
            row.total_cost = Some(result.total_cost);
            row.full_taeg = Some(result.full_taeg);
            row.taea = Some(result.taea);
        }
        Err(err) => {
            if err.is_solver_failure() {
                log::warn!("Loan {}: effective rate did not solve: {}", record.loan_id, err);
            } else {
                log::warn!("Loan {} rejected: {}", record.loan_id, err);
            }
            row.solver_failure = err.is_solver_failure();
            row.error = Some(err.to_string());
        }
    }

    row
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let loans = load_loans(&args.input)
        .with_context(|| format!("Failed to load loans from {}", args.input.display()))?;
    if !args.json {
        println!("Loaded {} loans in {:?}", loans.len(), start.elapsed());
    }

    let evaluator = LoanEvaluator::new(SolverConfig::from_env());

    let eval_start = Instant::now();
    let rows: Vec<BatchRow> = loans
        .par_iter()
        .map(|record| evaluate(&evaluator, record))
        .collect();
    let failures = rows.iter().filter(|r| r.error.is_some()).count();
    let solver_failures = rows.iter().filter(|r| r.solver_failure).count();

    if args.json {
        println!("{}", serde_json::to_string(&rows)?);
        return Ok(());
    }

    println!(
        "Evaluations complete in {:?} ({} failed, {} in the solver)",
        eval_start.elapsed(),
        failures,
        solver_failures
    );

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Results written to: {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_ranger::LoanInputs;

    fn record(inputs: LoanInputs) -> LoanRecord {
        LoanRecord { loan_id: 7, inputs }
    }

    #[test]
    fn test_evaluate_fills_results() {
        let row = evaluate(
            &LoanEvaluator::default(),
            &record(LoanInputs::with_costs(200_000.0, 0.02, 240, 1_000.0, 8_000.0)),
        );
        assert!(row.error.is_none());
        assert!(!row.solver_failure);
        assert!(row.full_taeg.unwrap() > 0.02);
    }

    #[test]
    fn test_evaluate_separates_solver_failures_from_bad_inputs() {
        let starved = LoanEvaluator::new(SolverConfig {
            max_iterations: 1,
            ..SolverConfig::default()
        });
        let row = evaluate(&starved, &record(LoanInputs::with_costs(200_000.0, 0.02, 240, 1_000.0, 8_000.0)));
        assert!(row.solver_failure);
        assert!(row.full_taeg.is_none());

        let row = evaluate(&LoanEvaluator::default(), &record(LoanInputs::new(10_000.0, 0.03, 0)));
        assert!(!row.solver_failure);
        assert!(row.error.is_some());
    }
}
