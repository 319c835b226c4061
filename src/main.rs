//! Loan Ranger CLI
//!
//! Evaluates a single loan from command-line values, or runs the interactive
//! calculator when any value is missing.

use anyhow::{Context, Result};
use clap::Parser;
use loan_ranger::{LoanEvaluator, LoanInputs, LoanReport, Shell, SolverConfig};
use std::io;

/// Amortizing loan calculator (installments, total cost, TAEG, TAEA)
#[derive(Parser, Debug)]
#[command(name = "loan_ranger", version, about)]
struct Cli {
    /// Principal amount borrowed
    #[arg(long)]
    capital: Option<f64>,

    /// Nominal annual rate as a decimal (0.05 for 5%)
    #[arg(long)]
    annual_rate: Option<f64>,

    /// Number of monthly installments
    #[arg(long)]
    months: Option<u32>,

    /// Upfront fees paid at origination
    #[arg(long)]
    initial_cost: Option<f64>,

    /// Total insurance cost over the loan
    #[arg(long)]
    insurance_cost: Option<f64>,

    /// Print the inputs and results as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Inputs from the command line, if every value was given
    fn direct_inputs(&self) -> Option<LoanInputs> {
        Some(LoanInputs::with_costs(
            self.capital?,
            self.annual_rate?,
            self.months?,
            self.initial_cost?,
            self.insurance_cost?,
        ))
    }
}

fn print_report(report: &LoanReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("\n===== Loan Calculation Results =====\n");
        print!("{}", report.render());
    }
    Ok(())
}

fn run_interactive(evaluator: &LoanEvaluator, json: bool) -> Result<()> {
    println!("======================================");
    println!("    Loan Calculator and Simulator    ");
    println!("======================================");
    println!("\nThis program calculates loan details including monthly payments,");
    println!("interest costs, and effective rates (TAEG/TAEA).\n");

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout());

    loop {
        let inputs = shell
            .prompt_for_loan_inputs()
            .context("Failed to read loan parameters")?;

        let result = evaluator
            .evaluate_loan(&inputs)
            .context("Failed to evaluate loan")?;
        print_report(&LoanReport::new(inputs, result), json)?;

        if !shell.ask_again()? {
            break;
        }
    }

    println!("\nThank you for using the Loan Ranger!");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let evaluator = LoanEvaluator::new(SolverConfig::from_env());
    log::debug!("Solver configuration: {:?}", evaluator.config());

    match cli.direct_inputs() {
        Some(inputs) => {
            let result = evaluator
                .evaluate_loan(&inputs)
                .context("Failed to evaluate loan")?;
            print_report(&LoanReport::new(inputs, result), cli.json)
        }
        None => run_interactive(&evaluator, cli.json),
    }
}
