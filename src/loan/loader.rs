//! Load loan batches from CSV

use super::LoanInputs;
use crate::error::{LoanError, LoanOutcome};
use csv::Reader;
use std::path::Path;

/// Default batch file looked up by the batch runner
pub const DEFAULT_LOANS_PATH: &str = "data/loans.csv";

/// Raw CSV row matching the batch file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "LoanID")]
    loan_id: u32,
    #[serde(rename = "InitialCapital")]
    initial_capital: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "MonthNumber")]
    month_number: u32,
    #[serde(rename = "InitialCost", default)]
    initial_cost: f64,
    #[serde(rename = "InsuranceCost", default)]
    insurance_cost: f64,
}

impl CsvRow {
    fn to_record(self) -> LoanOutcome<LoanRecord> {
        let inputs = LoanInputs::with_costs(
            self.initial_capital,
            self.annual_rate,
            self.month_number,
            self.initial_cost,
            self.insurance_cost,
        );

        inputs.validate().map_err(|source| LoanError::InvalidRow {
            loan_id: self.loan_id,
            source: Box::new(source),
        })?;

        Ok(LoanRecord {
            loan_id: self.loan_id,
            inputs,
        })
    }
}

/// One validated loan from a batch file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanRecord {
    pub loan_id: u32,
    pub inputs: LoanInputs,
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> LoanOutcome<Vec<LoanRecord>> {
    let reader = Reader::from_path(path)?;
    collect_records(reader)
}

/// Load loans from any reader (e.g., string buffer, stdin)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> LoanOutcome<Vec<LoanRecord>> {
    collect_records(Reader::from_reader(reader))
}

/// Load loans from the default data/loans.csv location
pub fn load_default_loans() -> LoanOutcome<Vec<LoanRecord>> {
    load_loans(DEFAULT_LOANS_PATH)
}

fn collect_records<R: std::io::Read>(mut reader: Reader<R>) -> LoanOutcome<Vec<LoanRecord>> {
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.to_record()?);
    }

    log::debug!("Loaded {} loans", loans.len());
    Ok(loans)
}
