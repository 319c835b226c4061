//! Interactive prompts for collecting loan parameters

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::loan::{LoanInputs, MAX_MONTH_NUMBER};

/// Prompt-driven input over any line reader and writer
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the shell, returning the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line to the output
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read a number, re-prompting until it parses and respects `min_value`.
    ///
    /// Empty input returns `default` when one is given. A comma is accepted
    /// as decimal separator.
    pub fn read_float(&mut self, prompt: &str, min_value: Option<f64>, default: Option<f64>) -> io::Result<f64> {
        let default_display = default.map(|d| format!(" [default={}]", d)).unwrap_or_default();

        loop {
            let answer = self.ask(&format!("{}{}: ", prompt, default_display))?;

            if answer.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            }

            match answer.replace(',', ".").trim().parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    if let Some(min) = min_value.filter(|&min| value < min) {
                        self.say(format!("Value must be at least {}.", min))?;
                        continue;
                    }
                    return Ok(value);
                }
                _ => self.say("Please enter a valid number.")?,
            }
        }
    }

    /// Read an integer, re-prompting until it parses and lies within
    /// `min_value..=max_value`
    pub fn read_int(&mut self, prompt: &str, min_value: Option<i64>, max_value: Option<i64>) -> io::Result<i64> {
        loop {
            let answer = self.ask(&format!("{}: ", prompt))?;

            match answer.trim().parse::<i64>() {
                Ok(value) => {
                    if let Some(min) = min_value.filter(|&min| value < min) {
                        self.say(format!("Value must be at least {}.", min))?;
                        continue;
                    }
                    if let Some(max) = max_value.filter(|&max| value > max) {
                        self.say(format!("Value must be at most {}.", max))?;
                        continue;
                    }
                    return Ok(value);
                }
                Err(_) => self.say("Please enter a valid integer.")?,
            }
        }
    }

    /// Read one of `options` verbatim
    pub fn read_option(&mut self, prompt: &str, options: &[&str]) -> io::Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if options.contains(&answer.as_str()) {
                return Ok(answer);
            }
            self.say(format!("Please enter one of: {}", options.join(", ")))?;
        }
    }

    /// Read the loan duration in months, entered either in months or in years.
    ///
    /// Years are converted by truncation (`1.55` years is 18 months). Terms
    /// longer than [`MAX_MONTH_NUMBER`] months are refused and asked again.
    pub fn read_loan_duration(&mut self) -> io::Result<u32> {
        let duration_type = self.read_option("Enter duration in: [1] Months or [2] Years: ", &["1", "2"])?;

        if duration_type == "1" {
            let months = self.read_int(
                "Enter loan duration (months)",
                Some(1),
                Some(i64::from(MAX_MONTH_NUMBER)),
            )?;
            // Bounded by read_int to 1..=MAX_MONTH_NUMBER
            return Ok(months as u32);
        }

        loop {
            let years = self.read_float("Enter loan duration (years)", Some(0.1), None)?;
            // Float to int casts saturate, so absurd year counts cannot wrap
            let month_number = ((years * 12.0) as u32).max(1);
            if month_number > MAX_MONTH_NUMBER {
                self.say(format!("Value must be at most {} years.", MAX_MONTH_NUMBER / 12))?;
                continue;
            }
            self.say(format!("Converted to {} months.", month_number))?;
            return Ok(month_number);
        }
    }

    /// Collect a complete set of loan parameters
    pub fn prompt_for_loan_inputs(&mut self) -> io::Result<LoanInputs> {
        self.say("\n===== Loan Calculator - Parameter Input =====\n")?;

        let initial_capital = self.read_float("Enter loan amount (€)", Some(0.01), None)?;
        let annual_rate = self.read_float("Enter annual interest rate (%)", Some(0.0), None)? / 100.0;
        let month_number = self.read_loan_duration()?;

        let initial_cost = self.read_float("Enter upfront fees/costs (€)", Some(0.0), Some(0.0))?;
        let insurance_cost = self.read_float(
            "Enter total insurance cost over loan period (€)",
            Some(0.0),
            Some(0.0),
        )?;

        Ok(LoanInputs::with_costs(
            initial_capital,
            annual_rate,
            month_number,
            initial_cost,
            insurance_cost,
        ))
    }

    /// Ask whether to run another calculation
    pub fn ask_again(&mut self) -> io::Result<bool> {
        let answer = self.ask("\nCalculate another loan? (y/n): ")?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(input: &str) -> Shell<&[u8], Vec<u8>> {
        Shell::new(input.as_bytes(), Vec::new())
    }

    fn transcript(shell: Shell<&[u8], Vec<u8>>) -> String {
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_read_float_accepts_comma_separator() {
        let mut sh = shell("3,5\n");
        assert_eq!(sh.read_float("Rate", None, None).unwrap(), 3.5);
        assert_eq!(transcript(sh), "Rate: ");
    }

    #[test]
    fn test_read_float_uses_default_on_empty_line() {
        let mut sh = shell("\n");
        assert_eq!(sh.read_float("Fees", Some(0.0), Some(0.0)).unwrap(), 0.0);
        assert_eq!(transcript(sh), "Fees [default=0]: ");
    }

    #[test]
    fn test_read_float_reprompts() {
        let mut sh = shell("abc\n-5\n 250.5 \n");
        assert_eq!(sh.read_float("Amount", Some(0.01), None).unwrap(), 250.5);
        let out = transcript(sh);
        assert!(out.contains("Please enter a valid number."));
        assert!(out.contains("Value must be at least 0.01."));
        assert_eq!(out.matches("Amount: ").count(), 3);
    }

    #[test]
    fn test_read_int_rejects_below_minimum() {
        let mut sh = shell("0\n1.5\n12\n");
        assert_eq!(sh.read_int("Months", Some(1), None).unwrap(), 12);
        let out = transcript(sh);
        assert!(out.contains("Value must be at least 1."));
        assert!(out.contains("Please enter a valid integer."));
    }

    #[test]
    fn test_read_int_rejects_above_maximum() {
        let mut sh = shell("500
120
");
        assert_eq!(sh.read_int("Months", Some(1), Some(360)).unwrap(), 120);
        assert!(transcript(sh).contains("Value must be at most 360."));
    }

    #[test]
    fn test_read_option() {
        let mut sh = shell("3\n2\n");
        assert_eq!(sh.read_option("Pick: ", &["1", "2"]).unwrap(), "2");
        assert!(transcript(sh).contains("Please enter one of: 1, 2"));
    }

    #[test]
    fn test_duration_in_years_truncates() {
        let mut sh = shell("2\n1.55\n");
        assert_eq!(sh.read_loan_duration().unwrap(), 18);
        assert!(transcript(sh).contains("Converted to 18 months."));
    }

    #[test]
    fn test_duration_in_months() {
        let mut sh = shell("1\n360\n");
        assert_eq!(sh.read_loan_duration().unwrap(), 360);
    }

    #[test]
    fn test_oversized_duration_is_asked_again() {
        let mut sh = shell("1
99999999999
12
");
        assert_eq!(sh.read_loan_duration().unwrap(), 12);
        let out = transcript(sh);
        assert!(out.contains("Value must be at most 12000."));
        assert_eq!(out.matches("Enter loan duration (months): ").count(), 2);

        let mut sh = shell("2
1e12
30
");
        assert_eq!(sh.read_loan_duration().unwrap(), 360);
        assert!(transcript(sh).contains("Value must be at most 1000 years."));
    }

    #[test]
    fn test_prompt_for_loan_inputs() {
        let mut sh = shell("200000\n2\n2\n20\n1000\n8000\n");
        let inputs = sh.prompt_for_loan_inputs().unwrap();
        assert_eq!(inputs, LoanInputs::with_costs(200_000.0, 0.02, 240, 1_000.0, 8_000.0));
    }

    #[test]
    fn test_prompt_for_loan_inputs_with_default_costs() {
        let mut sh = shell("50000\n4,5\n1\n84\n\n\n");
        let inputs = sh.prompt_for_loan_inputs().unwrap();
        assert_eq!(inputs.month_number, 84);
        assert!((inputs.annual_rate - 0.045).abs() < 1e-12);
        assert_eq!(inputs.initial_cost, 0.0);
        assert_eq!(inputs.insurance_cost, 0.0);
    }

    #[test]
    fn test_ask_again() {
        assert!(shell("Y\n").ask_again().unwrap());
        assert!(!shell("n\n").ask_again().unwrap());
        assert!(!shell("yes\n").ask_again().unwrap());
    }

    #[test]
    fn test_end_of_input_is_error() {
        let err = shell("").read_float("Amount", None, None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
