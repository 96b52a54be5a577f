//! Conversion between nominal and effective annual rates.

use fincalc_core::{FinanceError, FinanceResult};

use super::{finite_result, require_finite};

fn validate_periods_per_year(periods_per_year: i32) -> FinanceResult<()> {
    if periods_per_year <= 0 {
        return Err(FinanceError::invalid_argument(format!(
            "number of compounding periods per year must be positive, got {periods_per_year}"
        )));
    }
    Ok(())
}

/// Effective annual rate from a nominal rate (spreadsheet `EFFECT`).
///
/// `effective = (1 + nominal/n)^n − 1`
///
/// ```rust
/// use fincalc_analytics::tvm::effective_rate;
///
/// let effective = effective_rate(0.141, 2).unwrap();
/// assert!((effective - 0.14597025).abs() < 1e-6);
/// ```
pub fn effective_rate(nominal_rate: f64, periods_per_year: i32) -> FinanceResult<f64> {
    validate_periods_per_year(periods_per_year)?;
    require_finite(&[("nominal rate", nominal_rate)])?;

    let n = f64::from(periods_per_year);
    finite_result(
        (n * (nominal_rate / n).ln_1p()).exp_m1(),
        "effective rate",
    )
}

/// Nominal annual rate from an effective rate (spreadsheet `NOMINAL`).
///
/// `nominal = n·((1 + effective)^(1/n) − 1)`
pub fn nominal_rate(effective_rate: f64, periods_per_year: i32) -> FinanceResult<f64> {
    validate_periods_per_year(periods_per_year)?;
    require_finite(&[("effective rate", effective_rate)])?;

    let n = f64::from(periods_per_year);
    finite_result(
        n * (effective_rate.ln_1p() / n).exp_m1(),
        "nominal rate",
    )
}
