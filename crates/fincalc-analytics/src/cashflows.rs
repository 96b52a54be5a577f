//! Cash flow profitability measures.
//!
//! A cash flow series is an ordered slice of signed amounts where
//! `values[i]` occurs at the end of period `i + 1`.
//!
//! - [`net_present_value`]: Discounted sum of the series (spreadsheet `NPV`)
//! - [`internal_rate_of_return`]: Rate at which the NPV is zero (spreadsheet `IRR`)
//! - [`modified_internal_rate_of_return`]: Return with distinct finance and
//!   reinvestment rates (spreadsheet `MIRR`)

use fincalc_core::{FinanceError, FinanceResult};
use fincalc_math::solvers::{newton_raphson, SolverConfig};
use log::debug;

use crate::config::AnalyticsConfig;
use crate::tvm::finite_result;

fn validate_values(values: &[f64]) -> FinanceResult<()> {
    if values.is_empty() {
        return Err(FinanceError::invalid_argument(
            "cash flow series must not be empty",
        ));
    }
    if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(FinanceError::invalid_argument(format!(
            "cash flow {} is not finite: {v}",
            i + 1
        )));
    }
    Ok(())
}

fn require_sign_change(values: &[f64]) -> FinanceResult<()> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min * max >= 0.0 {
        return Err(FinanceError::domain(
            "cash flow must contain at least one positive value and one negative value",
        ));
    }
    Ok(())
}

/// Σ values[i] / (1+rate)^(i+1), without validation.
fn npv(rate: f64, values: &[f64]) -> f64 {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| v / (1.0 + rate).powf((i + 1) as f64))
        .sum()
}

/// d(npv)/d(rate) in the form Σ values[i]·(−(i+1))·(1+r)^i / (1+r)^(2(i+1)).
fn npv_derivative(rate: f64, values: &[f64]) -> f64 {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let period = (i + 1) as f64;
            v * (-period) * (1.0 + rate).powf(period - 1.0) / (1.0 + rate).powf(2.0 * period)
        })
        .sum()
}

/// Net present value of a cash flow series.
///
/// # Example
///
/// ```rust
/// use fincalc_analytics::cashflows::net_present_value;
///
/// let npv = net_present_value(0.1, &[-10000.0, 3000.0, 4200.0, 6800.0]).unwrap();
/// assert!((npv - 1188.443412).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// InvalidArgument for an empty or non-finite series; DomainError if the
/// discount factor is undefined (e.g. `rate == −1`).
pub fn net_present_value(rate: f64, values: &[f64]) -> FinanceResult<f64> {
    validate_values(values)?;
    if !rate.is_finite() {
        return Err(FinanceError::invalid_argument(format!(
            "discount rate must be finite, got {rate}"
        )));
    }
    finite_result(npv(rate, values), "net present value")
}

/// Internal rate of return of a cash flow series.
///
/// Starts Newton-Raphson from `guess` (default `0.1`). Series with several
/// sign changes can have several roots; the one nearest the guess in the
/// Newton basin is returned.
///
/// Convergence is judged on `|NPV| < tolerance` alone. A series with no real
/// root whose NPV still tends to zero as the rate grows, such as
/// `[-100, 1, -100]`, therefore returns a spurious very large rate rather
/// than an error. Callers should sanity-check results far outside the range
/// they expect.
///
/// # Errors
///
/// * InvalidArgument for an empty or non-finite series
/// * DomainError if the series does not change sign
/// * ConvergenceError when Newton-Raphson fails
pub fn internal_rate_of_return(values: &[f64], guess: Option<f64>) -> FinanceResult<f64> {
    let config = AnalyticsConfig::default();
    internal_rate_of_return_with_config(values, guess.unwrap_or(config.irr_guess), &config.solver)
}

/// Internal rate of return with an explicit solver configuration.
pub fn internal_rate_of_return_with_config(
    values: &[f64],
    guess: f64,
    config: &SolverConfig,
) -> FinanceResult<f64> {
    validate_values(values)?;
    require_sign_change(values)?;
    if !guess.is_finite() {
        return Err(FinanceError::invalid_argument(format!(
            "guess must be finite, got {guess}"
        )));
    }

    let result = newton_raphson(
        |r| npv(r, values),
        |r| npv_derivative(r, values),
        guess,
        config,
    )?;
    debug!(
        "IRR solved over {} flows -> {} ({} iterations)",
        values.len(),
        result.root,
        result.iterations
    );
    Ok(result.root)
}

/// Internal rates of return for many independent series, solved in parallel.
///
/// Each entry of the output corresponds to the series at the same index.
#[cfg(feature = "parallel")]
pub fn internal_rate_of_return_batch<S>(series: &[S], guess: Option<f64>) -> Vec<FinanceResult<f64>>
where
    S: AsRef<[f64]> + Sync,
{
    use rayon::prelude::*;

    series
        .par_iter()
        .map(|values| internal_rate_of_return(values.as_ref(), guess))
        .collect()
}

/// Modified internal rate of return.
///
/// Positive flows are compounded forward at `reinvest_rate`, negative flows
/// are discounted at `finance_rate`:
///
/// ```text
/// terminal = −NPV(reinvest, positives)·(1+reinvest)^n
/// initial  = NPV(finance, negatives)·(1+finance)
/// MIRR     = (terminal / initial)^(1/(n−1)) − 1
/// ```
///
/// # Example
///
/// ```rust
/// use fincalc_analytics::cashflows::modified_internal_rate_of_return;
///
/// let flows = [-120000.0, 39000.0, 30000.0, 21000.0, 37000.0, 46000.0];
/// let mirr = modified_internal_rate_of_return(&flows, 0.10, 0.12).unwrap();
/// assert!((mirr - 0.126094).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// * InvalidArgument for an empty or non-finite series
/// * DomainError for a single flow, no sign change, or an undefined power
pub fn modified_internal_rate_of_return(
    values: &[f64],
    finance_rate: f64,
    reinvest_rate: f64,
) -> FinanceResult<f64> {
    validate_values(values)?;
    if values.len() == 1 {
        return Err(FinanceError::domain(
            "MIRR needs at least two cash flows",
        ));
    }
    require_sign_change(values)?;
    if !finance_rate.is_finite() || !reinvest_rate.is_finite() {
        return Err(FinanceError::invalid_argument(
            "finance and reinvestment rates must be finite",
        ));
    }

    let (positive, negative): (Vec<f64>, Vec<f64>) = values
        .iter()
        .map(|&v| if v >= 0.0 { (v, 0.0) } else { (0.0, v) })
        .unzip();

    let n = values.len() as f64;
    let terminal = -npv(reinvest_rate, &positive) * (1.0 + reinvest_rate).powf(n);
    let initial = npv(finance_rate, &negative) * (1.0 + finance_rate);

    finite_result(
        (terminal / initial).powf(1.0 / (n - 1.0)) - 1.0,
        "modified internal rate of return",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use fincalc_core::ErrorKind;

    const PRECISION: f64 = 1e-6;

    #[test]
    fn test_net_present_value() {
        let npv = net_present_value(0.1, &[-10000.0, 3000.0, 4200.0, 6800.0]).unwrap();
        assert_abs_diff_eq!(npv, 1188.443412, epsilon = PRECISION);
    }

    #[test]
    fn test_net_present_value_zero_rate_is_sum() {
        let npv = net_present_value(0.0, &[-100.0, 40.0, 70.0]).unwrap();
        assert_abs_diff_eq!(npv, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_net_present_value_invalid() {
        assert_eq!(net_present_value(0.1, &[]).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            net_present_value(0.1, &[1.0, f64::NAN]).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            net_present_value(-1.0, &[-100.0, 50.0]).unwrap_err().kind(),
            ErrorKind::DomainError
        );
    }

    #[test]
    fn test_internal_rate_of_return() {
        let flows = [-70000.0, 12000.0, 15000.0, 18000.0, 21000.0];
        assert_abs_diff_eq!(
            internal_rate_of_return(&flows, None).unwrap(),
            -0.02124485,
            epsilon = PRECISION
        );

        let flows = [-70000.0, 12000.0, 15000.0, 18000.0, 21000.0, 26000.0];
        assert_abs_diff_eq!(
            internal_rate_of_return(&flows, None).unwrap(),
            0.086630,
            epsilon = PRECISION
        );

        let flows = [-70000.0, 12000.0, 15000.0];
        assert_abs_diff_eq!(
            internal_rate_of_return(&flows, Some(-0.40)).unwrap(),
            -0.443507,
            epsilon = PRECISION
        );
    }

    #[test]
    fn test_irr_zeroes_npv() {
        let flows = [-5000.0, 1200.0, 1400.0, 1600.0, 1800.0];
        let irr = internal_rate_of_return(&flows, None).unwrap();
        assert!(npv(irr, &flows).abs() < PRECISION);
    }

    #[test]
    fn test_irr_requires_sign_change() {
        let all_positive = [70000.0, 12000.0, 15000.0, 18000.0, 21000.0];
        assert_eq!(
            internal_rate_of_return(&all_positive, None).unwrap_err().kind(),
            ErrorKind::DomainError
        );

        let all_negative = [-1.0, -2.0, -3.0];
        assert_eq!(
            internal_rate_of_return(&all_negative, None).unwrap_err().kind(),
            ErrorKind::DomainError
        );

        assert_eq!(
            internal_rate_of_return(&[], None).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_irr_rootless_series_drifts_to_large_rate() {
        let flows = [-100.0, 1.0, -100.0];

        let irr = internal_rate_of_return(&flows, None).unwrap();

        assert!(irr > 1e6, "expected a spurious large rate, got {irr}");
        assert!(npv(irr, &flows).abs() < PRECISION);
    }

    #[test]
    fn test_irr_iteration_cap() {
        let flows = [-70000.0, 12000.0, 15000.0, 18000.0, 21000.0];
        let config = SolverConfig::default().with_max_iterations(1);
        let err = internal_rate_of_return_with_config(&flows, 0.5, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConvergenceError);
    }

    #[test]
    fn test_npv_derivative_matches_finite_difference() {
        let flows = [-70000.0, 12000.0, 15000.0, 18000.0, 21000.0];
        let h = 1e-6;
        for r in [-0.1, 0.0, 0.1] {
            let numeric = (npv(r + h, &flows) - npv(r - h, &flows)) / (2.0 * h);
            assert_abs_diff_eq!(npv_derivative(r, &flows), numeric, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_modified_internal_rate_of_return() {
        let flows = [-120000.0, 39000.0, 30000.0, 21000.0, 37000.0, 46000.0];
        assert_abs_diff_eq!(
            modified_internal_rate_of_return(&flows, 0.10, 0.12).unwrap(),
            0.126094,
            epsilon = PRECISION
        );
        assert_abs_diff_eq!(
            modified_internal_rate_of_return(&flows, 0.10, 0.14).unwrap(),
            0.134759,
            epsilon = PRECISION
        );

        let flows = [-120000.0, 39000.0, 30000.0, 21000.0];
        assert_abs_diff_eq!(
            modified_internal_rate_of_return(&flows, 0.10, 0.12).unwrap(),
            -0.048044,
            epsilon = PRECISION
        );
    }

    #[test]
    fn test_mirr_invalid() {
        let all_positive = [70000.0, 12000.0, 15000.0, 18000.0, 21000.0];
        assert_eq!(
            modified_internal_rate_of_return(&all_positive, 0.10, 0.12).unwrap_err().kind(),
            ErrorKind::DomainError
        );
        assert_eq!(
            modified_internal_rate_of_return(&[-100.0], 0.10, 0.12).unwrap_err().kind(),
            ErrorKind::DomainError
        );
        assert_eq!(
            modified_internal_rate_of_return(&[], 0.10, 0.12).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_irr_batch_matches_sequential() {
        let series = vec![
            vec![-70000.0, 12000.0, 15000.0, 18000.0, 21000.0],
            vec![-70000.0, 12000.0, 15000.0, 18000.0, 21000.0, 26000.0],
            vec![1.0, 2.0, 3.0],
        ];
        let results = internal_rate_of_return_batch(&series, None);

        assert_abs_diff_eq!(*results[0].as_ref().unwrap(), -0.02124485, epsilon = PRECISION);
        assert_abs_diff_eq!(*results[1].as_ref().unwrap(), 0.086630, epsilon = PRECISION);
        assert_eq!(results[2].as_ref().unwrap_err().kind(), ErrorKind::DomainError);
    }
}
