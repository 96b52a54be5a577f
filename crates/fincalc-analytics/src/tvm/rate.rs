//! Periodic rate of an annuity (spreadsheet `RATE`).
//!
//! There is no closed form for the rate, so the annuity identity
//!
//! ```text
//! g(r) = pv·(1+r)^n + pmt·(1+r·type)·((1+r)^n − 1)/r + fv
//! ```
//!
//! is solved with Newton-Raphson. The remaining terms are captured by the
//! residual and derivative closures for the duration of one solve, so
//! concurrent solves never share state.

use fincalc_core::{FinanceError, FinanceResult, PaymentTiming};
use fincalc_math::solvers::{newton_raphson, SolverConfig};
use log::debug;

use super::{compound_factors, require_finite, validate_nper};
use crate::config::AnalyticsConfig;

/// Periodic interest rate of an annuity.
///
/// Uses the default solver configuration (tolerance `1e-6`, 100 iterations)
/// and a starting guess of `0.1` when `guess` is `None`.
///
/// # Errors
///
/// * InvalidArgument for a negative period count or non-finite input
/// * DomainError for a guess of exactly zero, where `g` is singular
/// * ConvergenceError when Newton-Raphson fails
///
/// # Example
///
/// ```rust
/// use fincalc_analytics::tvm::rate;
/// use fincalc_core::PaymentTiming;
///
/// let r = rate(20.0, -36.157534, 355.0, 0.0, PaymentTiming::End, None).unwrap();
/// assert!((r - 0.08).abs() < 1e-6);
/// ```
pub fn rate(
    nper: f64,
    pmt: f64,
    pv: f64,
    fv: f64,
    timing: PaymentTiming,
    guess: Option<f64>,
) -> FinanceResult<f64> {
    let config = AnalyticsConfig::default();
    rate_with_config(
        nper,
        pmt,
        pv,
        fv,
        timing,
        guess.unwrap_or(config.rate_guess),
        &config.solver,
    )
}

/// Periodic interest rate of an annuity with an explicit solver configuration.
pub fn rate_with_config(
    nper: f64,
    pmt: f64,
    pv: f64,
    fv: f64,
    timing: PaymentTiming,
    guess: f64,
    config: &SolverConfig,
) -> FinanceResult<f64> {
    validate_nper(nper)?;
    require_finite(&[("pmt", pmt), ("pv", pv), ("fv", fv), ("guess", guess)])?;
    if guess == 0.0 {
        return Err(FinanceError::domain(
            "rate guess of zero is a singularity of the annuity equation",
        ));
    }

    let t = timing.factor();
    let residual = move |r: f64| annuity_residual(r, nper, pmt, pv, fv, t);
    let derivative = move |r: f64| annuity_derivative(r, nper, pmt, pv, t);

    let result = newton_raphson(residual, derivative, guess, config)?;
    debug!(
        "RATE solved: nper={nper}, pmt={pmt}, pv={pv}, fv={fv}, timing={timing} -> {} ({} iter)",
        result.root, result.iterations
    );
    Ok(result.root)
}

/// `g(r)`: zero when `r` is the annuity's periodic rate.
fn annuity_residual(r: f64, nper: f64, pmt: f64, pv: f64, fv: f64, t: f64) -> f64 {
    let (growth, annuity) = compound_factors(r, nper);
    pv * growth + pmt * (1.0 + r * t) * annuity + fv
}

/// `g'(r)`, undefined at `r = 0`.
///
/// `(n·r·(1+r)^(n−1) − (1+r)^n + 1)/r²` is evaluated as
/// `(n·(1+r)^(n−1) − ((1+r)^n − 1)/r)/r`.
fn annuity_derivative(r: f64, nper: f64, pmt: f64, pv: f64, t: f64) -> f64 {
    let (growth, annuity) = compound_factors(r, nper);
    let growth_prev = growth / (1.0 + r);
    nper * pv * growth_prev
        + pmt * (t * annuity + (1.0 + r * t) * (nper * growth_prev - annuity) / r)
}
