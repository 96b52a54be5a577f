//! Time-value-of-money (annuity) calculations.
//!
//! All functions solve for one term of the annuity identity
//!
//! ```text
//! pv·(1+r)^n + pmt·(1+r·type)·((1+r)^n − 1)/r + fv = 0
//! ```
//!
//! where `type` is `0` for payments at period end and `1` for payments at
//! period start. PV, FV, PMT and NPER have closed forms; the rate is found
//! with Newton-Raphson.
//!
//! # Usage
//!
//! ```rust
//! use fincalc_analytics::tvm::{present_value, TvmParameters};
//! use fincalc_core::PaymentTiming;
//!
//! // 20 payments of 500 at 8% per period
//! let pv = present_value(0.08, 20.0, 500.0, 0.0, PaymentTiming::End).unwrap();
//! assert!((pv - (-4909.073704)).abs() < 1e-6);
//!
//! let params = TvmParameters::new(0.08, 20.0).with_pmt(500.0);
//! assert_eq!(params.present_value().unwrap(), pv);
//! ```

mod closed_form;
mod conversion;
mod rate;

pub use closed_form::{future_value, payment, periods, present_value};
pub use conversion::{effective_rate, nominal_rate};
pub use rate::{rate, rate_with_config};

use fincalc_core::{FinanceError, FinanceResult, PaymentTiming};
use fincalc_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

/// The full set of annuity terms.
///
/// Each solving method reads only the terms it needs; for example
/// [`present_value`](Self::present_value) ignores `pv` and
/// [`rate`](Self::rate) ignores `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TvmParameters {
    /// Interest rate per period (may be zero).
    pub rate: f64,
    /// Number of periods.
    pub nper: f64,
    /// Payment per period.
    #[serde(default)]
    pub pmt: f64,
    /// Present value.
    #[serde(default)]
    pub pv: f64,
    /// Future value.
    #[serde(default)]
    pub fv: f64,
    /// Payment timing within each period.
    #[serde(default)]
    pub timing: PaymentTiming,
}

impl TvmParameters {
    /// Creates parameters with the given rate and period count; other terms are zero.
    #[must_use]
    pub fn new(rate: f64, nper: f64) -> Self {
        Self {
            rate,
            nper,
            ..Self::default()
        }
    }

    /// Sets the periodic payment.
    #[must_use]
    pub fn with_pmt(mut self, pmt: f64) -> Self {
        self.pmt = pmt;
        self
    }

    /// Sets the present value.
    #[must_use]
    pub fn with_pv(mut self, pv: f64) -> Self {
        self.pv = pv;
        self
    }

    /// Sets the future value.
    #[must_use]
    pub fn with_fv(mut self, fv: f64) -> Self {
        self.fv = fv;
        self
    }

    /// Sets the payment timing.
    #[must_use]
    pub fn with_timing(mut self, timing: PaymentTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Checks that every term is finite and the period count is non-negative.
    pub fn validate(&self) -> FinanceResult<()> {
        require_finite(&[
            ("rate", self.rate),
            ("pmt", self.pmt),
            ("pv", self.pv),
            ("fv", self.fv),
        ])?;
        validate_nper(self.nper)
    }

    /// Solves for the present value.
    pub fn present_value(&self) -> FinanceResult<f64> {
        present_value(self.rate, self.nper, self.pmt, self.fv, self.timing)
    }

    /// Solves for the future value.
    pub fn future_value(&self) -> FinanceResult<f64> {
        future_value(self.rate, self.nper, self.pmt, self.pv, self.timing)
    }

    /// Solves for the periodic payment.
    pub fn payment(&self) -> FinanceResult<f64> {
        payment(self.rate, self.nper, self.pv, self.fv, self.timing)
    }

    /// Solves for the number of periods.
    pub fn periods(&self) -> FinanceResult<f64> {
        periods(self.rate, self.pmt, self.pv, self.fv, self.timing)
    }

    /// Solves for the periodic rate, starting from `guess` (default 0.1).
    pub fn rate(&self, guess: Option<f64>) -> FinanceResult<f64> {
        rate(self.nper, self.pmt, self.pv, self.fv, self.timing, guess)
    }

    /// Solves for the periodic rate with an explicit solver configuration.
    pub fn rate_with_config(&self, guess: f64, config: &SolverConfig) -> FinanceResult<f64> {
        rate_with_config(self.nper, self.pmt, self.pv, self.fv, self.timing, guess, config)
    }
}

pub(crate) fn validate_nper(nper: f64) -> FinanceResult<()> {
    if nper.is_nan() || nper < 0.0 || nper.is_infinite() {
        return Err(FinanceError::invalid_argument(format!(
            "number of periods must be a non-negative finite number, got {nper}"
        )));
    }
    Ok(())
}

pub(crate) fn require_finite(terms: &[(&str, f64)]) -> FinanceResult<()> {
    match terms.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(FinanceError::invalid_argument(format!(
            "{name} must be finite, got {value}"
        ))),
        None => Ok(()),
    }
}

/// Returns `((1+rate)^nper, ((1+rate)^nper − 1)/rate)` for a nonzero rate.
///
/// Both factors go through `ln_1p`/`exp_m1` so that rates close to zero keep
/// full precision instead of collapsing `1 + rate` to `1`.
pub(crate) fn compound_factors(rate: f64, nper: f64) -> (f64, f64) {
    if rate > -1.0 {
        let ln_growth = nper * rate.ln_1p();
        (ln_growth.exp(), ln_growth.exp_m1() / rate)
    } else {
        let growth = (1.0 + rate).powf(nper);
        (growth, (growth - 1.0) / rate)
    }
}

/// Rejects NaN and infinite results instead of handing them to the caller.
pub(crate) fn finite_result(value: f64, what: &str) -> FinanceResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinanceError::domain(format!(
            "{what} is undefined for these inputs (evaluates to {value})"
        )))
    }
}
