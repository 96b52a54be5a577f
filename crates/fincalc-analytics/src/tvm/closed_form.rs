//! Closed-form solutions of the annuity identity.

use fincalc_core::{FinanceError, FinanceResult, PaymentTiming};

use super::{compound_factors, finite_result, require_finite, validate_nper};

/// Present value of an annuity (spreadsheet `PV`).
///
/// # Formula
///
/// ```text
/// pv = (−pmt·(1+r·type)·((1+r)^n − 1)/r − fv) / (1+r)^n      r ≠ 0
/// pv = −fv − pmt·n                                          r = 0
/// ```
///
/// # Errors
///
/// InvalidArgument for a negative period count or non-finite input;
/// DomainError if the result is not finite (e.g. `rate == −1`).
pub fn present_value(
    rate: f64,
    nper: f64,
    pmt: f64,
    fv: f64,
    timing: PaymentTiming,
) -> FinanceResult<f64> {
    validate_nper(nper)?;
    require_finite(&[("rate", rate), ("pmt", pmt), ("fv", fv)])?;

    let pv = if rate == 0.0 {
        -fv - pmt * nper
    } else {
        let (growth, annuity) = compound_factors(rate, nper);
        (-pmt * (1.0 + rate * timing.factor()) * annuity - fv) / growth
    };
    finite_result(pv, "present value")
}

/// Future value of an annuity (spreadsheet `FV`).
///
/// # Formula
///
/// ```text
/// fv = −pv·(1+r)^n − pmt·(1+r·type)·((1+r)^n − 1)/r          r ≠ 0
/// fv = −pv − pmt·n                                          r = 0
/// ```
pub fn future_value(
    rate: f64,
    nper: f64,
    pmt: f64,
    pv: f64,
    timing: PaymentTiming,
) -> FinanceResult<f64> {
    validate_nper(nper)?;
    require_finite(&[("rate", rate), ("pmt", pmt), ("pv", pv)])?;

    let fv = if rate == 0.0 {
        -pv - pmt * nper
    } else {
        let (growth, annuity) = compound_factors(rate, nper);
        -pv * growth - pmt * (1.0 + rate * timing.factor()) * annuity
    };
    finite_result(fv, "future value")
}

/// Constant periodic payment (spreadsheet `PMT`).
///
/// # Formula
///
/// ```text
/// pmt = (−fv − pv·(1+r)^n) / (1+r·type) / (((1+r)^n − 1)/r)   r ≠ 0
/// pmt = (−pv − fv) / n                                      r = 0
/// ```
///
/// # Errors
///
/// DomainError when `nper == 0`, since no payment schedule exists.
pub fn payment(
    rate: f64,
    nper: f64,
    pv: f64,
    fv: f64,
    timing: PaymentTiming,
) -> FinanceResult<f64> {
    validate_nper(nper)?;
    require_finite(&[("rate", rate), ("pv", pv), ("fv", fv)])?;

    if nper == 0.0 {
        return Err(FinanceError::domain(
            "payment is undefined over zero periods",
        ));
    }

    let pmt = if rate == 0.0 {
        (-pv - fv) / nper
    } else {
        let (growth, annuity) = compound_factors(rate, nper);
        (-fv - pv * growth) / (1.0 + rate * timing.factor()) / annuity
    };
    finite_result(pmt, "payment")
}

/// Number of periods (spreadsheet `NPER`).
///
/// # Formula
///
/// ```text
/// a    = pmt·(1+r·type)/r
/// nper = ln((a − fv) / (pv + a)) / ln(1+r)                   r ≠ 0
/// nper = (−pv − fv) / pmt                                   r = 0
/// ```
///
/// # Errors
///
/// DomainError if `pmt` and `pv` are both zero with a nonzero rate, if `pmt`
/// is zero with a zero rate, or if the logarithm argument is not positive.
pub fn periods(
    rate: f64,
    pmt: f64,
    pv: f64,
    fv: f64,
    timing: PaymentTiming,
) -> FinanceResult<f64> {
    require_finite(&[("rate", rate), ("pmt", pmt), ("pv", pv), ("fv", fv)])?;

    if rate == 0.0 {
        if pmt == 0.0 {
            return Err(FinanceError::domain(
                "rate and payment cannot both be zero",
            ));
        }
        return finite_result((-pv - fv) / pmt, "number of periods");
    }

    if pmt == 0.0 && pv == 0.0 {
        return Err(FinanceError::domain(
            "payment and present value cannot both be zero when the rate is not zero",
        ));
    }
    if rate <= -1.0 {
        return Err(FinanceError::domain(format!(
            "number of periods is undefined for a rate of {rate}"
        )));
    }

    // ln((a − fv)/(pv + a)) taken as ln_1p of (a − fv)/(pv + a) − 1
    let annuity = pmt * (1.0 + rate * timing.factor()) / rate;
    let excess = -(pv + fv) / (pv + annuity);
    if excess.is_nan() || excess <= -1.0 {
        return Err(FinanceError::domain(format!(
            "no number of periods satisfies these cash flows (log argument {})",
            1.0 + excess
        )));
    }
    finite_result(excess.ln_1p() / rate.ln_1p(), "number of periods")
}
