//! Interest/principal split of a constant-payment loan.
//!
//! Each payment of an annuity pays the period's interest on the outstanding
//! capital first; the remainder reduces the capital. The split therefore
//! depends on every earlier period and is produced by walking the schedule
//! from period 1.
//!
//! # Usage
//!
//! ```rust
//! use fincalc_analytics::amortization::AmortizationSchedule;
//! use fincalc_core::PaymentTiming;
//!
//! let schedule =
//!     AmortizationSchedule::new(0.1 / 12.0, 36.0, 8000.0, 0.0, PaymentTiming::End).unwrap();
//!
//! for entry in schedule.iter().take(3) {
//!     println!("{entry}");
//! }
//! assert_eq!(schedule.entries().len(), 36);
//! ```

use std::iter::FusedIterator;

use fincalc_core::{AmortizationEntry, FinanceError, FinanceResult, PaymentTiming};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::tvm::payment;

/// Terms of a constant-payment loan.
///
/// This is the serialized form of an [`AmortizationSchedule`]; deserializing
/// a schedule goes through [`AmortizationSchedule::new`], so the payment and
/// period count are always derived from the terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Interest rate per period.
    pub rate: f64,
    /// Number of periods.
    pub nper: f64,
    /// Amount borrowed.
    pub pv: f64,
    /// Balance left after the last payment, as a cash flow.
    #[serde(default)]
    pub fv: f64,
    /// Payment timing within each period.
    #[serde(default)]
    pub timing: PaymentTiming,
}

/// A constant-payment amortization schedule.
///
/// Holds only the loan terms and the payment; entries are generated on demand
/// by [`iter`](Self::iter), which can be called any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LoanTerms", into = "LoanTerms")]
pub struct AmortizationSchedule {
    rate: f64,
    nper: f64,
    pv: f64,
    fv: f64,
    timing: PaymentTiming,
    payment: f64,
    periods: u32,
}

impl AmortizationSchedule {
    /// Builds the schedule for a loan of `pv` repaid down to `-fv` over `nper` periods.
    ///
    /// # Errors
    ///
    /// Fails whenever [`payment`] fails for the same terms, and with
    /// InvalidArgument if the period count does not fit a `u32`.
    pub fn new(
        rate: f64,
        nper: f64,
        pv: f64,
        fv: f64,
        timing: PaymentTiming,
    ) -> FinanceResult<Self> {
        let pmt = payment(rate, nper, pv, fv, timing)?;

        let periods = nper.ceil();
        if periods > f64::from(u32::MAX) {
            return Err(FinanceError::invalid_argument(format!(
                "too many periods for a schedule: {nper}"
            )));
        }

        debug!("Amortization schedule: {periods} periods, payment {pmt}, timing {timing}");
        Ok(Self {
            rate,
            nper,
            pv,
            fv,
            timing,
            payment: pmt,
            periods: periods as u32,
        })
    }

    /// Constant periodic payment.
    pub fn payment(&self) -> f64 {
        self.payment
    }

    /// Number of entries in the schedule, `ceil(nper)`.
    pub fn periods(&self) -> u32 {
        self.periods
    }

    /// Periodic interest rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Number of periods as given.
    pub fn nper(&self) -> f64 {
        self.nper
    }

    /// Payment timing.
    pub fn timing(&self) -> PaymentTiming {
        self.timing
    }

    /// The loan terms this schedule was built from.
    pub fn terms(&self) -> LoanTerms {
        LoanTerms {
            rate: self.rate,
            nper: self.nper,
            pv: self.pv,
            fv: self.fv,
            timing: self.timing,
        }
    }

    /// Returns a fresh iterator over the schedule, starting at period 1.
    pub fn iter(&self) -> AmortizationIter {
        AmortizationIter {
            rate: self.rate,
            payment: self.payment,
            timing: self.timing,
            capital: self.pv,
            period: 0,
            remaining: self.periods,
        }
    }

    /// Entry for the 1-based period `per`.
    ///
    /// Walks periods `1..=per`, so the cost is linear in `per`. Prefer
    /// [`iter`](Self::iter) when several periods are needed.
    pub fn entry(&self, per: u32) -> FinanceResult<AmortizationEntry> {
        if per == 0 || per > self.periods {
            return Err(FinanceError::invalid_argument(format!(
                "period must be between 1 and {}, got {per}",
                self.periods
            )));
        }
        self.iter()
            .nth((per - 1) as usize)
            .ok_or_else(|| FinanceError::invalid_argument(format!("no entry for period {per}")))
    }

    /// Collects the whole schedule.
    pub fn entries(&self) -> Vec<AmortizationEntry> {
        self.iter().collect()
    }
}

impl TryFrom<LoanTerms> for AmortizationSchedule {
    type Error = FinanceError;

    fn try_from(terms: LoanTerms) -> FinanceResult<Self> {
        Self::new(terms.rate, terms.nper, terms.pv, terms.fv, terms.timing)
    }
}

impl From<AmortizationSchedule> for LoanTerms {
    fn from(schedule: AmortizationSchedule) -> Self {
        schedule.terms()
    }
}

impl IntoIterator for &AmortizationSchedule {
    type Item = AmortizationEntry;
    type IntoIter = AmortizationIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the entries of an [`AmortizationSchedule`].
#[derive(Debug, Clone)]
pub struct AmortizationIter {
    rate: f64,
    payment: f64,
    timing: PaymentTiming,
    capital: f64,
    period: u32,
    remaining: u32,
}

impl Iterator for AmortizationIter {
    type Item = AmortizationEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.period += 1;
        let period = self.period;

        // A payment made at the start of period 1 precedes any accrual
        let interest = if self.timing.is_begin() && period == 1 {
            0.0
        } else {
            -self.capital * self.rate
        };
        let principal = self.payment - interest;
        self.capital += principal;

        Some(AmortizationEntry {
            period,
            interest,
            principal,
            balance: self.capital,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AmortizationIter {}

impl FusedIterator for AmortizationIter {}

/// Interest and principal paid in period `per` (1-based).
///
/// Returns `(interest, principal)`.
///
/// # Errors
///
/// * InvalidArgument if `per` is outside `1..=ceil(nper)`
/// * Any error of [`payment`] for the same terms
pub fn split_period(
    rate: f64,
    per: u32,
    nper: f64,
    pv: f64,
    fv: f64,
    timing: PaymentTiming,
) -> FinanceResult<(f64, f64)> {
    let entry = AmortizationSchedule::new(rate, nper, pv, fv, timing)?.entry(per)?;
    Ok((entry.interest, entry.principal))
}

/// Interest portion of the payment in period `per` (spreadsheet `IPMT`).
///
/// ```rust
/// use fincalc_analytics::amortization::interest_payment;
/// use fincalc_core::PaymentTiming;
///
/// let ipmt = interest_payment(0.1 / 12.0, 3, 36.0, 8000.0, 0.0, PaymentTiming::End).unwrap();
/// assert!((ipmt - (-63.462189)).abs() < 1e-6);
/// ```
pub fn interest_payment(
    rate: f64,
    per: u32,
    nper: f64,
    pv: f64,
    fv: f64,
    timing: PaymentTiming,
) -> FinanceResult<f64> {
    split_period(rate, per, nper, pv, fv, timing).map(|(interest, _)| interest)
}

/// Principal portion of the payment in period `per` (spreadsheet `PPMT`).
pub fn principal_payment(
    rate: f64,
    per: u32,
    nper: f64,
    pv: f64,
    fv: f64,
    timing: PaymentTiming,
) -> FinanceResult<f64> {
    split_period(rate, per, nper, pv, fv, timing).map(|(_, principal)| principal)
}
