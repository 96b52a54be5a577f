//! Amortization schedule rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interest and principal paid in one period of an amortizing loan.
///
/// Amounts follow the cash-flow sign convention of the payment they split:
/// for a loan received (`pv > 0`) both components are negative and the
/// balance runs down towards `-fv`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based period number.
    pub period: u32,
    /// Interest portion of the payment.
    pub interest: f64,
    /// Principal portion of the payment.
    pub principal: f64,
    /// Outstanding capital after this period's payment.
    pub balance: f64,
}

impl AmortizationEntry {
    /// Total payment for the period (interest plus principal).
    #[must_use]
    pub fn payment(&self) -> f64 {
        self.interest + self.principal
    }
}

impl fmt::Display for AmortizationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4}  interest {:>14.6}  principal {:>14.6}  balance {:>16.6}",
            self.period, self.interest, self.principal, self.balance
        )
    }
}
