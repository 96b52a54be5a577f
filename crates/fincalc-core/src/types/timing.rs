//! Payment timing for annuities.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FinanceError;

/// When each periodic payment of an annuity is made.
///
/// The numeric codes match the spreadsheet `type` argument: `0` for payments
/// at the end of each period and `1` for payments at the beginning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentTiming {
    /// Payment at the end of each period (annuity-immediate)
    #[default]
    End,
    /// Payment at the beginning of each period (annuity-due)
    Begin,
}

impl PaymentTiming {
    /// Returns the spreadsheet code (`0` or `1`).
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            PaymentTiming::End => 0,
            PaymentTiming::Begin => 1,
        }
    }

    /// Returns the code as a multiplier for the `(1 + r * type)` factor.
    #[must_use]
    pub fn factor(self) -> f64 {
        f64::from(self.code())
    }

    /// Returns true for payments at the beginning of each period.
    #[must_use]
    pub fn is_begin(self) -> bool {
        matches!(self, PaymentTiming::Begin)
    }
}

impl TryFrom<i32> for PaymentTiming {
    type Error = FinanceError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PaymentTiming::End),
            1 => Ok(PaymentTiming::Begin),
            other => Err(FinanceError::invalid_argument(format!(
                "payment timing must be 0 (end) or 1 (begin), got {other}"
            ))),
        }
    }
}

impl fmt::Display for PaymentTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentTiming::End => "End of Period",
            PaymentTiming::Begin => "Beginning of Period",
        };
        write!(f, "{name}")
    }
}
