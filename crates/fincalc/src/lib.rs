//! # Fincalc
//!
//! Spreadsheet-compatible financial functions for Rust.
//!
//! This crate re-exports the public API of the Fincalc workspace:
//!
//! | Spreadsheet | Fincalc |
//! |-------------|---------|
//! | `EFFECT` / `NOMINAL` | [`effective_rate`] / [`nominal_rate`] |
//! | `PV` / `FV` | [`present_value`] / [`future_value`] |
//! | `PMT` / `NPER` | [`payment`] / [`periods`] |
//! | `RATE` | [`rate`] |
//! | `IPMT` / `PPMT` | [`interest_payment`] / [`principal_payment`] |
//! | `NPV` | [`net_present_value`] |
//! | `IRR` | [`internal_rate_of_return`] |
//! | `MIRR` | [`modified_internal_rate_of_return`] |
//!
//! Every function returns a [`FinanceResult`]; failures carry an
//! [`ErrorKind`] of InvalidArgument, DomainError or ConvergenceError.
//!
//! ## Example
//!
//! ```rust
//! use fincalc::prelude::*;
//!
//! let pmt = payment(0.1 / 12.0, 36.0, 8000.0, 0.0, PaymentTiming::End)?;
//! let schedule = AmortizationSchedule::new(0.1 / 12.0, 36.0, 8000.0, 0.0, PaymentTiming::End)?;
//!
//! assert_eq!(schedule.payment(), pmt);
//! assert!(schedule.iter().last().is_some_and(|e| e.balance.abs() < 1e-6));
//! # Ok::<(), FinanceError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use fincalc_analytics::amortization::{
    interest_payment, principal_payment, split_period, AmortizationIter, AmortizationSchedule,
    LoanTerms,
};
#[cfg(feature = "parallel")]
pub use fincalc_analytics::cashflows::internal_rate_of_return_batch;
pub use fincalc_analytics::cashflows::{
    internal_rate_of_return, internal_rate_of_return_with_config,
    modified_internal_rate_of_return, net_present_value,
};
pub use fincalc_analytics::config::AnalyticsConfig;
pub use fincalc_analytics::tvm::{
    effective_rate, future_value, nominal_rate, payment, periods, present_value, rate,
    rate_with_config, TvmParameters,
};
pub use fincalc_core::{AmortizationEntry, ErrorKind, FinanceError, FinanceResult, PaymentTiming};
pub use fincalc_math::solvers::{SolverConfig, SolverResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fincalc_analytics::prelude::*;
}
