//! # Fincalc Analytics
//!
//! Time-value-of-money and cash-flow analytics with spreadsheet semantics.
//!
//! This crate contains all calculation logic of the Fincalc library:
//! - **TVM**: Present value, future value, payment, number of periods
//!   (closed forms) and periodic rate (Newton-Raphson)
//! - **Rate Conversion**: Effective and nominal annual rates
//! - **Cash Flows**: Net present value, internal rate of return and modified
//!   internal rate of return
//! - **Amortization**: Interest/principal split per period and lazy schedules
//!
//! ## Sign Convention
//!
//! Money received is positive and money paid out is negative, exactly as in
//! spreadsheet financial functions. Borrowing 8000 (`pv = 8000`) therefore
//! gives a negative payment.
//!
//! ## Usage
//!
//! ```rust
//! use fincalc_analytics::prelude::*;
//!
//! // Monthly payment on an 8000 loan at 10% a year over 3 years
//! let pmt = payment(0.10 / 12.0, 36.0, 8000.0, 0.0, PaymentTiming::End).unwrap();
//! assert!((pmt - (-258.137498)).abs() < 1e-6);
//!
//! // Internal rate of return of an investment
//! let flows = [-70000.0, 12000.0, 15000.0, 18000.0, 21000.0];
//! let irr = internal_rate_of_return(&flows, None).unwrap();
//! assert!((irr - (-0.02124485)).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod amortization;
pub mod cashflows;
pub mod config;
pub mod tvm;

pub use fincalc_core::{ErrorKind, FinanceError, FinanceResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{
        interest_payment, principal_payment, split_period, AmortizationIter,
        AmortizationSchedule, LoanTerms,
    };
    #[cfg(feature = "parallel")]
    pub use crate::cashflows::internal_rate_of_return_batch;
    pub use crate::cashflows::{
        internal_rate_of_return, internal_rate_of_return_with_config,
        modified_internal_rate_of_return, net_present_value,
    };
    pub use crate::config::AnalyticsConfig;
    pub use crate::tvm::{
        effective_rate, future_value, nominal_rate, payment, periods, present_value, rate,
        rate_with_config, TvmParameters,
    };
    pub use fincalc_core::prelude::*;
    pub use fincalc_math::solvers::SolverConfig;
}
