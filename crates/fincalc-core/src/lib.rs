//! # Fincalc Core
//!
//! Core types and the error model for the Fincalc time-value-of-money library.
//!
//! This crate provides the foundational building blocks used throughout Fincalc:
//!
//! - **Types**: [`PaymentTiming`] for annuity payments and [`AmortizationEntry`]
//!   for one row of a loan schedule
//! - **Errors**: [`FinanceError`], classified by [`ErrorKind`] into invalid
//!   arguments, domain errors and convergence failures
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//!
//! let timing = PaymentTiming::try_from(1).unwrap();
//! assert_eq!(timing, PaymentTiming::Begin);
//!
//! let err = PaymentTiming::try_from(3).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ErrorKind, FinanceError, FinanceResult};
    pub use crate::types::{AmortizationEntry, PaymentTiming};
}

// Re-export commonly used types at crate root
pub use error::{ErrorKind, FinanceError, FinanceResult};
pub use types::{AmortizationEntry, PaymentTiming};
