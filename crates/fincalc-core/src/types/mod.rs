//! Domain types for time-value-of-money analytics.
//!
//! - [`PaymentTiming`]: Whether annuity payments fall at period start or end
//! - [`AmortizationEntry`]: Interest/principal split for one loan period

mod amortization;
mod timing;

pub use amortization::AmortizationEntry;
pub use timing::PaymentTiming;
