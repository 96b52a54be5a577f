//! # Fincalc Math
//!
//! Numerical utilities for the Fincalc time-value-of-money library.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson root finding with an explicit iteration cap
//! - **Configuration**: Serializable solver tolerance and iteration settings
//!
//! ## Design Philosophy
//!
//! - **Total Functions**: Every solve terminates, either converged or with an error
//! - **No Hidden State**: Problems are closures owned by the caller
//! - **Numerical Honesty**: NaN and infinities are reported, never returned

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{newton_raphson, NewtonSolver, Solver, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
