//! Root-finding algorithms.
//!
//! Financial equations such as the annuity identity solved for the rate, or
//! the net present value solved for the internal rate of return, have no
//! closed form. They are solved here with Newton-Raphson iteration:
//!
//! - [`newton_raphson`]: Quadratic convergence when the derivative is available
//!
//! Every solve is bounded by [`SolverConfig::max_iterations`], so a call
//! always terminates with either a root or an error.
//!
//! # Example: Loan Rate
//!
//! ```rust
//! use fincalc_math::solvers::{newton_raphson, SolverConfig};
//!
//! // 5 annual payments of 250 repay a loan of 1000: find the periodic rate
//! let f = |r: f64| 1000.0 * (1.0 + r).powi(5) - 250.0 * ((1.0 + r).powi(5) - 1.0) / r;
//! let df = |r: f64| {
//!     let h = 1e-7;
//!     (f(r + h) - f(r - h)) / (2.0 * h)
//! };
//!
//! let result = newton_raphson(f, df, 0.1, &SolverConfig::default()).unwrap();
//! assert!(f(result.root).abs() < 1e-6);
//! ```

mod newton;

pub use newton::newton_raphson;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Default absolute tolerance on the residual.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Absolute tolerance on `|f(x)|` for convergence.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Maximum number of Newton steps.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the configuration describes a terminating solve.
    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Trait for root-finding solvers driven by a residual and its derivative.
///
/// # Example
///
/// ```rust
/// use fincalc_math::solvers::{NewtonSolver, Solver, SolverConfig};
///
/// let solver = NewtonSolver;
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = solver.solve(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub trait Solver: Send + Sync {
    /// Solves for a root of `f` starting from `initial_guess`.
    fn solve<F, D>(
        &self,
        f: F,
        derivative: D,
        initial_guess: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Newton-Raphson solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver;

impl Solver for NewtonSolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: D,
        initial_guess: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        newton_raphson(f, derivative, initial_guess, config)
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of Newton steps taken.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
