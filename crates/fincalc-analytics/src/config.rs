//! Analytics configuration.
//!
//! Controls the iterative solves (RATE and IRR): solver tolerance, iteration
//! cap and the default starting guesses used when a caller passes `None`.

use fincalc_core::{FinanceError, FinanceResult};
use fincalc_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

/// Default starting guess for the periodic rate solve.
pub const DEFAULT_RATE_GUESS: f64 = 0.1;

/// Default starting guess for the internal rate of return.
pub const DEFAULT_IRR_GUESS: f64 = 0.1;

/// Configuration for the iterative analytics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Newton-Raphson tolerance and iteration cap.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Starting guess for [`rate`](crate::tvm::rate).
    #[serde(default = "default_rate_guess")]
    pub rate_guess: f64,

    /// Starting guess for [`internal_rate_of_return`](crate::cashflows::internal_rate_of_return).
    #[serde(default = "default_irr_guess")]
    pub irr_guess: f64,
}

fn default_rate_guess() -> f64 {
    DEFAULT_RATE_GUESS
}

fn default_irr_guess() -> f64 {
    DEFAULT_IRR_GUESS
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            rate_guess: DEFAULT_RATE_GUESS,
            irr_guess: DEFAULT_IRR_GUESS,
        }
    }
}

impl AnalyticsConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// Missing fields take their defaults.
    ///
    /// ```rust
    /// use fincalc_analytics::config::AnalyticsConfig;
    ///
    /// let config = AnalyticsConfig::from_json(r#"{ "solver": { "tolerance": 1e-9 } }"#).unwrap();
    /// assert_eq!(config.solver.max_iterations, 100);
    /// assert!((config.irr_guess - 0.1).abs() < f64::EPSILON);
    /// ```
    pub fn from_json(json: &str) -> FinanceResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            FinanceError::invalid_argument(format!("malformed analytics configuration: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Checks solver settings and starting guesses.
    pub fn validate(&self) -> FinanceResult<()> {
        self.solver.validate()?;
        for (name, guess) in [("rate_guess", self.rate_guess), ("irr_guess", self.irr_guess)] {
            if !guess.is_finite() {
                return Err(FinanceError::invalid_argument(format!(
                    "{name} must be finite, got {guess}"
                )));
            }
        }
        Ok(())
    }
}
