//! Error types for the Fincalc library.
//!
//! Every failure is reported to the immediate caller as a [`FinanceError`].
//! Callers that only care about the broad category can match on
//! [`FinanceError::kind`].

use fincalc_math::MathError;
use thiserror::Error;

/// A specialized Result type for Fincalc operations.
pub type FinanceResult<T> = Result<T, FinanceError>;

/// Caller-visible classification of a [`FinanceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: empty cash flow, negative period count, bad timing code.
    InvalidArgument,
    /// Well-formed input with no mathematical solution.
    DomainError,
    /// The iterative solver could not produce a root.
    ConvergenceError,
}

/// The main error type for Fincalc operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// Input has the wrong shape or is out of its allowed range.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the invalid argument.
        reason: String,
    },

    /// Input is valid but the requested quantity does not exist.
    #[error("Domain error: {reason}")]
    Domain {
        /// Why no solution exists.
        reason: String,
    },

    /// Numerical solver failed to converge within its iteration cap.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    Convergence {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Newton step undefined because the derivative vanished.
    #[error("Solver derivative vanished ({value:.2e}); Newton step is undefined")]
    ZeroDerivative {
        /// The near-zero derivative value.
        value: f64,
    },

    /// Solver iterate or residual became NaN or infinite.
    #[error("Solver diverged to a non-finite value at x = {x}")]
    NonFinite {
        /// The last iterate.
        x: f64,
    },
}

impl FinanceError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    /// Returns the broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Domain { .. } => ErrorKind::DomainError,
            Self::Convergence { .. } | Self::ZeroDerivative { .. } | Self::NonFinite { .. } => {
                ErrorKind::ConvergenceError
            }
        }
    }
}

impl From<MathError> for FinanceError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::Convergence {
                iterations,
                residual,
            },
            MathError::DivisionByZero { value } => Self::ZeroDerivative { value },
            MathError::NonFinite { x } => Self::NonFinite { x },
            MathError::InvalidInput { reason } => Self::InvalidArgument { reason },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanceError::invalid_argument("number of periods must be non-negative");
        assert!(err.to_string().contains("Invalid argument"));

        let err = FinanceError::domain("cash flow has no sign change");
        assert!(err.to_string().contains("sign change"));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            FinanceError::invalid_argument("x").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(FinanceError::domain("x").kind(), ErrorKind::DomainError);
        assert_eq!(
            FinanceError::ZeroDerivative { value: 0.0 }.kind(),
            ErrorKind::ConvergenceError
        );
    }

    #[test]
    fn test_from_math_error() {
        let err: FinanceError = MathError::convergence_failed(100, 3.5).into();
        assert_eq!(err.kind(), ErrorKind::ConvergenceError);
        assert!(err.to_string().contains("100 iterations"));

        let err: FinanceError = MathError::DivisionByZero { value: 0.0 }.into();
        assert!(matches!(err, FinanceError::ZeroDerivative { .. }));

        let err: FinanceError = MathError::invalid_input("bad tolerance").into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
