//! Newton-Raphson root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// The iteration stops as soon as `|f(x_n)| < config.tolerance`, so the
/// returned root always satisfies the residual tolerance.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// * [`MathError::DivisionByZero`] if `|f'(x_n)|` falls below machine epsilon
/// * [`MathError::NonFinite`] if an iterate, residual or derivative is NaN or infinite
/// * [`MathError::ConvergenceFailed`] after `config.max_iterations` steps
/// * [`MathError::InvalidInput`] if the configuration is invalid
///
/// # Example
///
/// ```rust
/// use fincalc_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;

    let mut x = initial_guess;
    let mut fx = f(x);

    for iteration in 0..=config.max_iterations {
        if !x.is_finite() || !fx.is_finite() {
            warn!("Newton-Raphson hit a non-finite value at x = {x} (iteration {iteration})");
            return Err(MathError::NonFinite { x });
        }

        if fx.abs() < config.tolerance {
            debug!("Newton-Raphson converged to {x} in {iteration} iterations (residual {fx:.2e})");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        if iteration == config.max_iterations {
            break;
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(MathError::NonFinite { x });
        }
        if dfx.abs() < f64::EPSILON {
            warn!("Newton-Raphson derivative vanished at x = {x}");
            return Err(MathError::DivisionByZero { value: dfx });
        }

        x -= fx / dfx;
        fx = f(x);
        trace!("Newton-Raphson step {}: x = {x}, f(x) = {fx:.6e}", iteration + 1);
    }

    warn!(
        "Newton-Raphson did not converge in {} iterations (residual {:.2e})",
        config.max_iterations,
        fx.abs()
    );
    Err(MathError::convergence_failed(
        config.max_iterations,
        fx.abs(),
    ))
}
