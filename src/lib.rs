//! Forward-mode automatic differentiation over a runtime-sized parameter space.
//!
//! [`AutoDiff<F>`] pairs a value with its gradient with respect to `n`
//! independent parameters. Write an expression once with ordinary operators
//! and the functions in [`math`], and read off both the value and the exact
//! gradient:
//!
//! ```
//! use autodiff::AutoDiff;
//!
//! let w = AutoDiff::seed(3.0_f64, 2, 0);
//! let z = AutoDiff::seed(2.5_f64, 2, 1);
//! let y = &w * &z + w.sin();
//! assert_eq!(y.value, 7.5 + 3.0_f64.sin());
//! assert_eq!(y.derivatives, vec![2.5 + 3.0_f64.cos(), 3.0]);
//! ```

pub mod api;
pub mod autodiff;
pub mod error;
pub mod float;
pub mod math;
mod traits;

pub use api::{gradient, jacobian, jvp};
pub use autodiff::AutoDiff;
pub use error::AutoDiffError;
pub use float::Float;

/// Type alias for AD numbers over `f64`.
pub type AutoDiff64 = AutoDiff<f64>;
/// Type alias for AD numbers over `f32`.
pub type AutoDiff32 = AutoDiff<f32>;
