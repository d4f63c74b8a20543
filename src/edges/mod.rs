//! Gradient building blocks shared by the gradient estimator and the refiner.
//!
//! - [`grad`]: 3×3 Sobel derivatives with reflect padding.
//! - [`profile`]: per-column / per-row `f64` energy sums and their maxima.

pub mod grad;
pub mod profile;

pub use grad::{sobel_reflect, Sobel};
pub use profile::{Axis, EdgeProfile};
