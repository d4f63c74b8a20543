//! Image containers used by the engine.
//!
//! - [`ImageRgb8`]: borrowed, validated view over the caller's RGB bytes.
//! - [`GrayImage`]: owned luma field in `f32`, the input of both estimators.
//! - [`io`]: decoding/encoding helpers for tools; the engine never calls them.
pub mod gray;
pub mod io;
pub mod rgb;
pub mod traits;

pub use self::gray::GrayImage;
pub use self::rgb::ImageRgb8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
