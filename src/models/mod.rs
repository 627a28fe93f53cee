//! Rust-side models the C structures convert into.

mod afi;
mod bmp;
mod rd;

pub use afi::*;
pub use bmp::*;
pub use rd::*;
