pub mod config;
pub mod form;
pub mod render;
pub mod theme;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use units::{convert, LengthUnit};
