//! Gallery stylesheet.

mod styles;

pub use styles::global_styles;
