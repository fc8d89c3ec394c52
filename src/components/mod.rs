//! Gallery-only components.

mod nav;
mod swatch;

pub use nav::{GalleryShell, NavLocation};
pub use swatch::{DemoSection, Swatch};
