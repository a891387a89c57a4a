//! Non-color design tokens
//!
//! Load-time constant scales consumed by component geometry: spacing,
//! corner radius, stroke width, and typography. These are theme-independent
//! collaborators of the style engine - the same table serves both variants.

mod radius;
mod spacing;
mod stroke;
mod typography;

pub use radius::*;
pub use spacing::*;
pub use stroke::*;
pub use typography::*;
