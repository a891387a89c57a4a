//! Prism Components
//!
//! The component style engine: per-component configuration plus the shared
//! phase-table resolver. Each interactive component owns interaction state
//! (per item index for grouped components) and exposes a pure resolve
//! function from `(configuration, state, theme)` to a [`ResolvedStyle`].
//!
//! ```rust
//! use prism_components::{Badge, BadgeSize};
//! use prism_theme::{AccentColor, ThemeContext};
//!
//! let ctx = ThemeContext::with_builtin().unwrap();
//! let style = Badge::new(AccentColor::Red)
//!     .size(BadgeSize::Lg)
//!     .bordered(true)
//!     .resolve(&ctx.theme());
//! assert_eq!(style.background, ctx.theme().bg.badge.red);
//! ```

pub mod badge;
pub mod button_group;
pub mod card;
pub mod dropdown;
pub mod geometry;
pub mod style;
pub mod tabs;

pub use badge::{Badge, BadgeSize};
pub use button_group::{ButtonGroup, ButtonGroupItem, ButtonGroupSize};
pub use card::{FileCard, TemplateCard};
pub use dropdown::{DropdownItem, DropdownMenu};
pub use geometry::ControlGeometry;
pub use style::{Border, Cursor, DividerStyle, PhaseStyles, ResolvedStyle, StyleSlots};
pub use tabs::{TabItem, Tabs, TabsSize};
