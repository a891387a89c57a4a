//! Prism Theme System
//!
//! Design tokens and theme resolution for the Prism component library.
//!
//! # Overview
//!
//! The theme system is a pipeline of small, load-time-checked layers:
//!
//! - **Primitive palette**: immutable color ramps, the only place concrete
//!   color values live
//! - **Semantic token mapper**: symbolic references (`"gray-950"`,
//!   `"transparent-red-10"`) resolved to palette entries, strictly at
//!   theme construction
//! - **Theme registry**: exactly two fully-resolved variants (light, dark)
//!   with structurally identical role trees
//! - **Theme context**: the injected active-theme state - atomic snapshot
//!   swap, synchronous subscriber notification
//! - **Elevation resolver**: named shadow levels with border and
//!   focus-ring modifiers
//!
//! # Quick Start
//!
//! ```rust
//! use prism_theme::{ThemeContext, ThemeName};
//!
//! let ctx = ThemeContext::with_builtin().unwrap();
//! let theme = ctx.theme();
//! let accent = theme.text.accent;
//!
//! ctx.set_active(ThemeName::Dark);
//! assert_ne!(ctx.theme().text.accent, accent);
//! ```
//!
//! # Errors
//!
//! Every configuration problem - an unknown ramp or shade, an unknown role
//! path in an override file, an unknown theme name - surfaces as a
//! [`ThemeError`] or [`TokenError`] before the theme is observable.
//! Render-time code never sees a symbolic placeholder.

pub mod context;
pub mod elevation;
pub mod error;
pub mod palette;
pub mod registry;
pub mod resolve;
pub mod theme;
pub mod themes;
pub mod tokens;

pub use context::{SubscriptionId, ThemeContext};
pub use elevation::{resolve_shadow, Elevation, FocusRing, ShadowOptions, ShadowStack};
pub use error::ThemeError;
pub use palette::{ColorRamp, Palette};
pub use registry::{ThemeOverrides, ThemeRegistry};
pub use resolve::{TokenError, TokenRef, NEUTRAL_FALLBACK};
pub use theme::{
    AccentColor, AccentSlots, BasicScale, BasicSlots, BgColors, BorderColors, IconColors,
    StateColors, TextColors, Theme, ThemeName,
};
pub use tokens::*;
