//! Prism Core
//!
//! This crate provides the foundational primitives for the Prism styling
//! engine:
//!
//! - **Colors**: a compact linear RGBA color type shared by every layer
//! - **Shadows**: single box-shadow layers composed into stacks upstream
//! - **Interaction state**: the per-instance hover/press/focus/disabled
//!   state machine every interactive component drives through events
//!
//! # Example
//!
//! ```rust
//! use prism_core::{Color, InteractionEvent, InteractionState, Phase};
//!
//! let mut state = InteractionState::default();
//! state.apply(InteractionEvent::PointerEnter);
//! state.apply(InteractionEvent::PointerDown);
//! assert_eq!(state.phase(), Phase::Pressed);
//!
//! let accent = Color::from_hex(0x1E66F5);
//! assert_eq!(accent.to_hex_string(), "#1e66f5");
//! ```

pub mod color;
pub mod interaction;
pub mod shadow;

pub use color::Color;
pub use interaction::{InteractionEvent, InteractionState, Phase};
pub use shadow::Shadow;
