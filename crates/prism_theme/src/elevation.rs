//! Elevation resolver
//!
//! Maps a named elevation level plus modifiers to a composite shadow
//! stack. Pure: the output depends only on the level, the options, and the
//! theme - never on interaction state. The dark variant uses stronger
//! ambient alphas because shadows on dark surfaces need more weight to
//! read as depth; `with_border` additionally blends a border-colored ring
//! into the stack for contexts where shadow alone gives too little
//! contrast (dark-theme cards, typically).

use crate::theme::{Theme, ThemeName};
use prism_core::{Color, Shadow};
use smallvec::{smallvec, SmallVec};

/// A composite shadow: outermost layer first.
pub type ShadowStack = SmallVec<[Shadow; 3]>;

/// Named elevation levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Elevation {
    /// Resting card surface.
    Card,
    /// Small floating surface (dropdown, popover).
    ModalSm,
    /// Large floating surface (dialog).
    ModalMd,
    /// Default interactive component depth.
    ComponentDefault,
    /// Focus treatment for interactive components.
    ComponentFocus,
}

/// Focus-ring treatments for `Elevation::ComponentFocus`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusRing {
    #[default]
    Default,
    Destructive,
}

/// Modifiers applied on top of the base level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShadowOptions {
    /// Blend a 1px border-colored ring into the stack.
    pub with_border: bool,
    /// Ring treatment; only consulted for `ComponentFocus`.
    pub focus_ring: FocusRing,
}

const FOCUS_RING_SPREAD: f32 = 3.0;
const FOCUS_RING_ALPHA: f32 = 0.4;

/// Resolve an elevation level to its shadow stack.
pub fn resolve_shadow(level: Elevation, theme: &Theme, options: ShadowOptions) -> ShadowStack {
    let ambient = ambient_color(theme.name);
    let mut stack: ShadowStack = match level {
        Elevation::Card => smallvec![
            Shadow::new(0.0, 1.0, 2.0, 0.0, ambient.key),
            Shadow::new(0.0, 2.0, 8.0, -1.0, ambient.soft),
        ],
        Elevation::ModalSm => smallvec![
            Shadow::new(0.0, 4.0, 16.0, -2.0, ambient.key),
            Shadow::new(0.0, 2.0, 8.0, -2.0, ambient.soft),
        ],
        Elevation::ModalMd => smallvec![
            Shadow::new(0.0, 12.0, 32.0, -4.0, ambient.key),
            Shadow::new(0.0, 4.0, 12.0, -4.0, ambient.soft),
        ],
        Elevation::ComponentDefault => smallvec![Shadow::new(0.0, 1.0, 2.0, 0.0, ambient.soft)],
        Elevation::ComponentFocus => {
            let ring = match options.focus_ring {
                FocusRing::Default => theme.border.focus,
                FocusRing::Destructive => theme.text.destructive,
            };
            smallvec![Shadow::ring(FOCUS_RING_SPREAD, ring.with_alpha(FOCUS_RING_ALPHA))]
        }
    };
    if options.with_border {
        stack.insert(0, Shadow::ring(1.0, theme.border.default));
    }
    stack
}

struct Ambient {
    key: Color,
    soft: Color,
}

fn ambient_color(name: ThemeName) -> Ambient {
    match name {
        ThemeName::Light => Ambient {
            key: Color::BLACK.with_alpha(0.10),
            soft: Color::BLACK.with_alpha(0.06),
        },
        ThemeName::Dark => Ambient {
            key: Color::BLACK.with_alpha(0.45),
            soft: Color::BLACK.with_alpha(0.30),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ThemeRegistry;

    fn themes() -> (Theme, Theme) {
        let registry = ThemeRegistry::new().unwrap();
        (
            **registry.theme(ThemeName::Light),
            **registry.theme(ThemeName::Dark),
        )
    }

    #[test]
    fn resolution_is_pure() {
        let (light, _) = themes();
        let opts = ShadowOptions {
            with_border: true,
            ..Default::default()
        };
        assert_eq!(
            resolve_shadow(Elevation::Card, &light, opts),
            resolve_shadow(Elevation::Card, &light, opts)
        );
    }

    #[test]
    fn with_border_prepends_a_border_ring() {
        let (light, _) = themes();
        let plain = resolve_shadow(Elevation::Card, &light, ShadowOptions::default());
        let bordered = resolve_shadow(
            Elevation::Card,
            &light,
            ShadowOptions {
                with_border: true,
                ..Default::default()
            },
        );
        assert_eq!(bordered.len(), plain.len() + 1);
        assert_eq!(bordered[0], Shadow::ring(1.0, light.border.default));
        assert_eq!(&bordered[1..], &plain[..]);
    }

    #[test]
    fn dark_theme_uses_heavier_ambient() {
        let (light, dark) = themes();
        let l = resolve_shadow(Elevation::Card, &light, ShadowOptions::default());
        let d = resolve_shadow(Elevation::Card, &dark, ShadowOptions::default());
        assert!(d[0].color.a > l[0].color.a);
    }

    #[test]
    fn focus_ring_treatments_differ() {
        let (light, _) = themes();
        let default = resolve_shadow(
            Elevation::ComponentFocus,
            &light,
            ShadowOptions::default(),
        );
        let destructive = resolve_shadow(
            Elevation::ComponentFocus,
            &light,
            ShadowOptions {
                focus_ring: FocusRing::Destructive,
                ..Default::default()
            },
        );
        assert_eq!(default.len(), 1);
        assert_ne!(default[0].color, destructive[0].color);
        // Rings never offset or blur.
        assert_eq!((default[0].offset_y, default[0].blur), (0.0, 0.0));
    }
}
