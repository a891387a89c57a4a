//! Shared style resolution
//!
//! Every interactive component resolves its visual output the same way: a
//! per-phase slot table consulted through the fixed precedence encoded in
//! [`Phase`] (disabled, then pressed, then hovered, then resting), with
//! focus as an additive ring overlay that never changes which slots were
//! selected. Components differ only in which semantic roles fill the slots.

use prism_core::{Color, InteractionState, Phase};
use prism_theme::{resolve_shadow, Elevation, FocusRing, ShadowOptions, ShadowStack, Theme};
use smallvec::SmallVec;

/// Pointer cursor of a resolved style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    NotAllowed,
}

/// A resolved border: color plus stroke width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub color: Color,
    pub width: f32,
}

impl Border {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Divider/separator treatment between grouped items. Purely structural -
/// dividers carry no interaction state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerStyle {
    pub color: Color,
    pub width: f32,
}

/// The final style record for one rendered instance, computed fresh on
/// every relevant state or theme change.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub background: Color,
    pub text: Color,
    pub icon: Color,
    pub border: Option<Border>,
    pub shadow: ShadowStack,
    /// Focus overlay; present iff the instance is focused. Layered on top
    /// of the phase-selected slots, never replacing them.
    pub focus_ring: Option<ShadowStack>,
    pub cursor: Cursor,
}

/// Visual slots for one precedence phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSlots {
    pub background: Color,
    pub text: Color,
    pub icon: Color,
    pub border: Option<Border>,
    pub cursor: Cursor,
}

/// Per-phase slot table for one component configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseStyles {
    pub resting: StyleSlots,
    pub hovered: StyleSlots,
    pub pressed: StyleSlots,
    pub disabled: StyleSlots,
}

impl PhaseStyles {
    pub fn slots(&self, phase: Phase) -> &StyleSlots {
        match phase {
            Phase::Disabled => &self.disabled,
            Phase::Pressed => &self.pressed,
            Phase::Hovered => &self.hovered,
            Phase::Resting => &self.resting,
        }
    }
}

/// Resolve a phase table against an interaction state.
pub(crate) fn resolve_interactive(
    table: &PhaseStyles,
    state: InteractionState,
    theme: &Theme,
    focus_ring: FocusRing,
) -> ResolvedStyle {
    let slots = table.slots(state.phase());
    ResolvedStyle {
        background: slots.background,
        text: slots.text,
        icon: slots.icon,
        border: slots.border,
        shadow: SmallVec::new(),
        focus_ring: state.focused.then(|| {
            resolve_shadow(
                Elevation::ComponentFocus,
                theme,
                ShadowOptions {
                    with_border: false,
                    focus_ring,
                },
            )
        }),
        cursor: slots.cursor,
    }
}

/// The neutral ghost palette shared by button-group items, unselected tabs,
/// and dropdown items.
pub(crate) fn ghost_phase_styles(theme: &Theme) -> PhaseStyles {
    let base = StyleSlots {
        background: theme.bg.state.ghost,
        text: theme.text.secondary,
        icon: theme.icon.default,
        border: None,
        cursor: Cursor::Pointer,
    };
    PhaseStyles {
        resting: base,
        hovered: StyleSlots {
            background: theme.bg.state.ghost_hover,
            ..base
        },
        pressed: StyleSlots {
            background: theme.bg.state.ghost_pressed,
            ..base
        },
        disabled: StyleSlots {
            background: theme.bg.state.ghost,
            text: theme.text.muted,
            icon: theme.icon.disabled,
            border: None,
            cursor: Cursor::NotAllowed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::InteractionState;
    use prism_theme::{ThemeName, ThemeRegistry};

    fn light() -> Theme {
        **ThemeRegistry::new().unwrap().theme(ThemeName::Light)
    }

    #[test]
    fn precedence_first_match_wins() {
        let theme = light();
        let table = ghost_phase_styles(&theme);

        let all_flags = InteractionState {
            hovered: true,
            pressed: true,
            focused: false,
            disabled: true,
        };
        let style = resolve_interactive(&table, all_flags, &theme, FocusRing::Default);
        assert_eq!(style.background, table.disabled.background);
        assert_eq!(style.cursor, Cursor::NotAllowed);

        let pressed_and_hovered = InteractionState {
            hovered: true,
            pressed: true,
            ..Default::default()
        };
        let style = resolve_interactive(&table, pressed_and_hovered, &theme, FocusRing::Default);
        assert_eq!(style.background, table.pressed.background);
    }

    #[test]
    fn focus_is_additive_only() {
        let theme = light();
        let table = ghost_phase_styles(&theme);
        let hovered = InteractionState {
            hovered: true,
            ..Default::default()
        };
        let focused_hovered = InteractionState {
            focused: true,
            ..hovered
        };

        let without = resolve_interactive(&table, hovered, &theme, FocusRing::Default);
        let with = resolve_interactive(&table, focused_hovered, &theme, FocusRing::Default);
        assert!(without.focus_ring.is_none());
        assert!(with.focus_ring.is_some());
        assert_eq!(without.background, with.background);
        assert_eq!(without.text, with.text);
        assert_eq!(without.icon, with.icon);
    }

    #[test]
    fn resolution_is_idempotent() {
        let theme = light();
        let table = ghost_phase_styles(&theme);
        let state = InteractionState {
            hovered: true,
            focused: true,
            ..Default::default()
        };
        assert_eq!(
            resolve_interactive(&table, state, &theme, FocusRing::Default),
            resolve_interactive(&table, state, &theme, FocusRing::Default)
        );
    }
}
