//! Cards
//!
//! Two clickable card surfaces. A template card is an elevated tile that
//! raises on hover; a file card is a flat bordered row that tints on hover.
//! Both carry one interaction state per instance and resolve through the
//! shared phase table, with shadows from the elevation resolver filled in
//! per phase. Dark-theme card shadows get a border ring blended in, since
//! shadow alone reads poorly on dark surfaces.

use crate::geometry::ControlGeometry;
use crate::style::{resolve_interactive, Border, Cursor, PhaseStyles, ResolvedStyle, StyleSlots};
use prism_core::{InteractionEvent, InteractionState, Phase};
use prism_theme::{
    resolve_shadow, Elevation, FocusRing, RadiusTokens, ShadowOptions, SpacingTokens, StrokeTokens,
    Theme, ThemeName, TypographyTokens,
};
use smallvec::SmallVec;

fn ambient_options(theme: &Theme) -> ShadowOptions {
    ShadowOptions {
        with_border: theme.name == ThemeName::Dark,
        ..Default::default()
    }
}

/// An elevated template tile.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateCard {
    state: InteractionState,
}

impl TemplateCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn handle_event(&mut self, event: InteractionEvent) {
        self.state.apply(event);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.state.set_disabled(disabled);
    }

    pub fn geometry(&self) -> ControlGeometry {
        let spacing = SpacingTokens::default();
        ControlGeometry {
            height: 120.0,
            padding_x: spacing.space_4,
            padding_y: spacing.space_4,
            gap: spacing.space_2,
            radius: RadiusTokens::default().radius_lg,
            icon_size: 20.0,
            text: TypographyTokens::default().body_md,
        }
    }

    pub fn resolve(&self, theme: &Theme) -> ResolvedStyle {
        let base = StyleSlots {
            background: theme.bg.elevated,
            text: theme.text.primary,
            icon: theme.icon.default,
            border: None,
            cursor: Cursor::Pointer,
        };
        let table = PhaseStyles {
            resting: base,
            hovered: base,
            pressed: base,
            disabled: StyleSlots {
                background: theme.bg.state.disabled,
                text: theme.text.disabled,
                icon: theme.icon.disabled,
                border: None,
                cursor: Cursor::NotAllowed,
            },
        };
        let mut style = resolve_interactive(&table, self.state, theme, FocusRing::Default);
        style.shadow = match self.state.phase() {
            // Hover raises the tile one level.
            Phase::Hovered | Phase::Pressed => {
                resolve_shadow(Elevation::ModalSm, theme, ambient_options(theme))
            }
            Phase::Resting => resolve_shadow(Elevation::Card, theme, ambient_options(theme)),
            Phase::Disabled => SmallVec::new(),
        };
        style
    }
}

/// A flat bordered file row.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileCard {
    state: InteractionState,
}

impl FileCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn handle_event(&mut self, event: InteractionEvent) {
        self.state.apply(event);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.state.set_disabled(disabled);
    }

    pub fn geometry(&self) -> ControlGeometry {
        let spacing = SpacingTokens::default();
        ControlGeometry {
            height: 48.0,
            padding_x: spacing.space_3,
            padding_y: spacing.space_2,
            gap: spacing.space_3,
            radius: RadiusTokens::default().radius_md,
            icon_size: 16.0,
            text: TypographyTokens::default().body_sm,
        }
    }

    pub fn resolve(&self, theme: &Theme) -> ResolvedStyle {
        let hairline = StrokeTokens::default().hairline;
        let base = StyleSlots {
            background: theme.bg.surface,
            text: theme.text.primary,
            icon: theme.icon.muted,
            border: Some(Border::new(theme.border.default, hairline)),
            cursor: Cursor::Pointer,
        };
        let table = PhaseStyles {
            resting: base,
            hovered: StyleSlots {
                background: theme.bg.elevated,
                ..base
            },
            pressed: StyleSlots {
                background: theme.bg.inset,
                ..base
            },
            disabled: StyleSlots {
                background: theme.bg.state.disabled,
                text: theme.text.disabled,
                icon: theme.icon.disabled,
                border: Some(Border::new(theme.border.disabled, hairline)),
                cursor: Cursor::NotAllowed,
            },
        };
        let mut style = resolve_interactive(&table, self.state, theme, FocusRing::Default);
        // Flat at rest; hover adds the card shadow.
        if self.state.phase() == Phase::Hovered {
            style.shadow = resolve_shadow(Elevation::Card, theme, ambient_options(theme));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_theme::ThemeRegistry;

    fn themes() -> (Theme, Theme) {
        let registry = ThemeRegistry::new().unwrap();
        (
            **registry.theme(ThemeName::Light),
            **registry.theme(ThemeName::Dark),
        )
    }

    #[test]
    fn template_card_raises_on_hover() {
        let (light, _) = themes();
        let mut card = TemplateCard::new();
        let resting = card.resolve(&light);
        card.handle_event(InteractionEvent::PointerEnter);
        let hovered = card.resolve(&light);

        assert_eq!(resting.shadow.len(), 2);
        assert_eq!(hovered.shadow.len(), 2);
        // The hover stack throws further than the resting stack.
        assert!(hovered.shadow[0].offset_y > resting.shadow[0].offset_y);
    }

    #[test]
    fn dark_card_shadow_includes_a_border_ring() {
        let (light, dark) = themes();
        let card = TemplateCard::new();
        assert_eq!(card.resolve(&light).shadow.len(), 2);
        let dark_stack = card.resolve(&dark).shadow;
        assert_eq!(dark_stack.len(), 3);
        assert_eq!(dark_stack[0].color, dark.border.default);
    }

    #[test]
    fn disabled_template_card_is_flat() {
        let (light, _) = themes();
        let mut card = TemplateCard::new();
        card.set_disabled(true);
        let style = card.resolve(&light);
        assert!(style.shadow.is_empty());
        assert_eq!(style.background, light.bg.state.disabled);
        assert_eq!(style.cursor, Cursor::NotAllowed);
    }

    #[test]
    fn file_card_is_flat_until_hovered() {
        let (light, _) = themes();
        let mut card = FileCard::new();
        assert!(card.resolve(&light).shadow.is_empty());

        card.handle_event(InteractionEvent::PointerEnter);
        let hovered = card.resolve(&light);
        assert!(!hovered.shadow.is_empty());
        assert_eq!(hovered.background, light.bg.elevated);

        card.handle_event(InteractionEvent::PointerDown);
        let pressed = card.resolve(&light);
        assert!(pressed.shadow.is_empty());
        assert_eq!(pressed.background, light.bg.inset);
    }

    #[test]
    fn file_card_keeps_its_border_in_every_phase() {
        let (light, _) = themes();
        let mut card = FileCard::new();
        for event in [InteractionEvent::PointerEnter, InteractionEvent::PointerDown] {
            card.handle_event(event);
            assert!(card.resolve(&light).border.is_some());
        }
        card.set_disabled(true);
        assert_eq!(
            card.resolve(&light).border.unwrap().color,
            light.border.disabled
        );
    }

    #[test]
    fn focus_ring_applies_to_cards_too() {
        let (light, _) = themes();
        let mut card = FileCard::new();
        card.handle_event(InteractionEvent::FocusGained);
        assert!(card.resolve(&light).focus_ring.is_some());
    }
}
