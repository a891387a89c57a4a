//! Dropdown menu
//!
//! A floating item list: an elevated container styled at the small-modal
//! level, ghost-styled items tracked per index, destructive items swapping
//! in the destructive foreground roles, and structural separators.

use crate::geometry::ControlGeometry;
use crate::style::{
    ghost_phase_styles, resolve_interactive, Cursor, DividerStyle, ResolvedStyle, StyleSlots,
};
use prism_core::{InteractionEvent, InteractionState};
use prism_theme::{
    resolve_shadow, Elevation, FocusRing, RadiusTokens, ShadowOptions, SpacingTokens, StrokeTokens,
    Theme, ThemeName, TypographyTokens,
};
use rustc_hash::FxHashMap;

/// One menu entry.
#[derive(Clone, Debug, PartialEq)]
pub struct DropdownItem {
    pub label: String,
    pub destructive: bool,
    pub disabled: bool,
}

impl DropdownItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            destructive: false,
            disabled: false,
        }
    }

    pub fn destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Default)]
pub struct DropdownMenu {
    items: Vec<DropdownItem>,
    states: FxHashMap<usize, InteractionState>,
}

impl DropdownMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: DropdownItem) -> Self {
        if item.disabled {
            self.states
                .insert(self.items.len(), InteractionState::disabled());
        }
        self.items.push(item);
        self
    }

    pub fn items(&self) -> &[DropdownItem] {
        &self.items
    }

    pub fn item_geometry(&self) -> ControlGeometry {
        let spacing = SpacingTokens::default();
        ControlGeometry {
            height: 30.0,
            padding_x: spacing.space_2,
            padding_y: spacing.space_1,
            gap: spacing.space_2,
            radius: RadiusTokens::default().radius_sm,
            icon_size: 14.0,
            text: TypographyTokens::default().body_sm,
        }
    }

    pub fn state(&self, index: usize) -> InteractionState {
        self.states.get(&index).copied().unwrap_or_default()
    }

    pub fn handle_event(&mut self, index: usize, event: InteractionEvent) {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "event for out-of-range item");
            return;
        }
        self.states.entry(index).or_default().apply(event);
    }

    pub fn set_disabled(&mut self, index: usize, disabled: bool) {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "disable for out-of-range item");
            return;
        }
        self.items[index].disabled = disabled;
        self.states.entry(index).or_default().set_disabled(disabled);
    }

    /// The floating container surface.
    pub fn surface_style(&self, theme: &Theme) -> ResolvedStyle {
        ResolvedStyle {
            background: theme.bg.elevated,
            text: theme.text.primary,
            icon: theme.icon.default,
            border: None,
            shadow: resolve_shadow(
                Elevation::ModalSm,
                theme,
                ShadowOptions {
                    with_border: theme.name == ThemeName::Dark,
                    ..Default::default()
                },
            ),
            focus_ring: None,
            cursor: Cursor::Default,
        }
    }

    /// Resolve one menu item. Destructive items swap in the destructive
    /// foreground roles and a soft red hover fill; their focus ring follows.
    pub fn item_style(&self, index: usize, theme: &Theme) -> ResolvedStyle {
        let destructive = self
            .items
            .get(index)
            .map(|item| item.destructive)
            .unwrap_or(false);

        let mut table = ghost_phase_styles(theme);
        let ring = if destructive {
            table.resting.text = theme.text.destructive;
            table.resting.icon = theme.icon.destructive;
            table.hovered = StyleSlots {
                background: theme.bg.basic.red.soft,
                ..table.resting
            };
            table.pressed = StyleSlots {
                background: theme.bg.badge.red,
                ..table.resting
            };
            FocusRing::Destructive
        } else {
            FocusRing::Default
        };
        resolve_interactive(&table, self.state(index), theme, ring)
    }

    /// Separator between item sections.
    pub fn separator_style(&self, theme: &Theme) -> DividerStyle {
        DividerStyle {
            color: theme.border.subtle,
            width: StrokeTokens::default().hairline,
        }
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

    fn menu() -> DropdownMenu {
        DropdownMenu::new()
            .item(DropdownItem::new("Rename"))
            .item(DropdownItem::new("Duplicate"))
            .item(DropdownItem::new("Delete").destructive(true))
    }

    #[test]
    fn surface_floats_at_small_modal_level() {
        let (light, dark) = themes();
        let menu = menu();
        assert_eq!(menu.surface_style(&light).shadow.len(), 2);
        // Dark surfaces blend in a border ring.
        assert_eq!(menu.surface_style(&dark).shadow.len(), 3);
        assert_eq!(menu.surface_style(&light).background, light.bg.elevated);
    }

    #[test]
    fn destructive_item_uses_destructive_foreground() {
        let (light, _) = themes();
        let menu = menu();
        let style = menu.item_style(2, &light);
        assert_eq!(style.text, light.text.destructive);
        assert_eq!(style.icon, light.icon.destructive);
    }

    #[test]
    fn destructive_hover_tints_red() {
        let (light, _) = themes();
        let mut menu = menu();
        menu.handle_event(2, InteractionEvent::PointerEnter);
        assert_eq!(menu.item_style(2, &light).background, light.bg.basic.red.soft);
        // Plain neighbors keep the neutral hover.
        menu.handle_event(0, InteractionEvent::PointerEnter);
        assert_eq!(
            menu.item_style(0, &light).background,
            light.bg.state.ghost_hover
        );
    }

    #[test]
    fn destructive_focus_ring_differs_from_default() {
        let (light, _) = themes();
        let mut menu = menu();
        menu.handle_event(0, InteractionEvent::FocusGained);
        menu.handle_event(2, InteractionEvent::FocusGained);
        let plain = menu.item_style(0, &light).focus_ring.unwrap();
        let destructive = menu.item_style(2, &light).focus_ring.unwrap();
        assert_ne!(plain[0].color, destructive[0].color);
    }

    #[test]
    fn disabled_item_is_inert() {
        let (light, _) = themes();
        let mut menu = DropdownMenu::new()
            .item(DropdownItem::new("Export"))
            .item(DropdownItem::new("Import").disabled(true));
        menu.handle_event(1, InteractionEvent::PointerEnter);
        let style = menu.item_style(1, &light);
        assert_eq!(style.background, light.bg.state.ghost);
        assert_eq!(style.text, light.text.muted);
        assert_eq!(style.cursor, Cursor::NotAllowed);
    }
}
