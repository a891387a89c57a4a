//! Tabs
//!
//! A ghost-styled tab strip with one selected index. Selection is a
//! configuration input, not an interaction phase: the selected tab renders
//! its selected treatment regardless of hover or press, while disabled
//! still takes precedence and focus still layers its ring on top.

use crate::geometry::ControlGeometry;
use crate::style::{
    ghost_phase_styles, resolve_interactive, Cursor, PhaseStyles, ResolvedStyle, StyleSlots,
};
use prism_core::{InteractionEvent, InteractionState};
use prism_theme::{FocusRing, RadiusTokens, SpacingTokens, Theme, TypographyTokens};
use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabsSize {
    Sm,
    #[default]
    Md,
}

impl TabsSize {
    pub fn geometry(self) -> ControlGeometry {
        let spacing = SpacingTokens::default();
        let radius = RadiusTokens::default();
        let typography = TypographyTokens::default();
        match self {
            Self::Sm => ControlGeometry {
                height: 28.0,
                padding_x: spacing.space_2,
                padding_y: spacing.space_1,
                gap: spacing.space_1,
                radius: radius.radius_sm,
                icon_size: 14.0,
                text: typography.label_md,
            },
            Self::Md => ControlGeometry {
                height: 34.0,
                padding_x: spacing.space_3,
                padding_y: spacing.space_1,
                gap: spacing.space_2,
                radius: radius.radius_default,
                icon_size: 16.0,
                text: typography.label_lg,
            },
        }
    }
}

/// One tab in the strip.
#[derive(Clone, Debug, PartialEq)]
pub struct TabItem {
    pub label: String,
    pub disabled: bool,
}

impl TabItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug)]
pub struct Tabs {
    size: TabsSize,
    items: Vec<TabItem>,
    selected: usize,
    states: FxHashMap<usize, InteractionState>,
}

impl Tabs {
    pub fn new(size: TabsSize) -> Self {
        Self {
            size,
            items: Vec::new(),
            selected: 0,
            states: FxHashMap::default(),
        }
    }

    pub fn item(mut self, item: TabItem) -> Self {
        if item.disabled {
            self.states
                .insert(self.items.len(), InteractionState::disabled());
        }
        self.items.push(item);
        self
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn geometry(&self) -> ControlGeometry {
        self.size.geometry()
    }

    /// Move selection. Returns whether the selection changed; a disabled or
    /// out-of-range target leaves the current selection in place.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            tracing::warn!(index, len = self.items.len(), "select for out-of-range tab");
            return false;
        };
        if item.disabled || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn state(&self, index: usize) -> InteractionState {
        self.states.get(&index).copied().unwrap_or_default()
    }

    pub fn handle_event(&mut self, index: usize, event: InteractionEvent) {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "event for out-of-range tab");
            return;
        }
        self.states.entry(index).or_default().apply(event);
    }

    pub fn set_disabled(&mut self, index: usize, disabled: bool) {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "disable for out-of-range tab");
            return;
        }
        self.items[index].disabled = disabled;
        self.states.entry(index).or_default().set_disabled(disabled);
    }

    /// Resolve one tab. The selected tab uses the selected slots for every
    /// non-disabled phase, so hover and press do not restyle it.
    pub fn style_for(&self, index: usize, theme: &Theme) -> ResolvedStyle {
        let ghost = ghost_phase_styles(theme);
        let table = if index == self.selected {
            let selected = StyleSlots {
                background: theme.bg.state.selected,
                text: theme.text.primary,
                icon: theme.icon.default,
                border: None,
                cursor: Cursor::Default,
            };
            PhaseStyles {
                resting: selected,
                hovered: selected,
                pressed: selected,
                disabled: ghost.disabled,
            }
        } else {
            ghost
        };
        resolve_interactive(&table, self.state(index), theme, FocusRing::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_theme::{ThemeName, ThemeRegistry};

    fn light() -> Theme {
        **ThemeRegistry::new().unwrap().theme(ThemeName::Light)
    }

    fn strip() -> Tabs {
        Tabs::new(TabsSize::Md)
            .item(TabItem::new("Files"))
            .item(TabItem::new("Search"))
            .item(TabItem::new("History").disabled(true))
    }

    #[test]
    fn selected_tab_ignores_hover_and_press() {
        let theme = light();
        let mut tabs = strip();
        tabs.handle_event(0, InteractionEvent::PointerEnter);
        tabs.handle_event(0, InteractionEvent::PointerDown);

        let style = tabs.style_for(0, &theme);
        assert_eq!(style.background, theme.bg.state.selected);
        assert_eq!(style.text, theme.text.primary);
    }

    #[test]
    fn unselected_tab_uses_ghost_palette() {
        let theme = light();
        let mut tabs = strip();
        tabs.handle_event(1, InteractionEvent::PointerEnter);
        assert_eq!(
            tabs.style_for(1, &theme).background,
            theme.bg.state.ghost_hover
        );
    }

    #[test]
    fn selecting_a_disabled_tab_is_refused() {
        let mut tabs = strip();
        assert!(!tabs.select(2));
        assert_eq!(tabs.selected(), 0);
        assert!(tabs.select(1));
        assert_eq!(tabs.selected(), 1);
    }

    #[test]
    fn focus_ring_layers_over_the_selected_treatment() {
        let theme = light();
        let mut tabs = strip();
        tabs.handle_event(0, InteractionEvent::FocusGained);
        let style = tabs.style_for(0, &theme);
        assert_eq!(style.background, theme.bg.state.selected);
        assert!(style.focus_ring.is_some());
    }

    #[test]
    fn disabled_overrides_selection() {
        let theme = light();
        let mut tabs = strip();
        tabs.set_disabled(0, true);
        let style = tabs.style_for(0, &theme);
        assert_eq!(style.background, theme.bg.state.ghost);
        assert_eq!(style.text, theme.text.muted);
    }
}
