//! Button group
//!
//! A horizontal run of ghost-styled action items separated by structural
//! dividers. Interaction state is tracked per item index - hovering or
//! pressing one item never leaks into its neighbors, and a disabled item
//! absorbs pointer events while the rest of the group stays live.

use crate::geometry::ControlGeometry;
use crate::style::{ghost_phase_styles, resolve_interactive, DividerStyle, ResolvedStyle};
use prism_core::{InteractionEvent, InteractionState};
use prism_theme::{
    FocusRing, RadiusTokens, SpacingTokens, StrokeTokens, Theme, TypographyTokens,
};
use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonGroupSize {
    Sm,
    #[default]
    Md,
}

impl ButtonGroupSize {
    pub fn geometry(self) -> ControlGeometry {
        let spacing = SpacingTokens::default();
        let radius = RadiusTokens::default();
        let typography = TypographyTokens::default();
        match self {
            Self::Sm => ControlGeometry {
                height: 26.0,
                padding_x: spacing.space_2,
                padding_y: spacing.space_1,
                gap: spacing.space_1,
                radius: radius.radius_sm,
                icon_size: 14.0,
                text: typography.label_md,
            },
            Self::Md => ControlGeometry {
                height: 32.0,
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

/// One action in the group.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonGroupItem {
    pub label: String,
    pub disabled: bool,
}

impl ButtonGroupItem {
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

#[derive(Debug, Default)]
pub struct ButtonGroup {
    size: ButtonGroupSize,
    items: Vec<ButtonGroupItem>,
    states: FxHashMap<usize, InteractionState>,
}

impl ButtonGroup {
    pub fn new(size: ButtonGroupSize) -> Self {
        Self {
            size,
            items: Vec::new(),
            states: FxHashMap::default(),
        }
    }

    pub fn item(mut self, item: ButtonGroupItem) -> Self {
        if item.disabled {
            self.states
                .insert(self.items.len(), InteractionState::disabled());
        }
        self.items.push(item);
        self
    }

    pub fn items(&self) -> &[ButtonGroupItem] {
        &self.items
    }

    pub fn geometry(&self) -> ControlGeometry {
        self.size.geometry()
    }

    /// Current interaction state of one item.
    pub fn state(&self, index: usize) -> InteractionState {
        self.states.get(&index).copied().unwrap_or_default()
    }

    /// Feed a pointer or focus event to one item. Events addressed to other
    /// indices are untouched by construction; events on a disabled item are
    /// absorbed without effect.
    pub fn handle_event(&mut self, index: usize, event: InteractionEvent) {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "event for out-of-range item");
            return;
        }
        self.states.entry(index).or_default().apply(event);
    }

    /// Enable or disable one item. Entering the disabled state clears any
    /// transient hover/press/focus the item was holding.
    pub fn set_disabled(&mut self, index: usize, disabled: bool) {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "disable for out-of-range item");
            return;
        }
        self.items[index].disabled = disabled;
        self.states.entry(index).or_default().set_disabled(disabled);
    }

    /// Resolve the style of one item against a theme.
    pub fn style_for(&self, index: usize, theme: &Theme) -> ResolvedStyle {
        let table = ghost_phase_styles(theme);
        resolve_interactive(&table, self.state(index), theme, FocusRing::Default)
    }

    /// The divider drawn between adjacent items. Structural only: it does
    /// not respond to the interaction state of either neighbor.
    pub fn divider_style(&self, theme: &Theme) -> DividerStyle {
        DividerStyle {
            color: theme.border.subtle,
            width: StrokeTokens::default().hairline,
        }
    }
}
