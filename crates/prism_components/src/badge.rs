//! Badge
//!
//! A non-interactive pill: tinted badge background with the strong basic
//! shade of the same hue as foreground, and an optional matching border.
//! Badges carry no interaction state, so resolution is a pure function of
//! configuration and theme.

use crate::geometry::ControlGeometry;
use crate::style::{Border, Cursor, ResolvedStyle};
use prism_theme::{
    AccentColor, RadiusTokens, SpacingTokens, StrokeTokens, Theme, TypographyTokens,
};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BadgeSize {
    pub fn geometry(self) -> ControlGeometry {
        let spacing = SpacingTokens::default();
        let radius = RadiusTokens::default();
        let typography = TypographyTokens::default();
        match self {
            Self::Sm => ControlGeometry {
                height: 18.0,
                padding_x: spacing.space_1 + 2.0,
                padding_y: 1.0,
                gap: spacing.space_1 / 2.0,
                radius: radius.radius_full,
                icon_size: 10.0,
                text: typography.label_sm,
            },
            Self::Md => ControlGeometry {
                height: 22.0,
                padding_x: spacing.space_2,
                padding_y: 2.0,
                gap: spacing.space_1,
                radius: radius.radius_full,
                icon_size: 12.0,
                text: typography.label_md,
            },
            Self::Lg => ControlGeometry {
                height: 26.0,
                padding_x: spacing.space_2 + 2.0,
                padding_y: 3.0,
                gap: spacing.space_1,
                radius: radius.radius_full,
                icon_size: 14.0,
                text: typography.label_lg,
            },
        }
    }
}

/// Badge configuration. Built with chained setters:
///
/// ```rust
/// use prism_components::{Badge, BadgeSize};
/// use prism_theme::AccentColor;
///
/// let badge = Badge::new(AccentColor::Red).size(BadgeSize::Lg).bordered(true);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Badge {
    color: AccentColor,
    size: BadgeSize,
    bordered: bool,
}

impl Badge {
    pub fn new(color: AccentColor) -> Self {
        Self {
            color,
            size: BadgeSize::default(),
            bordered: false,
        }
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    pub fn geometry(&self) -> ControlGeometry {
        self.size.geometry()
    }

    /// Resolve the badge against a theme. The foreground is the strong
    /// basic shade of the badge's own hue, not a generic text role, so the
    /// pill stays legible over its tinted fill in both variants.
    pub fn resolve(&self, theme: &Theme) -> ResolvedStyle {
        let strong = theme.bg.basic.get(self.color).strong;
        ResolvedStyle {
            background: theme.bg.badge.get(self.color),
            text: strong,
            icon: strong,
            border: self.bordered.then(|| {
                Border::new(
                    theme.border.accent.get(self.color),
                    StrokeTokens::default().hairline,
                )
            }),
            shadow: SmallVec::new(),
            focus_ring: None,
            cursor: Cursor::Default,
        }
    }
}
