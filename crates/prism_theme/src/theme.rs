//! Resolved themes
//!
//! A [`Theme`] is one fully-resolved variant: every semantic role mapped to
//! a concrete color. The four category trees (`text`, `bg`, `border`,
//! `icon`) are plain typed structs, so light and dark cannot drift apart
//! structurally - both are the same shape by construction. [`Theme::roles`]
//! additionally exposes the flattened role list for parity checks and
//! variable export.

use crate::error::ThemeError;
use prism_core::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The two registered theme variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_owned())),
        }
    }
}

/// The accent hues components can select among (badge colors, borders,
/// basic backgrounds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Gray,
    Red,
    Orange,
    Green,
    Teal,
    Blue,
}

impl AccentColor {
    pub const ALL: [AccentColor; 6] = [
        AccentColor::Gray,
        AccentColor::Red,
        AccentColor::Orange,
        AccentColor::Green,
        AccentColor::Teal,
        AccentColor::Blue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Blue => "blue",
        }
    }
}

/// Text category roles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub disabled: Color,
    pub destructive: Color,
    pub accent: Color,
    pub on_accent: Color,
}

/// One color per accent hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccentSlots {
    pub gray: Color,
    pub red: Color,
    pub orange: Color,
    pub green: Color,
    pub teal: Color,
    pub blue: Color,
}

impl AccentSlots {
    pub fn get(&self, accent: AccentColor) -> Color {
        match accent {
            AccentColor::Gray => self.gray,
            AccentColor::Red => self.red,
            AccentColor::Orange => self.orange,
            AccentColor::Green => self.green,
            AccentColor::Teal => self.teal,
            AccentColor::Blue => self.blue,
        }
    }
}

/// Soft/strong pair of one accent hue, used for tinted fills and the
/// emphasized foreground drawn over them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicScale {
    pub soft: Color,
    pub strong: Color,
}

/// A `BasicScale` per accent hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicSlots {
    pub gray: BasicScale,
    pub red: BasicScale,
    pub orange: BasicScale,
    pub green: BasicScale,
    pub teal: BasicScale,
    pub blue: BasicScale,
}

impl BasicSlots {
    pub fn get(&self, accent: AccentColor) -> BasicScale {
        match accent {
            AccentColor::Gray => self.gray,
            AccentColor::Red => self.red,
            AccentColor::Orange => self.orange,
            AccentColor::Green => self.green,
            AccentColor::Teal => self.teal,
            AccentColor::Blue => self.blue,
        }
    }
}

/// Interaction-state background roles shared by ghost-styled components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateColors {
    pub ghost: Color,
    pub ghost_hover: Color,
    pub ghost_pressed: Color,
    pub selected: Color,
    pub disabled: Color,
}

/// Background category roles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BgColors {
    pub surface: Color,
    pub elevated: Color,
    pub overlay: Color,
    pub inset: Color,
    pub badge: AccentSlots,
    pub basic: BasicSlots,
    pub state: StateColors,
}

/// Border category roles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderColors {
    pub default: Color,
    pub subtle: Color,
    pub focus: Color,
    pub disabled: Color,
    pub accent: AccentSlots,
}

/// Icon category roles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconColors {
    pub default: Color,
    pub muted: Color,
    pub disabled: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub destructive: Color,
}

/// One fully-resolved theme variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub text: TextColors,
    pub bg: BgColors,
    pub border: BorderColors,
    pub icon: IconColors,
}

impl Theme {
    /// Every semantic role as a flat `(dotted path, color)` list.
    ///
    /// Accent-hue border roles are emitted as `border.<hue>` to match how
    /// components address them.
    pub fn roles(&self) -> Vec<(String, Color)> {
        let mut roles = vec![
            ("text.primary".to_owned(), self.text.primary),
            ("text.secondary".to_owned(), self.text.secondary),
            ("text.muted".to_owned(), self.text.muted),
            ("text.disabled".to_owned(), self.text.disabled),
            ("text.destructive".to_owned(), self.text.destructive),
            ("text.accent".to_owned(), self.text.accent),
            ("text.on_accent".to_owned(), self.text.on_accent),
            ("bg.surface".to_owned(), self.bg.surface),
            ("bg.elevated".to_owned(), self.bg.elevated),
            ("bg.overlay".to_owned(), self.bg.overlay),
            ("bg.inset".to_owned(), self.bg.inset),
            ("bg.state.ghost".to_owned(), self.bg.state.ghost),
            ("bg.state.ghost_hover".to_owned(), self.bg.state.ghost_hover),
            (
                "bg.state.ghost_pressed".to_owned(),
                self.bg.state.ghost_pressed,
            ),
            ("bg.state.selected".to_owned(), self.bg.state.selected),
            ("bg.state.disabled".to_owned(), self.bg.state.disabled),
            ("border.default".to_owned(), self.border.default),
            ("border.subtle".to_owned(), self.border.subtle),
            ("border.focus".to_owned(), self.border.focus),
            ("border.disabled".to_owned(), self.border.disabled),
            ("icon.default".to_owned(), self.icon.default),
            ("icon.muted".to_owned(), self.icon.muted),
            ("icon.disabled".to_owned(), self.icon.disabled),
            ("icon.accent".to_owned(), self.icon.accent),
            ("icon.on_accent".to_owned(), self.icon.on_accent),
            ("icon.destructive".to_owned(), self.icon.destructive),
        ];
        for accent in AccentColor::ALL {
            let hue = accent.as_str();
            roles.push((format!("bg.badge.{hue}"), self.bg.badge.get(accent)));
            let scale = self.bg.basic.get(accent);
            roles.push((format!("bg.basic.{hue}.soft"), scale.soft));
            roles.push((format!("bg.basic.{hue}.strong"), scale.strong));
            roles.push((format!("border.{hue}"), self.border.accent.get(accent)));
        }
        roles
    }

    /// Flat `role path -> hex/rgba string` export, e.g. for style-variable
    /// dumps or tooling.
    pub fn variable_map(&self) -> HashMap<String, String> {
        self.roles()
            .into_iter()
            .map(|(path, color)| (path, color.to_hex_string()))
            .collect()
    }
}
