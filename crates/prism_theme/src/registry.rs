//! Theme registry
//!
//! Holds exactly two fully-resolved themes. Construction is the fail-fast
//! boundary: every token reference of both variants (plus any overrides)
//! must resolve, or the registry refuses to build.

use crate::error::ThemeError;
use crate::palette::Palette;
use crate::theme::{Theme, ThemeName};
use crate::themes::{dark_refs, light_refs};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Per-variant role overrides, typically loaded from TOML:
///
/// ```toml
/// [light]
/// "text.accent" = "teal-600"
///
/// [dark]
/// "bg.surface" = "gray-900"
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ThemeOverrides {
    #[serde(default)]
    pub light: BTreeMap<String, String>,
    #[serde(default)]
    pub dark: BTreeMap<String, String>,
}

impl ThemeOverrides {
    pub fn from_toml(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }
}

/// The two resolved theme variants.
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    light: Arc<Theme>,
    dark: Arc<Theme>,
}

impl ThemeRegistry {
    /// Build both variants from the built-in tables.
    pub fn new() -> Result<Self, ThemeError> {
        Self::with_overrides(&ThemeOverrides::default())
    }

    /// Build both variants with role overrides patched in. Unknown role
    /// paths and unresolvable references fail here, before any theme is
    /// observable.
    pub fn with_overrides(overrides: &ThemeOverrides) -> Result<Self, ThemeError> {
        let palette = Palette::builtin();
        let mut light = light_refs();
        let mut dark = dark_refs();
        for (path, reference) in &overrides.light {
            *light.role_mut(path)? = reference.clone();
        }
        for (path, reference) in &overrides.dark {
            *dark.role_mut(path)? = reference.clone();
        }
        Ok(Self {
            light: Arc::new(light.resolve(palette, ThemeName::Light)?),
            dark: Arc::new(dark.resolve(palette, ThemeName::Dark)?),
        })
    }

    /// The resolved theme for a variant.
    pub fn theme(&self, name: ThemeName) -> &Arc<Theme> {
        match name {
            ThemeName::Light => &self.light,
            ThemeName::Dark => &self.dark,
        }
    }
}
