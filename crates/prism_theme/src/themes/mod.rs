//! Built-in theme definitions
//!
//! Each variant is a table of semantic role -> token reference, resolved
//! strictly against the primitive palette when the registry is built. The
//! tables are the single place where symbolic references live; past this
//! point everything is a concrete [`prism_core::Color`].

use crate::error::ThemeError;
use crate::palette::Palette;
use crate::theme::{
    AccentSlots, BasicScale, BasicSlots, BgColors, BorderColors, IconColors, StateColors,
    TextColors, Theme, ThemeName,
};
use prism_core::Color;

/// Token-reference form of a theme: same shape as [`Theme`], strings
/// instead of colors. Overrides patch this table before resolution.
#[derive(Clone, Debug)]
pub struct ThemeRefs {
    pub text: TextRefs,
    pub bg: BgRefs,
    pub border: BorderRefs,
    pub icon: IconRefs,
}

#[derive(Clone, Debug)]
pub struct TextRefs {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
    pub disabled: String,
    pub destructive: String,
    pub accent: String,
    pub on_accent: String,
}

#[derive(Clone, Debug)]
pub struct AccentRefs {
    pub gray: String,
    pub red: String,
    pub orange: String,
    pub green: String,
    pub teal: String,
    pub blue: String,
}

#[derive(Clone, Debug)]
pub struct BasicScaleRefs {
    pub soft: String,
    pub strong: String,
}

#[derive(Clone, Debug)]
pub struct BasicRefs {
    pub gray: BasicScaleRefs,
    pub red: BasicScaleRefs,
    pub orange: BasicScaleRefs,
    pub green: BasicScaleRefs,
    pub teal: BasicScaleRefs,
    pub blue: BasicScaleRefs,
}

#[derive(Clone, Debug)]
pub struct StateRefs {
    pub ghost: String,
    pub ghost_hover: String,
    pub ghost_pressed: String,
    pub selected: String,
    pub disabled: String,
}

#[derive(Clone, Debug)]
pub struct BgRefs {
    pub surface: String,
    pub elevated: String,
    pub overlay: String,
    pub inset: String,
    pub badge: AccentRefs,
    pub basic: BasicRefs,
    pub state: StateRefs,
}

#[derive(Clone, Debug)]
pub struct BorderRefs {
    pub default: String,
    pub subtle: String,
    pub focus: String,
    pub disabled: String,
    pub accent: AccentRefs,
}

#[derive(Clone, Debug)]
pub struct IconRefs {
    pub default: String,
    pub muted: String,
    pub disabled: String,
    pub accent: String,
    pub on_accent: String,
    pub destructive: String,
}

fn r(reference: &str) -> String {
    reference.to_owned()
}

/// Reference table for the light variant.
pub fn light_refs() -> ThemeRefs {
    ThemeRefs {
        text: TextRefs {
            primary: r("gray-950"),
            secondary: r("gray-700"),
            muted: r("gray-500"),
            disabled: r("gray-400"),
            destructive: r("red-600"),
            accent: r("blue-600"),
            on_accent: r("gray-0"),
        },
        bg: BgRefs {
            surface: r("gray-0"),
            elevated: r("gray-50"),
            overlay: r("transparent-dark-40"),
            inset: r("gray-100"),
            badge: AccentRefs {
                gray: r("gray-100"),
                red: r("transparent-red-10"),
                orange: r("transparent-orange-10"),
                green: r("transparent-green-10"),
                teal: r("transparent-teal-10"),
                blue: r("transparent-blue-10"),
            },
            basic: BasicRefs {
                gray: BasicScaleRefs {
                    soft: r("gray-100"),
                    strong: r("gray-600"),
                },
                red: BasicScaleRefs {
                    soft: r("red-100"),
                    strong: r("red-600"),
                },
                orange: BasicScaleRefs {
                    soft: r("orange-100"),
                    strong: r("orange-600"),
                },
                green: BasicScaleRefs {
                    soft: r("green-100"),
                    strong: r("green-600"),
                },
                teal: BasicScaleRefs {
                    soft: r("teal-100"),
                    strong: r("teal-600"),
                },
                blue: BasicScaleRefs {
                    soft: r("blue-100"),
                    strong: r("blue-600"),
                },
            },
            state: StateRefs {
                ghost: r("transparent-dark-0"),
                ghost_hover: r("transparent-dark-5"),
                ghost_pressed: r("transparent-dark-10"),
                selected: r("gray-100"),
                disabled: r("gray-100"),
            },
        },
        border: BorderRefs {
            default: r("gray-200"),
            subtle: r("gray-100"),
            focus: r("blue-500"),
            disabled: r("gray-100"),
            accent: AccentRefs {
                gray: r("gray-300"),
                red: r("red-300"),
                orange: r("orange-300"),
                green: r("green-300"),
                teal: r("teal-300"),
                blue: r("blue-300"),
            },
        },
        icon: IconRefs {
            default: r("gray-700"),
            muted: r("gray-500"),
            disabled: r("gray-400"),
            accent: r("blue-600"),
            on_accent: r("gray-0"),
            destructive: r("red-600"),
        },
    }
}

/// Reference table for the dark variant.
pub fn dark_refs() -> ThemeRefs {
    ThemeRefs {
        text: TextRefs {
            primary: r("gray-50"),
            secondary: r("gray-300"),
            muted: r("gray-400"),
            disabled: r("gray-600"),
            destructive: r("red-400"),
            accent: r("blue-400"),
            on_accent: r("gray-950"),
        },
        bg: BgRefs {
            surface: r("gray-950"),
            elevated: r("gray-900"),
            overlay: r("transparent-dark-60"),
            inset: r("gray-900"),
            badge: AccentRefs {
                gray: r("gray-800"),
                red: r("transparent-red-15"),
                orange: r("transparent-orange-15"),
                green: r("transparent-green-15"),
                teal: r("transparent-teal-15"),
                blue: r("transparent-blue-15"),
            },
            basic: BasicRefs {
                gray: BasicScaleRefs {
                    soft: r("gray-800"),
                    strong: r("gray-300"),
                },
                red: BasicScaleRefs {
                    soft: r("red-950"),
                    strong: r("red-400"),
                },
                orange: BasicScaleRefs {
                    soft: r("orange-950"),
                    strong: r("orange-400"),
                },
                green: BasicScaleRefs {
                    soft: r("green-950"),
                    strong: r("green-400"),
                },
                teal: BasicScaleRefs {
                    soft: r("teal-950"),
                    strong: r("teal-400"),
                },
                blue: BasicScaleRefs {
                    soft: r("blue-950"),
                    strong: r("blue-400"),
                },
            },
            state: StateRefs {
                ghost: r("transparent-white-0"),
                ghost_hover: r("transparent-white-5"),
                ghost_pressed: r("transparent-white-10"),
                selected: r("gray-800"),
                disabled: r("gray-800"),
            },
        },
        border: BorderRefs {
            default: r("gray-800"),
            subtle: r("gray-900"),
            focus: r("blue-400"),
            disabled: r("gray-800"),
            accent: AccentRefs {
                gray: r("gray-700"),
                red: r("red-700"),
                orange: r("orange-700"),
                green: r("green-700"),
                teal: r("teal-700"),
                blue: r("blue-700"),
            },
        },
        icon: IconRefs {
            default: r("gray-300"),
            muted: r("gray-500"),
            disabled: r("gray-600"),
            accent: r("blue-400"),
            on_accent: r("gray-950"),
            destructive: r("red-400"),
        },
    }
}

impl ThemeRefs {
    /// Mutable access to one role's token reference by dotted path.
    ///
    /// This is the single path <-> field mapping; overrides go through it so
    /// an unknown role fails before any resolution happens.
    pub fn role_mut(&mut self, path: &str) -> Result<&mut String, ThemeError> {
        let slot = match path {
            "text.primary" => &mut self.text.primary,
            "text.secondary" => &mut self.text.secondary,
            "text.muted" => &mut self.text.muted,
            "text.disabled" => &mut self.text.disabled,
            "text.destructive" => &mut self.text.destructive,
            "text.accent" => &mut self.text.accent,
            "text.on_accent" => &mut self.text.on_accent,
            "bg.surface" => &mut self.bg.surface,
            "bg.elevated" => &mut self.bg.elevated,
            "bg.overlay" => &mut self.bg.overlay,
            "bg.inset" => &mut self.bg.inset,
            "bg.badge.gray" => &mut self.bg.badge.gray,
            "bg.badge.red" => &mut self.bg.badge.red,
            "bg.badge.orange" => &mut self.bg.badge.orange,
            "bg.badge.green" => &mut self.bg.badge.green,
            "bg.badge.teal" => &mut self.bg.badge.teal,
            "bg.badge.blue" => &mut self.bg.badge.blue,
            "bg.basic.gray.soft" => &mut self.bg.basic.gray.soft,
            "bg.basic.gray.strong" => &mut self.bg.basic.gray.strong,
            "bg.basic.red.soft" => &mut self.bg.basic.red.soft,
            "bg.basic.red.strong" => &mut self.bg.basic.red.strong,
            "bg.basic.orange.soft" => &mut self.bg.basic.orange.soft,
            "bg.basic.orange.strong" => &mut self.bg.basic.orange.strong,
            "bg.basic.green.soft" => &mut self.bg.basic.green.soft,
            "bg.basic.green.strong" => &mut self.bg.basic.green.strong,
            "bg.basic.teal.soft" => &mut self.bg.basic.teal.soft,
            "bg.basic.teal.strong" => &mut self.bg.basic.teal.strong,
            "bg.basic.blue.soft" => &mut self.bg.basic.blue.soft,
            "bg.basic.blue.strong" => &mut self.bg.basic.blue.strong,
            "bg.state.ghost" => &mut self.bg.state.ghost,
            "bg.state.ghost_hover" => &mut self.bg.state.ghost_hover,
            "bg.state.ghost_pressed" => &mut self.bg.state.ghost_pressed,
            "bg.state.selected" => &mut self.bg.state.selected,
            "bg.state.disabled" => &mut self.bg.state.disabled,
            "border.default" => &mut self.border.default,
            "border.subtle" => &mut self.border.subtle,
            "border.focus" => &mut self.border.focus,
            "border.disabled" => &mut self.border.disabled,
            "border.gray" => &mut self.border.accent.gray,
            "border.red" => &mut self.border.accent.red,
            "border.orange" => &mut self.border.accent.orange,
            "border.green" => &mut self.border.accent.green,
            "border.teal" => &mut self.border.accent.teal,
            "border.blue" => &mut self.border.accent.blue,
            "icon.default" => &mut self.icon.default,
            "icon.muted" => &mut self.icon.muted,
            "icon.disabled" => &mut self.icon.disabled,
            "icon.accent" => &mut self.icon.accent,
            "icon.on_accent" => &mut self.icon.on_accent,
            "icon.destructive" => &mut self.icon.destructive,
            _ => return Err(ThemeError::UnknownRole(path.to_owned())),
        };
        Ok(slot)
    }

    /// Strictly resolve every role against the palette.
    pub fn resolve(&self, palette: &Palette, name: ThemeName) -> Result<Theme, ThemeError> {
        let role = |role: &str, reference: &String| -> Result<Color, ThemeError> {
            palette
                .resolve(reference)
                .map_err(|source| ThemeError::Unresolvable {
                    role: role.to_owned(),
                    source,
                })
        };
        let accent_slots = |prefix: &str, refs: &AccentRefs| -> Result<AccentSlots, ThemeError> {
            Ok(AccentSlots {
                gray: role(&format!("{prefix}.gray"), &refs.gray)?,
                red: role(&format!("{prefix}.red"), &refs.red)?,
                orange: role(&format!("{prefix}.orange"), &refs.orange)?,
                green: role(&format!("{prefix}.green"), &refs.green)?,
                teal: role(&format!("{prefix}.teal"), &refs.teal)?,
                blue: role(&format!("{prefix}.blue"), &refs.blue)?,
            })
        };
        let basic_scale = |hue: &str, refs: &BasicScaleRefs| -> Result<BasicScale, ThemeError> {
            Ok(BasicScale {
                soft: role(&format!("bg.basic.{hue}.soft"), &refs.soft)?,
                strong: role(&format!("bg.basic.{hue}.strong"), &refs.strong)?,
            })
        };

        Ok(Theme {
            name,
            text: TextColors {
                primary: role("text.primary", &self.text.primary)?,
                secondary: role("text.secondary", &self.text.secondary)?,
                muted: role("text.muted", &self.text.muted)?,
                disabled: role("text.disabled", &self.text.disabled)?,
                destructive: role("text.destructive", &self.text.destructive)?,
                accent: role("text.accent", &self.text.accent)?,
                on_accent: role("text.on_accent", &self.text.on_accent)?,
            },
            bg: BgColors {
                surface: role("bg.surface", &self.bg.surface)?,
                elevated: role("bg.elevated", &self.bg.elevated)?,
                overlay: role("bg.overlay", &self.bg.overlay)?,
                inset: role("bg.inset", &self.bg.inset)?,
                badge: accent_slots("bg.badge", &self.bg.badge)?,
                basic: BasicSlots {
                    gray: basic_scale("gray", &self.bg.basic.gray)?,
                    red: basic_scale("red", &self.bg.basic.red)?,
                    orange: basic_scale("orange", &self.bg.basic.orange)?,
                    green: basic_scale("green", &self.bg.basic.green)?,
                    teal: basic_scale("teal", &self.bg.basic.teal)?,
                    blue: basic_scale("blue", &self.bg.basic.blue)?,
                },
                state: StateColors {
                    ghost: role("bg.state.ghost", &self.bg.state.ghost)?,
                    ghost_hover: role("bg.state.ghost_hover", &self.bg.state.ghost_hover)?,
                    ghost_pressed: role("bg.state.ghost_pressed", &self.bg.state.ghost_pressed)?,
                    selected: role("bg.state.selected", &self.bg.state.selected)?,
                    disabled: role("bg.state.disabled", &self.bg.state.disabled)?,
                },
            },
            border: BorderColors {
                default: role("border.default", &self.border.default)?,
                subtle: role("border.subtle", &self.border.subtle)?,
                focus: role("border.focus", &self.border.focus)?,
                disabled: role("border.disabled", &self.border.disabled)?,
                accent: accent_slots("border", &self.border.accent)?,
            },
            icon: IconColors {
                default: role("icon.default", &self.icon.default)?,
                muted: role("icon.muted", &self.icon.muted)?,
                disabled: role("icon.disabled", &self.icon.disabled)?,
                accent: role("icon.accent", &self.icon.accent)?,
                on_accent: role("icon.on_accent", &self.icon.on_accent)?,
                destructive: role("icon.destructive", &self.icon.destructive)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_builtin_tables_resolve_strictly() {
        let palette = Palette::builtin();
        light_refs().resolve(palette, ThemeName::Light).unwrap();
        dark_refs().resolve(palette, ThemeName::Dark).unwrap();
    }

    #[test]
    fn role_mut_addresses_every_role_path() {
        let mut refs = light_refs();
        let theme = refs
            .clone()
            .resolve(Palette::builtin(), ThemeName::Light)
            .unwrap();
        for (path, _) in theme.roles() {
            assert!(refs.role_mut(&path).is_ok(), "missing role path {path}");
        }
    }

    #[test]
    fn unknown_role_path_is_rejected() {
        let mut refs = light_refs();
        assert!(matches!(
            refs.role_mut("bg.badge.magenta"),
            Err(ThemeError::UnknownRole(_))
        ));
    }

    #[test]
    fn resolution_error_names_the_role() {
        let mut refs = light_refs();
        *refs.role_mut("text.primary").unwrap() = "gray-123".to_owned();
        let err = refs
            .resolve(Palette::builtin(), ThemeName::Light)
            .unwrap_err();
        match err {
            ThemeError::Unresolvable { role, .. } => assert_eq!(role, "text.primary"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
