//! Semantic token resolution
//!
//! Translates symbolic token references (`"gray-950"`, `"transparent-red-10"`)
//! into concrete palette colors. Resolution is total over the references a
//! theme uses: theme construction resolves strictly and fails fast on any
//! unknown ramp or shade. The forgiving entry point
//! [`Palette::resolve_or_fallback`] exists for render-time callers only; it
//! never leaks a symbolic placeholder into output, substituting a neutral
//! value instead (and panicking in debug builds, where an unresolved
//! reference is always a bug).

use crate::palette::Palette;
use prism_core::Color;
use thiserror::Error;

/// Neutral substitute for unresolved references in release builds (gray-500).
pub const NEUTRAL_FALLBACK: Color = Color::from_hex(0x737373);

/// Error resolving a symbolic token reference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token reference {0:?}, expected \"<ramp>-<shade>\"")]
    Malformed(String),
    #[error("unknown color ramp {ramp:?} in token reference {reference:?}")]
    UnknownRamp { reference: String, ramp: String },
    #[error("ramp {ramp:?} has no shade {shade} in token reference {reference:?}")]
    UnknownShade {
        reference: String,
        ramp: String,
        shade: u16,
    },
}

/// A parsed token reference: ramp name plus numeric shade.
///
/// The textual form is case-insensitive and hyphen-delimited; the last
/// segment is the shade, everything before it the ramp name (ramp names may
/// themselves contain hyphens, e.g. `transparent-red`). Leading zeros in the
/// shade are insignificant, so `gray-00` and `gray-0` are aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenRef {
    ramp: String,
    shade: u16,
}

impl TokenRef {
    pub fn parse(reference: &str) -> Result<Self, TokenError> {
        let trimmed = reference.trim();
        let (ramp, shade) = trimmed
            .rsplit_once('-')
            .ok_or_else(|| TokenError::Malformed(reference.to_owned()))?;
        if ramp.is_empty()
            || shade.is_empty()
            || !shade.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(TokenError::Malformed(reference.to_owned()));
        }
        let shade: u16 = shade
            .parse()
            .map_err(|_| TokenError::Malformed(reference.to_owned()))?;
        if shade > 1000 {
            return Err(TokenError::Malformed(reference.to_owned()));
        }
        Ok(Self {
            ramp: ramp.to_ascii_lowercase(),
            shade,
        })
    }

    pub fn ramp(&self) -> &str {
        &self.ramp
    }

    pub fn shade(&self) -> u16 {
        self.shade
    }
}

impl std::fmt::Display for TokenRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.ramp, self.shade)
    }
}

impl Palette {
    /// Strict resolution of a textual token reference.
    pub fn resolve(&self, reference: &str) -> Result<Color, TokenError> {
        let token = TokenRef::parse(reference)?;
        self.resolve_token(reference, &token)
    }

    fn resolve_token(&self, reference: &str, token: &TokenRef) -> Result<Color, TokenError> {
        let ramp = self
            .ramp(token.ramp())
            .ok_or_else(|| TokenError::UnknownRamp {
                reference: reference.to_owned(),
                ramp: token.ramp().to_owned(),
            })?;
        ramp.shade(token.shade())
            .ok_or_else(|| TokenError::UnknownShade {
                reference: reference.to_owned(),
                ramp: token.ramp().to_owned(),
                shade: token.shade(),
            })
    }

    /// Render-time resolution that never fails.
    ///
    /// Unresolved references log a warning and yield [`NEUTRAL_FALLBACK`] in
    /// release builds; debug builds panic so the bad reference is caught
    /// during development. Theme construction does not use this path.
    pub fn resolve_or_fallback(&self, reference: &str) -> Color {
        match self.resolve(reference) {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!(
                    reference,
                    error = %err,
                    "unresolved token reference, substituting neutral fallback"
                );
                debug_assert!(false, "unresolved token reference: {err}");
                NEUTRAL_FALLBACK
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_and_compound_ramp_names() {
        let t = TokenRef::parse("gray-950").unwrap();
        assert_eq!((t.ramp(), t.shade()), ("gray", 950));

        let t = TokenRef::parse("transparent-red-10").unwrap();
        assert_eq!((t.ramp(), t.shade()), ("transparent-red", 10));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        let t = TokenRef::parse("Transparent-Dark-40").unwrap();
        assert_eq!(t.ramp(), "transparent-dark");
    }

    #[test]
    fn zero_shade_aliases() {
        assert_eq!(
            TokenRef::parse("gray-00").unwrap(),
            TokenRef::parse("gray-0").unwrap()
        );
    }

    #[test]
    fn rejects_malformed_references() {
        for bad in ["gray", "-950", "gray-", "gray-abc", "gray-12a", "gray-5000"] {
            assert!(
                matches!(TokenRef::parse(bad), Err(TokenError::Malformed(_))),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn resolves_against_builtin_palette() {
        let palette = Palette::builtin();
        assert_eq!(
            palette.resolve("gray-950").unwrap(),
            Color::from_hex(0x0A0A0A)
        );
        assert_eq!(
            palette.resolve("GRAY-0").unwrap(),
            Color::from_hex(0xFFFFFF)
        );
        let translucent = palette.resolve("transparent-red-10").unwrap();
        assert!((translucent.a - 0.10).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_ramp_and_shade_are_distinct_errors() {
        let palette = Palette::builtin();
        assert!(matches!(
            palette.resolve("magenta-500"),
            Err(TokenError::UnknownRamp { .. })
        ));
        assert!(matches!(
            palette.resolve("gray-123"),
            Err(TokenError::UnknownShade { shade: 123, .. })
        ));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn fallback_substitutes_neutral_in_release() {
        assert_eq!(
            Palette::builtin().resolve_or_fallback("magenta-500"),
            NEUTRAL_FALLBACK
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unresolved token reference")]
    fn fallback_panics_in_debug() {
        let _ = Palette::builtin().resolve_or_fallback("magenta-500");
    }
}
