//! Theme construction and lookup errors.

use crate::resolve::TokenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// The active-theme setter and `ThemeName::from_str` reject anything
    /// that is not one of the two registered variants.
    #[error("unknown theme name {0:?}, expected \"light\" or \"dark\"")]
    UnknownTheme(String),

    /// An override referred to a semantic role path no theme defines.
    #[error("unknown semantic role {0:?}")]
    UnknownRole(String),

    /// A role's token reference did not resolve against the palette.
    /// Raised at theme construction, never at render time.
    #[error("role {role:?}: {source}")]
    Unresolvable {
        role: String,
        #[source]
        source: TokenError,
    },

    /// Override file failed to parse.
    #[error("invalid theme overrides: {0}")]
    InvalidOverrides(#[from] toml::de::Error),
}
