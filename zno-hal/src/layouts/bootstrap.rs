use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bootstrapping mode recorded on a builder.
///
/// The three setters that touch the mode overwrite each other: the last
/// one applied before finalize decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(C)]
pub enum Bootstrap {
    #[default]
    None,
    Thin,
    Thick,
}

impl Bootstrap {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self != Bootstrap::None
    }

    /// Mode after a plain bootstrappable flag is applied.
    ///
    /// Enabling keeps an already selected thin or thick mode and defaults to
    /// thin otherwise. Disabling always yields [Bootstrap::None].
    pub fn with_flag(self, flag: bool) -> Self {
        match (flag, self) {
            (false, _) => Bootstrap::None,
            (true, Bootstrap::None) => Bootstrap::Thin,
            (true, mode) => mode,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Bootstrap::None => "none",
            Bootstrap::Thin => "thin",
            Bootstrap::Thick => "thick",
        }
    }
}

impl fmt::Display for Bootstrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bootstrap mode `{0}`, expected one of none, thin, thick")]
pub struct ParseBootstrapError(String);

impl FromStr for Bootstrap {
    type Err = ParseBootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Bootstrap::None),
            "thin" => Ok(Bootstrap::Thin),
            "thick" => Ok(Bootstrap::Thick),
            _ => Err(ParseBootstrapError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_keeps_explicit_mode() {
        assert_eq!(Bootstrap::None.with_flag(true), Bootstrap::Thin);
        assert_eq!(Bootstrap::Thick.with_flag(true), Bootstrap::Thick);
        assert_eq!(Bootstrap::Thin.with_flag(true), Bootstrap::Thin);
        assert_eq!(Bootstrap::Thick.with_flag(false), Bootstrap::None);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("THICK".parse::<Bootstrap>(), Ok(Bootstrap::Thick));
        assert_eq!(" thin ".parse::<Bootstrap>(), Ok(Bootstrap::Thin));
        assert!("medium".parse::<Bootstrap>().is_err());
        for mode in [Bootstrap::None, Bootstrap::Thin, Bootstrap::Thick] {
            assert_eq!(mode.to_string().parse::<Bootstrap>(), Ok(mode));
        }
    }
}
