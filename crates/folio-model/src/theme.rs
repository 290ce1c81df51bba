//! The closed set of visual themes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named visual palette applied uniformly across the generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Modern,
    Glassmorphism,
}

impl Theme {
    /// Every theme, in display order.
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Dark, Theme::Modern, Theme::Glassmorphism];

    /// Lowercase identifier used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Modern => "modern",
            Theme::Glassmorphism => "glassmorphism",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a theme name is not one of [`Theme::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid theme '{0}': expected one of light, dark, modern, glassmorphism")]
pub struct InvalidTheme(pub String);

impl FromStr for Theme {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InvalidTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_theme_name() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = "neon".parse::<Theme>().unwrap_err();
        assert_eq!(err, InvalidTheme("neon".to_string()));
    }
}
