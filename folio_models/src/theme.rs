use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The theme selected with the toggle, stored by the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub const ALL: [Self; 3] = [Self::System, Self::Light, Self::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme preference")]
pub struct UnknownThemePreference;

impl FromStr for ThemePreference {
    type Err = UnknownThemePreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownThemePreference),
        }
    }
}

/// The visual mode actually applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Resolves the initial mode from the stored preference and the system
    /// dark mode signal.
    ///
    /// A stored `dark` always wins. A stored `system` or a missing preference
    /// follows the system signal. Anything else is light.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.filter(|s| !s.is_empty()) {
            Some("dark") => Self::Dark,
            Some("system") | None if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }

    /// CSS class set on the `<html>` element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
