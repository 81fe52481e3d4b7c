//! Light/dark theme preference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's theme choice.
///
/// Serialized as the literal strings `"light"` and `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Maps the toggle's checked state to a preference.
    #[must_use]
    pub const fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme preference: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_literal_strings() {
        assert_eq!(serde_json::to_string(&ThemePreference::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&ThemePreference::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(" light ".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("solarized".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn checked_state_maps_to_dark() {
        assert_eq!(ThemePreference::from_checked(true), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_checked(false), ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }
}
