//! User-facing session settings and their option sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Color theme of the presentation surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Matrix,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Matrix];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Matrix => "matrix",
        }
    }
}

/// Decorative background animation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Off,
    Particles,
    Matrix,
    #[default]
    Waves,
}

impl Background {
    pub const ALL: [Background; 4] = [
        Background::Off,
        Background::Particles,
        Background::Matrix,
        Background::Waves,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Particles => "particles",
            Self::Matrix => "matrix",
            Self::Waves => "waves",
        }
    }
}

/// Returned when a name is not one of an option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl FromStr for Theme {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl FromStr for Background {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable presentation settings owned by the session.
///
/// Defaults: typewriter off, banner on, dark theme, waves background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub typewriter: bool,
    pub banner: bool,
    pub theme: Theme,
    pub background: Background,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            typewriter: false,
            banner: true,
            theme: Theme::default(),
            background: Background::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SessionSettings::default();
        assert!(!settings.typewriter);
        assert!(settings.banner);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.background, Background::Waves);
    }

    #[test]
    fn test_parse_options() {
        assert_eq!("matrix".parse::<Theme>(), Ok(Theme::Matrix));
        assert_eq!("particles".parse::<Background>(), Ok(Background::Particles));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(UnknownOption("Dark".to_string()))
        );
        assert!("".parse::<Background>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        for theme in Theme::ALL {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme));
        }
        for bg in Background::ALL {
            let json = serde_json::to_string(&bg).unwrap();
            assert_eq!(json, format!("\"{}\"", bg));
        }
    }
}
