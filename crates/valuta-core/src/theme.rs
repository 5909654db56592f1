//! Theme identity and name resolution.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Color theme for the page and its animated backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Resolve a theme by name. Anything that is not "light" resolves to
    /// [`Theme::Dark`]; an absent or misspelled name must never fail.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Switch between the two themes.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Deserialization goes through `from_name` so garbage persisted by an old
// or hand-edited config degrades to dark instead of failing the load.
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Theme::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name(" Light "), Theme::Light);
    }

    #[test]
    fn unknown_names_fall_back_to_dark() {
        assert_eq!(Theme::from_name("purple"), Theme::Dark);
        assert_eq!(Theme::from_name(""), Theme::Dark);
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }
}
