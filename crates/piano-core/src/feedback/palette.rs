use crate::KeyIdentity;

use std::collections::BTreeMap;

/// Highlight color for keys without an entry.
pub const DEFAULT_COLOR: &str = "#3b82f6";
/// Background when no key is highlighted.
pub const IDLE_BACKGROUND: &str = "#1e293b";

/// Alpha suffix appended to a key color to tint the background.
const BACKGROUND_ALPHA: &str = "33";

const DEFAULT_COLORS: [(&str, &str); 12] = [
    ("A", "#FF5733"),
    ("W", "#FFBD33"),
    ("S", "#DBFF33"),
    ("E", "#75FF33"),
    ("D", "#33FF57"),
    ("F", "#33FFBD"),
    ("T", "#33DBFF"),
    ("G", "#3375FF"),
    ("Y", "#5733FF"),
    ("H", "#BD33FF"),
    ("U", "#FF33DB"),
    ("J", "#FF3375"),
];

/// Static key to color mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPalette {
    colors: BTreeMap<KeyIdentity, String>,
    default_color: String,
    idle_background: String,
}

impl KeyPalette {
    /// Build a palette from explicit colors.
    pub fn new(
        colors: impl IntoIterator<Item = (KeyIdentity, String)>,
        default_color: impl Into<String>,
        idle_background: impl Into<String>,
    ) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            default_color: default_color.into(),
            idle_background: idle_background.into(),
        }
    }

    /// The built-in twelve-key palette as `(key, color)` pairs.
    pub fn default_colors() -> impl Iterator<Item = (KeyIdentity, String)> {
        DEFAULT_COLORS
            .into_iter()
            .map(|(key, color)| (KeyIdentity::new(key), color.to_string()))
    }

    /// Color for `key`, falling back to the default color.
    pub fn color(&self, key: &KeyIdentity) -> &str {
        self.colors
            .get(key)
            .map_or(self.default_color.as_str(), String::as_str)
    }

    /// Translucent background tint for `key`.
    pub fn background_for(&self, key: &KeyIdentity) -> String {
        format!("{}{}", self.color(key), BACKGROUND_ALPHA)
    }

    /// Background with nothing highlighted.
    pub fn idle_background(&self) -> &str {
        &self.idle_background
    }
}

impl Default for KeyPalette {
    fn default() -> Self {
        Self::new(Self::default_colors(), DEFAULT_COLOR, IDLE_BACKGROUND)
    }
}
