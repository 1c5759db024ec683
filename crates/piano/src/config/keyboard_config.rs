use piano_core::{KeyElement, KeyIdentity, KeyMap};

use serde::{Deserialize, Serialize};

/// One playable key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Single character that plays this key.
    pub key: String,
    /// Frequency in Hz.
    pub note: f64,
}

/// Key layout, left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Bindings in display order.
    #[serde(default = "default_bindings")]
    pub keys: Vec<KeyBinding>,
}

impl KeyboardConfig {
    /// Router key map for these bindings.
    pub fn keymap(&self) -> KeyMap {
        KeyMap::new(
            self.keys
                .iter()
                .map(|b| KeyElement::new(KeyIdentity::new(b.key.to_uppercase()), Some(b.note)))
                .collect(),
        )
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            keys: default_bindings(),
        }
    }
}

fn default_bindings() -> Vec<KeyBinding> {
    KeyMap::default_layout()
        .elements()
        .iter()
        .filter_map(|e| {
            Some(KeyBinding {
                key: e.identity().to_string(),
                note: e.frequency()?,
            })
        })
        .collect()
}
