use crate::KeyIdentity;

/// The twelve-key chromatic layout starting at C4.
const DEFAULT_LAYOUT: [(&str, f64); 12] = [
    ("A", 261.63),
    ("W", 277.18),
    ("S", 293.66),
    ("E", 311.13),
    ("D", 329.63),
    ("F", 349.23),
    ("T", 369.99),
    ("G", 392.00),
    ("Y", 415.30),
    ("H", 440.00),
    ("U", 466.16),
    ("J", 493.88),
];

/// A playable key and the data it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyElement {
    identity: KeyIdentity,
    frequency: Option<f64>,
}

impl KeyElement {
    /// Key with an already-parsed frequency.
    pub fn new(identity: KeyIdentity, frequency: Option<f64>) -> Self {
        Self {
            identity,
            frequency,
        }
    }

    /// Key whose frequency is given as text, e.g. from markup or a config
    /// value. Unparseable text becomes a missing frequency.
    pub fn from_data(identity: KeyIdentity, note: &str) -> Self {
        Self::new(identity, note.trim().parse::<f64>().ok())
    }

    /// Key identity.
    pub fn identity(&self) -> &KeyIdentity {
        &self.identity
    }

    /// Raw frequency; validity is checked at trigger time.
    pub fn frequency(&self) -> Option<f64> {
        self.frequency
    }
}

/// Fixed lookup from key characters to key elements, in layout order.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    elements: Vec<KeyElement>,
}

impl KeyMap {
    /// Map over the given elements, in display order.
    pub fn new(elements: Vec<KeyElement>) -> Self {
        Self { elements }
    }

    /// The default twelve-key layout.
    pub fn default_layout() -> Self {
        Self::new(
            DEFAULT_LAYOUT
                .into_iter()
                .map(|(key, hz)| KeyElement::new(KeyIdentity::new(key), Some(hz)))
                .collect(),
        )
    }

    /// Look up a pressed character, ignoring case.
    pub fn lookup(&self, pressed: char) -> Option<&KeyElement> {
        let wanted: String = pressed.to_uppercase().collect();
        self.elements
            .iter()
            .find(|e| e.identity.as_str().to_uppercase() == wanted)
    }

    /// Element at display position `index`.
    pub fn get(&self, index: usize) -> Option<&KeyElement> {
        self.elements.get(index)
    }

    /// Elements in display order.
    pub fn elements(&self) -> &[KeyElement] {
        &self.elements
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if no keys are mapped.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::default_layout()
    }
}
