use crate::KeyIdentity;

/// How long a key stays highlighted after it fires.
pub const DEFAULT_HIGHLIGHT_MS: u64 = 300;

#[derive(Debug, Clone)]
struct Highlight {
    key: KeyIdentity,
    expires_at_ms: u64,
}

/// Transient key highlights.
///
/// A highlight is applied the moment its note fires and clears itself once
/// the window elapses. Firing the same key again restarts its window.
#[derive(Debug, Clone)]
pub struct HighlightTracker {
    window_ms: u64,
    // Oldest first; the last entry drives the background tint.
    active: Vec<Highlight>,
}

impl HighlightTracker {
    /// Tracker with a fixed highlight window.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            active: Vec::new(),
        }
    }

    /// Highlight `key` starting at `now_ms`.
    pub fn apply(&mut self, key: &KeyIdentity, now_ms: u64) {
        self.active.retain(|h| &h.key != key);
        self.active.push(Highlight {
            key: key.clone(),
            expires_at_ms: now_ms.saturating_add(self.window_ms),
        });
    }

    /// Clear every highlight whose window has elapsed at `now_ms`.
    ///
    /// Returns the keys that were cleared.
    pub fn expire(&mut self, now_ms: u64) -> Vec<KeyIdentity> {
        let mut cleared = Vec::new();
        self.active.retain(|h| {
            if h.expires_at_ms <= now_ms {
                cleared.push(h.key.clone());
                false
            } else {
                true
            }
        });
        cleared
    }

    /// True if `key` is currently lit.
    pub fn is_highlighted(&self, key: &KeyIdentity) -> bool {
        self.active.iter().any(|h| &h.key == key)
    }

    /// Lit keys, oldest first.
    pub fn active_keys(&self) -> impl Iterator<Item = &KeyIdentity> {
        self.active.iter().map(|h| &h.key)
    }

    /// Most recently lit key, if any.
    pub fn latest(&self) -> Option<&KeyIdentity> {
        self.active.last().map(|h| &h.key)
    }

    /// Earliest pending expiry.
    pub fn next_deadline(&self) -> Option<u64> {
        self.active.iter().map(|h| h.expires_at_ms).min()
    }

    /// Configured highlight window.
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}

impl Default for HighlightTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_MS)
    }
}
