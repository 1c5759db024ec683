use crate::{KeyElement, KeyMap, NoteRequest};

use tracing::trace;

/// Origin of a pointer-like press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Unified pointer press.
    Pointer,
    /// Touch start.
    Touch,
    /// Mouse button press.
    Mouse,
}

/// A press normalized into a note request.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedInput {
    /// What to play.
    pub request: NoteRequest,
    /// The host must suppress its default handling (scroll, zoom, focus).
    pub prevent_default: bool,
}

/// Stateless dispatch from raw input to note requests.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    keymap: KeyMap,
}

impl InputRouter {
    /// Router over a fixed key map.
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap }
    }

    /// Keys this router knows.
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Normalize a pointer, touch or mouse press on `element`.
    pub fn handle_pointer(&self, kind: PointerKind, element: &KeyElement) -> RoutedInput {
        trace!(?kind, key = %element.identity(), "Pointer press");

        RoutedInput {
            request: NoteRequest::new(element.frequency(), element.identity().clone()),
            prevent_default: matches!(kind, PointerKind::Pointer | PointerKind::Touch),
        }
    }

    /// Normalize a physical key-down.
    ///
    /// `key` is the text the key produced. Returns `None` for held-key
    /// repeats, multi-character key names and unmapped characters.
    pub fn handle_physical_key(&self, key: &str, repeat: bool) -> Option<RoutedInput> {
        if repeat {
            trace!(key, "Ignoring key repeat");
            return None;
        }

        let mut chars = key.chars();
        let (Some(pressed), None) = (chars.next(), chars.next()) else {
            return None;
        };

        let element = self.keymap.lookup(pressed)?;

        Some(RoutedInput {
            request: NoteRequest::new(element.frequency(), element.identity().clone()),
            prevent_default: false,
        })
    }
}
