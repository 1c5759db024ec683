mod keymap;
mod router;

pub use {
    keymap::{KeyElement, KeyMap},
    router::{InputRouter, PointerKind, RoutedInput},
};
