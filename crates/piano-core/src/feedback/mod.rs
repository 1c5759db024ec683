mod highlight;
mod palette;

pub use {
    highlight::{DEFAULT_HIGHLIGHT_MS, HighlightTracker},
    palette::{DEFAULT_COLOR, IDLE_BACKGROUND, KeyPalette},
};
