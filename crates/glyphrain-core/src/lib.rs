//! Core types shared by the glyphrain crates.
//!
//! Pixel geometry of the terminal viewport, the banner layout derived from it,
//! and the tunables of the rain effect.

mod settings;
mod viewport;

pub use settings::{DEFAULT_FADE_ALPHA, DEFAULT_RECYCLE_THRESHOLD, DEFAULT_TICK, RainSettings};
pub use viewport::{
    BANNER_FONT_RATIO, BLOCK_FONT_ROWS, BannerLayout, BannerSize, CELL_SIZE,
    TERMINAL_CELL_HEIGHT_PX, TERMINAL_CELL_WIDTH_PX, Viewport,
};
