//! Digital rain for glyphrain.
//!
//! [`RainRenderer`] owns a [`Surface`] and one drop per glyph column. The
//! application calls [`RainRenderer::step`] on a fixed timer and
//! [`RainRenderer::resize`] when the viewport changes, then renders the
//! surface as a ratatui widget.

mod chars;
mod color;
mod renderer;
mod surface;

pub use chars::GLYPH_ALPHABET;
pub use color::{FADE_FLOOR, PALETTE, fade};
pub use renderer::{RainRenderer, StepStats, column_count};
pub use surface::{Cell, Surface};
