//! Digital rain renderer.
//!
//! Each column tracks one drop, stored as the number of cell heights between
//! the top edge and the column's newest glyph. A render step fades the whole
//! surface, draws one random glyph per column at its drop and advances every
//! drop by one row. Drops that have left the bottom edge restart from the top
//! with a small probability each step, which is what breaks the columns out of
//! lockstep.

use glyphrain_core::{CELL_SIZE, RainSettings, Viewport};
use rand::Rng;
use tracing::{debug, trace};

use crate::chars::GLYPH_ALPHABET;
use crate::color::PALETTE;
use crate::surface::Surface;

/// Drops start up to this many cells above the top edge.
const STAGGER_CELLS: f64 = 100.0;

/// Number of rain columns for a surface `width` pixels wide.
pub fn column_count(width: u32) -> usize {
    (width / CELL_SIZE) as usize
}

/// Outcome of a single render step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Glyph draws issued, one per column.
    pub drawn: usize,
    /// Draws that landed inside the surface.
    pub visible: usize,
    /// Drops sent back to the top.
    pub recycled: usize,
}

/// Owns the drawing surface and per-column drop state.
#[derive(Debug, Clone)]
pub struct RainRenderer {
    surface: Surface,
    drops: Vec<f64>,
    settings: RainSettings,
}

impl RainRenderer {
    /// Create a renderer covering `viewport` with freshly staggered drops.
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, settings: RainSettings, rng: &mut R) -> Self {
        let surface = Surface::for_viewport(viewport);
        let drops = (0..column_count(surface.width()))
            .map(|_| rng.r#gen::<f64>() * -STAGGER_CELLS)
            .collect();

        Self {
            surface,
            drops,
            settings,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Current drop positions in cell heights, one per column.
    pub fn drops(&self) -> &[f64] {
        &self.drops
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn settings(&self) -> &RainSettings {
        &self.settings
    }

    /// Advance the animation by one frame.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepStats {
        let mut stats = StepStats::default();
        let cell = f64::from(CELL_SIZE);
        let height = f64::from(self.surface.height());

        self.surface.fill_overlay(self.settings.fade_alpha);

        for (i, drop) in self.drops.iter_mut().enumerate() {
            let x = i as f64 * cell;
            let y = *drop * cell;

            let glyph = *pick(rng, GLYPH_ALPHABET);
            let color = *pick(rng, PALETTE);
            stats.drawn += 1;
            if self.surface.fill_glyph(glyph, x, y, color) {
                stats.visible += 1;
            }

            if y > height && rng.r#gen::<f64>() > self.settings.recycle_threshold {
                *drop = 0.0;
                stats.recycled += 1;
            }

            *drop += 1.0;
        }

        trace!(
            drawn = stats.drawn,
            visible = stats.visible,
            recycled = stats.recycled,
            "rain step"
        );
        stats
    }

    /// Resize the surface to `viewport` and restart every column.
    pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.resize_surface(viewport);
        self.restart_drops(rng);
    }

    /// Resize the surface to `viewport`, clearing it.
    ///
    /// Leaves the drop state untouched; follow with [`Self::restart_drops`].
    pub fn resize_surface(&mut self, viewport: Viewport) {
        self.surface.resize(viewport.width, viewport.height);
    }

    /// Rebuild the drop state for the surface's current column count.
    ///
    /// Each drop restarts a whole number of cells above the top edge.
    pub fn restart_drops<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let columns = column_count(self.surface.width());
        self.drops.clear();
        self.drops
            .extend((0..columns).map(|_| (rng.r#gen::<f64>() * -STAGGER_CELLS).floor()));

        debug!(
            width = self.surface.width(),
            height = self.surface.height(),
            columns,
            "rain restarted"
        );
    }
}

/// Pick an element uniformly from a non-empty slice.
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    let index = (rng.r#gen::<f64>() * items.len() as f64) as usize;
    &items[index.min(items.len() - 1)]
}
