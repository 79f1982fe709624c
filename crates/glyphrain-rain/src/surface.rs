//! Glyph raster the rain is painted onto.

use glyphrain_core::{CELL_SIZE, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::color::{fade, is_visible};

/// Terminal columns spanned by one glyph cell.
const TERMINAL_COLUMNS_PER_CELL: u16 = 2;

/// A glyph painted on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

/// Drawing surface measured in pixels and stored as a grid of glyph cells.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    width: u32,
    height: u32,
    columns: usize,
    rows: usize,
    cells: Vec<Option<Cell>>,
}

impl Surface {
    /// Create a cleared surface of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        let mut surface = Self::default();
        surface.resize(width, height);
        surface
    }

    /// Create a cleared surface covering the viewport.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(viewport.width, viewport.height)
    }

    /// Change the pixel size. Clears every cell.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.columns = (width / CELL_SIZE) as usize;
        self.rows = height.div_ceil(CELL_SIZE) as usize;
        self.cells.clear();
        self.cells.resize(self.columns * self.rows, None);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of whole glyph columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of glyph rows, counting a partial row at the bottom.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The glyph painted at a cell, if any.
    pub fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[row * self.columns + column]
    }

    /// Iterate over painted cells as `(column, row, cell)`.
    pub fn painted(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let columns = self.columns.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|c| (i % columns, i / columns, c)))
    }

    /// Paint black over the whole surface at the given opacity.
    pub fn fill_overlay(&mut self, alpha: f32) {
        for slot in &mut self.cells {
            if let Some(cell) = slot {
                cell.color = fade(cell.color, alpha);
                if !is_visible(cell.color) {
                    *slot = None;
                }
            }
        }
    }

    /// Draw a glyph with its baseline at pixel `(x, y)`.
    ///
    /// The glyph box spans `[y - CELL_SIZE, y)` and lands in the nearest row.
    /// Returns whether the glyph landed on the surface.
    pub fn fill_glyph(&mut self, glyph: char, x: f64, y: f64, color: Color) -> bool {
        let cell = f64::from(CELL_SIZE);
        let column = (x / cell).floor();
        let row = ((y - cell) / cell).round();
        if column < 0.0 || row < 0.0 {
            return false;
        }

        let (column, row) = (column as usize, row as usize);
        if column >= self.columns || row >= self.rows {
            return false;
        }

        self.cells[row * self.columns + column] = Some(Cell { glyph, color });
        true
    }
}

impl Widget for &Surface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(Color::Black));

        for (column, row, cell) in self.painted() {
            let Ok(column) = u16::try_from(column) else {
                continue;
            };
            let Ok(row) = u16::try_from(row) else {
                continue;
            };
            let x = area.x.saturating_add(column.saturating_mul(TERMINAL_COLUMNS_PER_CELL));
            let y = area.y.saturating_add(row);
            if x >= area.right() || y >= area.bottom() {
                continue;
            }

            let mut utf8 = [0; 4];
            let max_width = usize::from((area.right() - x).min(TERMINAL_COLUMNS_PER_CELL));
            buf.set_stringn(
                x,
                y,
                cell.glyph.encode_utf8(&mut utf8),
                max_width,
                Style::new().fg(cell.color).bg(Color::Black),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let surface = Surface::new(330, 100);
        assert_eq!(surface.columns(), 20);
        assert_eq!(surface.rows(), 7);
        assert_eq!(surface.width(), 330);
        assert_eq!(surface.height(), 100);
    }

    #[test]
    fn test_fill_glyph_uses_baseline() {
        let mut surface = Surface::new(160, 160);
        assert!(surface.fill_glyph('ア', 32.0, 48.0, Color::Green));
        assert_eq!(
            surface.cell(2, 2),
            Some(Cell {
                glyph: 'ア',
                color: Color::Green
            })
        );
    }

    #[test]
    fn test_fill_glyph_clips() {
        let mut surface = Surface::new(160, 160);
        // Above the top edge
        assert!(!surface.fill_glyph('A', 0.0, -32.0, Color::Green));
        assert!(!surface.fill_glyph('A', 0.0, 4.0, Color::Green));
        // Below the bottom edge
        assert!(!surface.fill_glyph('A', 0.0, 200.0, Color::Green));
        // Right of the last whole column
        assert!(!surface.fill_glyph('A', 160.0, 32.0, Color::Green));
        assert_eq!(surface.painted().count(), 0);
    }

    #[test]
    fn test_resize_clears() {
        let mut surface = Surface::new(160, 160);
        surface.fill_glyph('A', 0.0, 16.0, Color::Green);
        surface.resize(320, 160);
        assert_eq!(surface.columns(), 20);
        assert_eq!(surface.painted().count(), 0);
    }

    #[test]
    fn test_overlay_fades_then_clears() {
        let mut surface = Surface::new(32, 32);
        surface.fill_glyph('A', 0.0, 16.0, Color::Rgb(0, 200, 0));

        surface.fill_overlay(0.5);
        assert_eq!(surface.cell(0, 0).unwrap().color, Color::Rgb(0, 100, 0));

        for _ in 0..5 {
            surface.fill_overlay(0.5);
        }
        assert_eq!(surface.cell(0, 0), None);
    }

    #[test]
    fn test_widget_renders_two_columns_per_cell() {
        let mut surface = Surface::new(64, 32);
        surface.fill_glyph('A', 16.0, 32.0, Color::Rgb(0, 255, 0));

        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);
        (&surface).render(area, &mut buf);

        assert_eq!(buf[(2, 1)].symbol(), "A");
        assert_eq!(buf[(2, 1)].fg, Color::Rgb(0, 255, 0));
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(0, 0)].bg, Color::Black);
    }
}
