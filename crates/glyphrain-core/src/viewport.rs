//! Viewport geometry and the banner layout derived from it.

/// Width and height in pixels of one rain glyph cell.
pub const CELL_SIZE: u32 = 16;

/// Nominal pixel width of a terminal cell.
pub const TERMINAL_CELL_WIDTH_PX: u32 = 8;

/// Nominal pixel height of a terminal cell.
pub const TERMINAL_CELL_HEIGHT_PX: u32 = 16;

/// Banner font size as a fraction of the viewport's shorter side.
pub const BANNER_FONT_RATIO: f32 = 0.08;

/// Height in rows of one block-font letter at scale 1.
pub const BLOCK_FONT_ROWS: u16 = 5;

/// Dimensions of the viewport in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Create a viewport from pixel dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Measure a terminal of `cols` x `rows` cells in pixels.
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: u32::from(cols) * TERMINAL_CELL_WIDTH_PX,
            height: u32::from(rows) * TERMINAL_CELL_HEIGHT_PX,
        }
    }

    /// Banner font size in pixels, proportional to the shorter side.
    pub fn banner_font_px(&self) -> f32 {
        self.width.min(self.height) as f32 * BANNER_FONT_RATIO
    }
}

/// How the banner is drawn for a given font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSize {
    /// A single line of bold text.
    Plain,
    /// Block letters, each source row repeated `scale` times.
    Block { scale: u16 },
}

/// Banner sizing derived from the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerLayout {
    /// Font size in pixels.
    pub font_px: f32,
    /// Rendering mode chosen for that font size.
    pub size: BannerSize,
}

impl BannerLayout {
    /// Fit the banner to the given viewport.
    pub fn fit(viewport: Viewport) -> Self {
        let font_px = viewport.banner_font_px();
        let rows = font_px / TERMINAL_CELL_HEIGHT_PX as f32;
        let scale = (rows / f32::from(BLOCK_FONT_ROWS)).round() as u16;
        let size = if scale == 0 {
            BannerSize::Plain
        } else {
            BannerSize::Block { scale }
        };
        Self { font_px, size }
    }

    /// Number of terminal rows the banner occupies.
    pub fn height(&self) -> u16 {
        match self.size {
            BannerSize::Plain => 1,
            BannerSize::Block { scale } => BLOCK_FONT_ROWS * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_terminal() {
        let viewport = Viewport::from_terminal(80, 24);
        assert_eq!(viewport, Viewport::new(640, 384));
    }

    #[test]
    fn test_banner_font_uses_shorter_side() {
        assert!((Viewport::new(1000, 500).banner_font_px() - 40.0).abs() < 1e-4);
        assert!((Viewport::new(300, 900).banner_font_px() - 24.0).abs() < 1e-4);
        assert_eq!(Viewport::new(0, 900).banner_font_px(), 0.0);
    }

    #[test]
    fn test_banner_layout_plain_on_small_viewport() {
        // 24 rows -> 384px -> 30.72px font, under two terminal rows
        let layout = BannerLayout::fit(Viewport::from_terminal(80, 24));
        assert_eq!(layout.size, BannerSize::Plain);
        assert_eq!(layout.height(), 1);
    }

    #[test]
    fn test_banner_layout_block_scales_with_viewport() {
        // 50 rows -> 800px -> 64px font -> 4 terminal rows
        let layout = BannerLayout::fit(Viewport::from_terminal(200, 50));
        assert_eq!(layout.size, BannerSize::Block { scale: 1 });
        assert_eq!(layout.height(), 5);

        // 100 rows -> 1600px -> 128px font -> 8 terminal rows
        let layout = BannerLayout::fit(Viewport::from_terminal(400, 100));
        assert_eq!(layout.size, BannerSize::Block { scale: 2 });
        assert_eq!(layout.height(), 10);
    }
}
