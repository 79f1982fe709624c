//! Text banner drawn over the rain.

use glyphrain_core::{BannerLayout, BannerSize};
use glyphrain_fonts::{art_width, build_banner_art, scale_art};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Widget,
};

/// Color of the banner text.
const BANNER_COLOR: Color = Color::Rgb(200, 255, 200);

/// Banner content as it will be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerLines {
    /// The text on one solid line.
    Plain(String),
    /// Block-letter art; spaces are transparent.
    Art(Vec<String>),
}

impl BannerLines {
    /// Lay out `text` for `area`.
    ///
    /// Block art is used when the layout asks for it and the art fits;
    /// otherwise the banner is the plain text.
    pub fn layout(text: &str, layout: BannerLayout, area: Rect) -> Self {
        if let BannerSize::Block { scale } = layout.size {
            if let Some(art) = build_banner_art(text) {
                let art = scale_art(&art, scale);
                let fits_width = art_width(&art) <= usize::from(area.width);
                let fits_height = layout.height() <= area.height;
                if fits_width && fits_height {
                    return Self::Art(art);
                }
            }
        }
        Self::Plain(text.to_string())
    }
}

/// Centered banner overlay.
#[derive(Debug, Clone, Copy)]
pub struct Banner<'a> {
    text: &'a str,
    layout: BannerLayout,
}

impl<'a> Banner<'a> {
    pub fn new(text: &'a str, layout: BannerLayout) -> Self {
        Self { text, layout }
    }
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.text.is_empty() {
            return;
        }

        let style = Style::new()
            .fg(BANNER_COLOR)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD);

        match BannerLines::layout(self.text, self.layout, area) {
            BannerLines::Plain(text) => {
                // Only the text's own cells are touched, the rest of the row keeps the rain
                let line = Line::from(text).style(style);
                let width = u16::try_from(line.width())
                    .unwrap_or(u16::MAX)
                    .min(area.width);
                let top = area.y + (area.height - 1) / 2;
                let left = area.x + (area.width - width) / 2;
                line.render(Rect::new(left, top, width, 1), buf);
            }
            BannerLines::Art(art) => {
                let height = self.layout.height().min(area.height);
                let top = area.y + (area.height - height) / 2;

                for (line, y) in art.iter().zip(top..top + height) {
                    let width = u16::try_from(line.chars().count())
                        .unwrap_or(u16::MAX)
                        .min(area.width);
                    let left = area.x + (area.width - width) / 2;

                    // Art spaces stay transparent so the rain shows between letters
                    for (ch, x) in line.chars().zip(left..left + width) {
                        if ch != ' ' {
                            buf[(x, y)].set_char(ch).set_style(style);
                        }
                    }
                }
            }
        }
    }
}
