//! Palette and fading for the rain.

use ratatui::style::Color;

/// Shades of green a glyph may be drawn in.
pub const PALETTE: &[Color] = &[
    Color::Rgb(0, 255, 0),
    Color::Rgb(0, 170, 0),
    Color::Rgb(0, 221, 0),
    Color::Rgb(0, 204, 0),
];

/// Cells whose brightest channel falls below this are treated as black.
pub const FADE_FLOOR: u8 = 8;

/// Blend black over `color` at the given opacity.
///
/// Channels are truncated so repeated fades always reach black.
pub fn fade(color: Color, alpha: f32) -> Color {
    let keep = (1.0 - alpha).clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * keep) as u8,
            (g as f32 * keep) as u8,
            (b as f32 * keep) as u8,
        ),
        other => other,
    }
}

/// Whether a color is still bright enough to be worth drawing.
pub fn is_visible(color: Color) -> bool {
    match color {
        Color::Rgb(r, g, b) => r.max(g).max(b) >= FADE_FLOOR,
        Color::Black | Color::Reset => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade() {
        assert_eq!(fade(Color::Rgb(0, 200, 0), 0.5), Color::Rgb(0, 100, 0));
        assert_eq!(fade(Color::Rgb(0, 255, 0), 1.0), Color::Rgb(0, 0, 0));
        assert_eq!(fade(Color::Rgb(10, 20, 30), 0.0), Color::Rgb(10, 20, 30));
    }

    #[test]
    fn test_repeated_fade_reaches_black() {
        let mut color = Color::Rgb(0, 255, 0);
        for _ in 0..1000 {
            color = fade(color, 0.03);
        }
        assert_eq!(color, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_is_visible() {
        assert!(is_visible(Color::Rgb(0, 255, 0)));
        assert!(is_visible(Color::Rgb(0, FADE_FLOOR, 0)));
        assert!(!is_visible(Color::Rgb(0, FADE_FLOOR - 1, 0)));
        assert!(!is_visible(Color::Black));
    }
}
