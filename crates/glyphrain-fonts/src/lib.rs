//! Block letter font for the glyphrain banner.

use glyphrain_core::BLOCK_FONT_ROWS;

/// Rows in one block letter.
pub const GLYPH_ROWS: usize = BLOCK_FONT_ROWS as usize;

/// Look up the block letter for a character.
///
/// Lowercase letters share the uppercase shapes. Returns `None` for characters
/// the font does not cover.
pub fn glyph(ch: char) -> Option<[&'static str; GLYPH_ROWS]> {
    let rows = match ch.to_ascii_uppercase() {
        'A' => [
            " ███ ",
            "█   █",
            "█████",
            "█   █",
            "█   █",
        ],
        'B' => [
            "████ ",
            "█   █",
            "████ ",
            "█   █",
            "████ ",
        ],
        'C' => [
            " ████",
            "█    ",
            "█    ",
            "█    ",
            " ████",
        ],
        'D' => [
            "████ ",
            "█   █",
            "█   █",
            "█   █",
            "████ ",
        ],
        'E' => [
            "█████",
            "█    ",
            "████ ",
            "█    ",
            "█████",
        ],
        'F' => [
            "█████",
            "█    ",
            "████ ",
            "█    ",
            "█    ",
        ],
        'G' => [
            " ████",
            "█    ",
            "█  ██",
            "█   █",
            " ████",
        ],
        'H' => [
            "█   █",
            "█   █",
            "█████",
            "█   █",
            "█   █",
        ],
        'I' => [
            "███",
            " █ ",
            " █ ",
            " █ ",
            "███",
        ],
        'J' => [
            "  ███",
            "   █ ",
            "   █ ",
            "█  █ ",
            " ██  ",
        ],
        'K' => [
            "█   █",
            "█  █ ",
            "███  ",
            "█  █ ",
            "█   █",
        ],
        'L' => [
            "█    ",
            "█    ",
            "█    ",
            "█    ",
            "█████",
        ],
        'M' => [
            "█   █",
            "██ ██",
            "█ █ █",
            "█   █",
            "█   █",
        ],
        'N' => [
            "█   █",
            "██  █",
            "█ █ █",
            "█  ██",
            "█   █",
        ],
        'O' => [
            " ███ ",
            "█   █",
            "█   █",
            "█   █",
            " ███ ",
        ],
        'P' => [
            "████ ",
            "█   █",
            "████ ",
            "█    ",
            "█    ",
        ],
        'Q' => [
            " ███ ",
            "█   █",
            "█ █ █",
            "█  █ ",
            " ██ █",
        ],
        'R' => [
            "████ ",
            "█   █",
            "████ ",
            "█  █ ",
            "█   █",
        ],
        'S' => [
            " ████",
            "█    ",
            " ███ ",
            "    █",
            "████ ",
        ],
        'T' => [
            "█████",
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
        ],
        'U' => [
            "█   █",
            "█   █",
            "█   █",
            "█   █",
            " ███ ",
        ],
        'V' => [
            "█   █",
            "█   █",
            "█   █",
            " █ █ ",
            "  █  ",
        ],
        'W' => [
            "█   █",
            "█   █",
            "█ █ █",
            "██ ██",
            "█   █",
        ],
        'X' => [
            "█   █",
            " █ █ ",
            "  █  ",
            " █ █ ",
            "█   █",
        ],
        'Y' => [
            "█   █",
            " █ █ ",
            "  █  ",
            "  █  ",
            "  █  ",
        ],
        'Z' => [
            "█████",
            "   █ ",
            "  █  ",
            " █   ",
            "█████",
        ],
        '0' => [
            " ███ ",
            "█  ██",
            "█ █ █",
            "██  █",
            " ███ ",
        ],
        '1' => [
            " █ ",
            "██ ",
            " █ ",
            " █ ",
            "███",
        ],
        '2' => [
            " ███ ",
            "█   █",
            "  ██ ",
            " █   ",
            "█████",
        ],
        '3' => [
            "████ ",
            "    █",
            " ███ ",
            "    █",
            "████ ",
        ],
        '4' => [
            "█   █",
            "█   █",
            "█████",
            "    █",
            "    █",
        ],
        '5' => [
            "█████",
            "█    ",
            "████ ",
            "    █",
            "████ ",
        ],
        '6' => [
            " ███ ",
            "█    ",
            "████ ",
            "█   █",
            " ███ ",
        ],
        '7' => [
            "█████",
            "    █",
            "   █ ",
            "  █  ",
            "  █  ",
        ],
        '8' => [
            " ███ ",
            "█   █",
            " ███ ",
            "█   █",
            " ███ ",
        ],
        '9' => [
            " ███ ",
            "█   █",
            " ████",
            "    █",
            " ███ ",
        ],
        ' ' => [
            "   ",
            "   ",
            "   ",
            "   ",
            "   ",
        ],
        '.' => [
            " ",
            " ",
            " ",
            " ",
            "█",
        ],
        ',' => [
            "  ",
            "  ",
            "  ",
            " █",
            "█ ",
        ],
        '!' => [
            "█",
            "█",
            "█",
            " ",
            "█",
        ],
        '?' => [
            " ███ ",
            "█   █",
            "  ██ ",
            "     ",
            "  █  ",
        ],
        '-' => [
            "    ",
            "    ",
            "████",
            "    ",
            "    ",
        ],
        ':' => [
            " ",
            "█",
            " ",
            "█",
            " ",
        ],
        '\'' => [
            "█",
            "█",
            " ",
            " ",
            " ",
        ],
        _ => return None,
    };
    Some(rows)
}

/// Build block-letter art for `text`.
///
/// Letters are separated by one blank column. Returns `None` if any character
/// is not covered by the font.
pub fn build_banner_art(text: &str) -> Option<Vec<String>> {
    let glyphs = text.chars().map(glyph).collect::<Option<Vec<_>>>()?;

    let lines = (0..GLYPH_ROWS)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    Some(lines)
}

/// Enlarge art by repeating every row and every column `scale` times.
pub fn scale_art(lines: &[String], scale: u16) -> Vec<String> {
    let scale = usize::from(scale.max(1));
    lines
        .iter()
        .flat_map(|line| {
            let wide: String = line
                .chars()
                .flat_map(|c| std::iter::repeat_n(c, scale))
                .collect();
            std::iter::repeat_n(wide, scale)
        })
        .collect()
}

/// Width in terminal columns of the widest art line.
pub fn art_width(lines: &[String]) -> usize {
    lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_rows_are_rectangular() {
        let covered = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .,!?-:'";
        for ch in covered.chars() {
            let rows = glyph(ch).unwrap();
            let width = rows[0].chars().count();
            assert!(
                rows.iter().all(|r| r.chars().count() == width),
                "ragged glyph {ch:?}"
            );
        }
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn test_build_banner_art() {
        let art = build_banner_art("HI").unwrap();
        assert_eq!(art.len(), GLYPH_ROWS);
        assert_eq!(art[0], "█   █ ███");
        assert_eq!(art[2], "█████  █ ");
        assert_eq!(art_width(&art), 9);
    }

    #[test]
    fn test_build_banner_art_unsupported() {
        assert!(build_banner_art("ネオ").is_none());
        assert!(build_banner_art("50%").is_none());
    }

    #[test]
    fn test_scale_art() {
        let art = vec!["█ ".to_string(), " █".to_string()];
        let scaled = scale_art(&art, 2);
        assert_eq!(scaled, vec!["██  ", "██  ", "  ██", "  ██"]);
        assert_eq!(scale_art(&art, 0), art);
    }
}
