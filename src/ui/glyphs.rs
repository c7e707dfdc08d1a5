//! Block-art digits for the clock face.
//!
//! `BigFont` is a built-in copy of the digits and colon from the FIGlet "big"
//! font, 8 rows high. Glyphs are placed side by side at full width.

use tracing::warn;

/// Turns short text into multi-line block art.
pub trait GlyphRenderer {
    fn render(&self, text: &str) -> String;
}

pub const GLYPH_HEIGHT: usize = 8;

type Glyph = [&'static str; GLYPH_HEIGHT];

const ZERO: Glyph = [
    r"   ___  ",
    r"  / _ \ ",
    r" | | | |",
    r" | | | |",
    r" | |_| |",
    r"  \___/ ",
    r"        ",
    r"        ",
];

const ONE: Glyph = [
    r"  __ ",
    r" /_ |",
    r"  | |",
    r"  | |",
    r"  | |",
    r"  |_|",
    r"     ",
    r"     ",
];

const TWO: Glyph = [
    r"  ___  ",
    r" |__ \ ",
    r"    ) |",
    r"   / / ",
    r"  / /_ ",
    r" |____|",
    r"       ",
    r"       ",
];

const THREE: Glyph = [
    r"  ____  ",
    r" |___ \ ",
    r"   __) |",
    r"  |__ < ",
    r"  ___) |",
    r" |____/ ",
    r"        ",
    r"        ",
];

// Row 3 is one column wider than the others, as in the upstream font.
// `fix_kerning` trims it back.
const FOUR: Glyph = [
    r"  _  _   ",
    r" | || |  ",
    r" | || |_ ",
    r" |__   _| ",
    r"    | |  ",
    r"    |_|  ",
    r"         ",
    r"         ",
];

const FIVE: Glyph = [
    r"  _____ ",
    r" | ____|",
    r" | |__  ",
    r" |___ \ ",
    r"  ___) |",
    r" |____/ ",
    r"        ",
    r"        ",
];

const SIX: Glyph = [
    r"    __  ",
    r"   / /  ",
    r"  / /_  ",
    r" | '_ \ ",
    r" | (_) |",
    r"  \___/ ",
    r"        ",
    r"        ",
];

const SEVEN: Glyph = [
    r"  ______ ",
    r" |____  |",
    r"     / / ",
    r"    / /  ",
    r"   / /   ",
    r"  /_/    ",
    r"         ",
    r"         ",
];

const EIGHT: Glyph = [
    r"   ___  ",
    r"  / _ \ ",
    r" | (_) |",
    r"  > _ < ",
    r" | (_) |",
    r"  \___/ ",
    r"        ",
    r"        ",
];

const NINE: Glyph = [
    r"   ___  ",
    r"  / _ \ ",
    r" | (_) |",
    r"  \__, |",
    r"    / / ",
    r"   /_/  ",
    r"        ",
    r"        ",
];

const COLON: Glyph = [
    r"    ",
    r"  _ ",
    r" (_)",
    r"    ",
    r"  _ ",
    r" (_)",
    r"    ",
    r"    ",
];

const BLANK: Glyph = ["    "; GLYPH_HEIGHT];

#[derive(Debug, Default, Clone, Copy)]
pub struct BigFont;

impl BigFont {
    fn glyph(c: char) -> Option<&'static Glyph> {
        Some(match c {
            '0' => &ZERO,
            '1' => &ONE,
            '2' => &TWO,
            '3' => &THREE,
            '4' => &FOUR,
            '5' => &FIVE,
            '6' => &SIX,
            '7' => &SEVEN,
            '8' => &EIGHT,
            '9' => &NINE,
            ':' => &COLON,
            ' ' => &BLANK,
            _ => return None,
        })
    }
}

impl GlyphRenderer for BigFont {
    fn render(&self, text: &str) -> String {
        let glyphs: Vec<&Glyph> = text
            .chars()
            .map(|c| {
                Self::glyph(c).unwrap_or_else(|| {
                    warn!("no glyph for {:?}, leaving a gap", c);
                    &BLANK
                })
            })
            .collect();

        (0..GLYPH_HEIGHT)
            .map(|row| glyphs.iter().map(|g| g[row]).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Undo the extra column the "4" glyph leaves on the fourth row.
///
/// Only the first `_| ` on that row is touched.
pub fn fix_kerning(art: &str) -> String {
    art.split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i == 3 {
                line.replacen("_| ", "_|", 1)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
