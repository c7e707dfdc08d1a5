//! Turns countdown snapshots into centred, coloured frames.

use crate::core::countdown::{Observer, Snapshot};
use crate::core::urgency::style_for;
use crate::errors::AppResult;
use crate::ui::glyphs::{GlyphRenderer, fix_kerning};
use crate::ui::screen::Screen;
use crate::utils::time::format_clock;
use unicode_width::UnicodeWidthStr;

pub struct Renderer<'a, S: Screen + ?Sized, G: GlyphRenderer> {
    screen: &'a mut S,
    glyphs: G,
}

impl<'a, S: Screen + ?Sized, G: GlyphRenderer> Renderer<'a, S, G> {
    pub fn new(screen: &'a mut S, glyphs: G) -> Self {
        Self { screen, glyphs }
    }

    /// Block art for `remaining` seconds, as it will be drawn.
    pub fn clock_face(&self, remaining: u64) -> String {
        fix_kerning(&self.glyphs.render(&format_clock(remaining)))
    }
}

impl<S: Screen + ?Sized, G: GlyphRenderer> Observer for Renderer<'_, S, G> {
    fn on_update(&mut self, snapshot: Snapshot<'_>) -> AppResult<()> {
        let art = self.clock_face(snapshot.remaining);
        let style = style_for(snapshot.remaining);
        let (columns, rows) = self.screen.size()?;

        let frame = layout(&art, columns, rows);
        self.screen.draw(&frame, style.urgency, style.blink)
    }
}

/// Centre `art` on a `columns` x `rows` screen.
///
/// The horizontal offset comes from the width of the first line; art larger
/// than the screen is drawn from the top-left corner.
pub fn layout(art: &str, columns: u16, rows: u16) -> String {
    let lines: Vec<&str> = art.split('\n').collect();
    let first_width = lines.first().map(|l| l.width()).unwrap_or(0);

    let left = usize::from(columns).saturating_sub(first_width) / 2;
    let top = usize::from(rows).saturating_sub(lines.len() + 1) / 2;

    let padding = " ".repeat(left);
    let mut frame = "\n".repeat(top);
    for line in lines {
        frame.push_str(&padding);
        frame.push_str(line);
        frame.push('\n');
    }
    frame
}
