mod common;
use common::FakeScreen;
use pompom::core::clock::InstantClock;
use pompom::core::countdown::{Countdown, Observer, Snapshot};
use pompom::core::urgency::Urgency;
use pompom::ui::glyphs::{BigFont, GLYPH_HEIGHT, GlyphRenderer, fix_kerning};
use pompom::ui::renderer::{Renderer, layout};
use pompom::utils::time::format_clock;

fn snapshot(remaining: u64) -> Snapshot<'static> {
    Snapshot {
        remaining,
        message: None,
    }
}

fn widths(art: &str) -> Vec<usize> {
    art.split('\n').map(|l| l.chars().count()).collect()
}

#[test]
fn clock_face_formatting() {
    assert_eq!(format_clock(0), "00:00");
    assert_eq!(format_clock(65), "01:05");
    assert_eq!(format_clock(1500), "25:00");
    assert_eq!(format_clock(3599), "59:59");
    assert_eq!(format_clock(3600), "60:00");
    assert_eq!(format_clock(5940), "99:00");
    assert_eq!(format_clock(6000), "100:00");
}

#[test]
fn big_font_renders_eight_aligned_rows() {
    let art = BigFont.render("25:00");
    let w = widths(&art);
    assert_eq!(w.len(), GLYPH_HEIGHT);
    assert!(w.iter().all(|&x| x == w[0]), "ragged rows: {w:?}");
    assert!(art.starts_with("  ___  "));
}

#[test]
fn big_font_leaves_a_gap_for_unknown_characters() {
    let art = BigFont.render("1?1");
    let first = art.split('\n').next().unwrap();
    assert_eq!(first, "  __       __ ");
}

#[test]
fn kerning_fix_realigns_a_four() {
    let raw = BigFont.render("04:00");
    let raw_widths = widths(&raw);
    assert_eq!(raw_widths[3], raw_widths[0] + 1);

    let fixed = fix_kerning(&raw);
    let w = widths(&fixed);
    assert!(w.iter().all(|&x| x == w[0]), "ragged rows: {w:?}");
    assert!(fixed.split('\n').nth(3).unwrap().contains("_|"));
}

#[test]
fn kerning_fix_leaves_other_digits_alone() {
    let raw = BigFont.render("12:35");
    assert_eq!(fix_kerning(&raw), raw);
}

#[test]
fn kerning_fix_only_touches_the_fourth_line() {
    let art = "_| a\n_| b\n_| c\n_| d\n_| e";
    assert_eq!(fix_kerning(art), "_| a\n_| b\n_| c\n_|d\n_| e");
    assert_eq!(fix_kerning("short\nart"), "short\nart");
}

#[test]
fn layout_centres_art() {
    let art = "abcd\nabcd";
    // (20 - 4) / 2 = 8 columns, (10 - 2 - 1) / 2 = 3 rows
    let frame = layout(art, 20, 10);
    let pad = " ".repeat(8);
    assert_eq!(frame, format!("\n\n\n{pad}abcd\n{pad}abcd\n"));
}

#[test]
fn layout_uses_integer_division() {
    let frame = layout("abc", 10, 6);
    // (10 - 3) / 2 = 3, (6 - 1 - 1) / 2 = 2
    assert_eq!(frame, "\n\n   abc\n");
}

#[test]
fn layout_clamps_when_art_is_bigger_than_screen() {
    let art = "0123456789\n0123456789\n0123456789";
    assert_eq!(layout(art, 4, 2), "0123456789\n0123456789\n0123456789\n");
    assert_eq!(layout(art, 0, 0), "0123456789\n0123456789\n0123456789\n");
}

#[test]
fn renderer_draws_centered_coloured_frame() {
    let mut screen = FakeScreen::new(80, 24);
    {
        let mut renderer = Renderer::new(&mut screen, BigFont);
        renderer.on_update(snapshot(1500)).unwrap();
    }

    let frame = screen.last();
    assert_eq!(frame.urgency, Urgency::Normal);
    assert!(!frame.blinking);

    let art = fix_kerning(&BigFont.render("25:00"));
    let first_width = art.split('\n').next().unwrap().len();
    let left = (80 - first_width) / 2;
    let top = (24 - GLYPH_HEIGHT - 1) / 2;

    let lines: Vec<&str> = frame.text.split('\n').collect();
    assert!(lines[..top].iter().all(|l| l.is_empty()));
    assert_eq!(lines[top], format!("{}{}", " ".repeat(left), art.split('\n').next().unwrap()));
}

#[test]
fn renderer_applies_urgency_policy() {
    let mut screen = FakeScreen::new(80, 24);
    {
        let mut renderer = Renderer::new(&mut screen, BigFont);
        for r in [61, 30, 10, 3] {
            renderer.on_update(snapshot(r)).unwrap();
        }
    }

    let styles: Vec<(Urgency, bool)> = screen
        .frames
        .iter()
        .map(|f| (f.urgency, f.blinking))
        .collect();
    assert_eq!(
        styles,
        vec![
            (Urgency::Normal, false),
            (Urgency::Warning, false),
            (Urgency::Critical, false),
            (Urgency::Critical, true),
        ]
    );
}

#[test]
fn renderer_survives_a_tiny_screen() {
    let mut screen = FakeScreen::new(3, 2);
    {
        let mut renderer = Renderer::new(&mut screen, BigFont);
        renderer.on_update(snapshot(0)).unwrap();
    }
    assert!(!screen.last().text.starts_with('\n'));
    assert!(screen.last().text.starts_with("   ___"));
}

#[test]
fn renderer_follows_a_countdown() {
    let mut screen = FakeScreen::new(80, 24);
    {
        let mut countdown = Countdown::new(2, None, InstantClock);
        countdown.add_observer(Renderer::new(&mut screen, BigFont));
        countdown.tick().unwrap();
        countdown.tick().unwrap();
    }

    assert_eq!(screen.frames.len(), 2);
    let renderer_art = fix_kerning(&BigFont.render("00:00"));
    assert!(
        screen.frames[1]
            .text
            .contains(renderer_art.split('\n').nth(1).unwrap())
    );
    assert!(screen.frames.iter().all(|f| f.blinking));
}
