use ttf_outline::layout::{self, PositionedGlyph, LINE_HEIGHT, SPACE_WIDTH, TAB_SIZE};
use ttf_outline::{FontData, GlyphId};

use crate::builder::{FontBuilder, Glyph};

fn font() -> FontData {
    let data = FontBuilder::new()
        .glyph(Glyph::rect(0, 0, 400, 700), 500, 0)
        .glyph(Glyph::rect(0, 0, 500, 700), 600, 0)
        .map('A', 1)
        .build();

    FontData::parse(&data).unwrap()
}

fn check(glyph: &PositionedGlyph, id: u16, char_pos: f32, word_pos: f32, line: f32) {
    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    assert_eq!(glyph.glyph_id, GlyphId(id));
    assert!(approx(glyph.char_pos, char_pos), "{} != {}", glyph.char_pos, char_pos);
    assert!(approx(glyph.word_pos, word_pos), "{} != {}", glyph.word_pos, word_pos);
    assert!(approx(glyph.line, line), "{} != {}", glyph.line, line);
}

#[test]
fn single_line() {
    let glyphs = layout::layout(&font(), "AA A");
    assert_eq!(glyphs.len(), 3);
    check(&glyphs[0], 1, 0.0, 0.0, 0.0);
    check(&glyphs[1], 1, 0.6, 0.0, 0.0);
    check(&glyphs[2], 1, 1.2, SPACE_WIDTH, 0.0);
    assert!((glyphs[2].x() - (1.2 + SPACE_WIDTH)).abs() < 1e-5);
}

#[test]
fn multi_line() {
    let glyphs = layout::layout(&font(), "AA B\nA\tA?");
    assert_eq!(glyphs.len(), 6);
    check(&glyphs[0], 1, 0.0, 0.0, 0.0);
    check(&glyphs[1], 1, 0.6, 0.0, 0.0);
    check(&glyphs[2], 0, 1.2, SPACE_WIDTH, 0.0);
    check(&glyphs[3], 1, 0.0, 0.0, LINE_HEIGHT);
    check(&glyphs[4], 1, 0.6, SPACE_WIDTH * TAB_SIZE, LINE_HEIGHT);
    check(&glyphs[5], 0, 1.2, SPACE_WIDTH * TAB_SIZE, LINE_HEIGHT);
}

#[test]
fn glyph_center() {
    let glyphs = layout::layout(&font(), "A?");
    assert!((glyphs[0].offset_x - 0.25).abs() < 1e-5);
    assert!((glyphs[0].offset_y - 0.35).abs() < 1e-5);
    assert!((glyphs[1].offset_x - 0.2).abs() < 1e-5);
}

#[test]
fn whitespace_only() {
    assert!(layout::layout(&font(), " \t\n\n ").is_empty());
    assert!(layout::layout(&font(), "").is_empty());
}

#[test]
fn wide_glyph_center() {
    let data = FontBuilder::new()
        .glyph(Glyph::rect(-20000, -100, 20000, 700), 500, -20000)
        .build();

    let font = FontData::parse(&data).unwrap();
    let glyphs = layout::layout(&font, "?");
    assert!(glyphs[0].offset_x.abs() < 1e-5);
    assert!((glyphs[0].offset_y - 0.3).abs() < 1e-5);
}
