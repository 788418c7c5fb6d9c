use ttf_outline::{Error, FontData, GlyphId, OutlinePoint, Rect, Tag};

use crate::builder::{CmapFormat, FontBuilder, Glyph};

fn font() -> FontBuilder {
    FontBuilder::new()
        .glyph(Glyph::rect(0, 0, 400, 700), 500, 0)
        .glyph(Glyph::triangle(), 600, 0)
        .glyph(Glyph::rect(50, -100, 250, 300), 300, 50)
        .map('A', 1)
        .map('B', 2)
}

#[test]
fn triangle() {
    crate::init_logger();

    let font = FontData::parse(&font().build()).unwrap();
    assert_eq!(font.units_per_em(), 1000);
    assert_eq!(font.number_of_glyphs(), 3);
    assert_eq!((font.ascender(), font.descender(), font.line_gap()), (800, -200, 90));
    assert_eq!(font.global_bbox(), Rect { x_min: -100, y_min: -200, x_max: 1000, y_max: 800 });

    let glyph = font.find('A').unwrap();
    assert_eq!(glyph.glyph_id(), GlyphId(1));
    assert_eq!(glyph.points(), &[
        OutlinePoint { x: 0.0, y: 0.0, on_curve: true },
        OutlinePoint { x: 100.0, y: 0.0, on_curve: true },
        OutlinePoint { x: 50.0, y: 100.0, on_curve: true },
    ]);
    assert_eq!(glyph.end_points(), &[2]);
    assert_eq!(glyph.bbox(), Rect { x_min: 0, y_min: 0, x_max: 100, y_max: 100 });
    assert_eq!(glyph.advance_width(), 600);
    assert_eq!(glyph.left_side_bearing(), 0);
    assert_eq!(glyph.right_side_bearing(), 500);
}

#[test]
fn short_loca() {
    let mut builder = font();
    builder.index_to_loc_format = 0;

    let short = FontData::parse(&builder.build()).unwrap();
    let long = FontData::parse(&font().build()).unwrap();
    for c in &['A', 'B'] {
        assert_eq!(short.find(*c).unwrap().points(), long.find(*c).unwrap().points());
    }
}

#[test]
fn format4_and_format12_are_equivalent() {
    let mut builder = font();
    builder.cmap_format = CmapFormat::Format12;

    let format12 = FontData::parse(&builder.build()).unwrap();
    let format4 = FontData::parse(&font().build()).unwrap();
    assert_eq!(
        format4.character_map().iter().collect::<Vec<_>>(),
        format12.character_map().iter().collect::<Vec<_>>(),
    );
    assert_eq!(format4.glyph_index('B'), Some(GlyphId(2)));
    assert_eq!(format12.glyph_index('B'), Some(GlyphId(2)));
}

#[test]
fn missing_glyph_fallback() {
    let font = FontData::parse(&font().build()).unwrap();
    assert_eq!(font.glyph_index('Z'), None);
    assert!(font.find('Z').is_none());

    let glyph = font.lookup('Z');
    assert_eq!(glyph.glyph_id(), GlyphId(0));
    assert_eq!(glyph.advance_width(), 500);
    assert_eq!(glyph.bbox(), Rect { x_min: 0, y_min: 0, x_max: 400, y_max: 700 });
    assert_eq!(font.missing_glyph().glyph_id(), GlyphId(0));
}

#[test]
fn glyphs_are_sorted() {
    let font = FontData::parse(&font().build()).unwrap();
    let ids: Vec<_> = font.glyphs().map(|g| g.glyph_id()).collect();
    assert_eq!(ids, &[GlyphId(0), GlyphId(1), GlyphId(2)]);
}

#[test]
fn empty_missing_glyph() {
    let data = FontBuilder::new()
        .glyph(Glyph::Empty, 250, 0)
        .glyph(Glyph::triangle(), 600, 0)
        .map('A', 1)
        .build();

    let font = FontData::parse(&data).unwrap();
    let glyph = font.lookup('?');
    assert!(glyph.is_empty());
    assert_eq!(glyph.advance_width(), 250);
}

#[test]
fn zero_units_per_em() {
    let mut builder = font();
    builder.units_per_em = 0;
    assert_eq!(
        FontData::parse(&builder.build()).unwrap_err(),
        Error::MalformedTable(Tag::from_bytes(b"head")),
    );
}

#[test]
fn invalid_loca_format() {
    let mut builder = font();
    builder.index_to_loc_format = 2;
    assert_eq!(FontData::parse(&builder.build()).unwrap_err(), Error::UnsupportedLocaFormat(2));
}

#[test]
fn no_glyphs() {
    let data = FontBuilder::new().build();
    assert_eq!(FontData::parse(&data).unwrap_err(), Error::NoMissingGlyph);
}

#[test]
fn truncated_font() {
    let data = font().build();
    for len in &[0, 11, 12, 40, data.len() - 1] {
        assert!(FontData::parse(&data[..*len]).is_err());
    }
}

#[test]
fn repeated_parsing() {
    let data = font().build();
    let a = FontData::parse(&data).unwrap();
    let b = FontData::parse(&data).unwrap();
    for (a, b) in a.glyphs().zip(b.glyphs()) {
        assert_eq!(a.points(), b.points());
        assert_eq!(a.end_points(), b.end_points());
    }
}

#[test]
fn is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FontData>();
    assert_send_sync::<Error>();
}

#[test]
fn error_message() {
    let error = Error::MissingRequiredTable(Tag::from_bytes(b"glyf"));
    assert_eq!(error.to_string(), "the font doesn't have a required 'glyf' table");
}
