use ttf_outline::{Error, GlyphId, Tag};
use ttf_outline::parser::Stream;
use ttf_outline::tables::hmtx::Table;

#[test]
fn simple_case() {
    let data = &[
        0x00, 0x01, // advance width [0]: 1
        0x00, 0x02, // side bearing [0]: 2
    ];

    let table = Table::parse(&mut Stream::new(data), 1, 1).unwrap();
    assert_eq!(table.advance(GlyphId(0)), Some(1));
    assert_eq!(table.side_bearing(GlyphId(0)), Some(2));
}

#[test]
fn zero_metrics() {
    let data = &[
        0x00, 0x01, // advance width [0]: 1
        0x00, 0x02, // side bearing [0]: 2
    ];

    assert_eq!(Table::parse(&mut Stream::new(data), 0, 1).err(),
               Some(Error::MalformedTable(Tag::from_bytes(b"hmtx"))));
}

#[test]
fn zero_metrics_and_glyphs() {
    let table = Table::parse(&mut Stream::new(&[]), 0, 0).unwrap();
    assert_eq!(table.advance(GlyphId(0)), None);
}

#[test]
fn truncated_tail() {
    let data = &[
        0x00, 0x0A, // advance width [0]: 10
        0xFF, 0xFE, // side bearing [0]: -2

        0x00, 0x14, // advance width [1]: 20
        0x00, 0x04, // side bearing [1]: 4

        0x00, 0x05, // side bearing [2]: 5
        0xFF, 0xFA, // side bearing [3]: -6
    ];

    let table = Table::parse(&mut Stream::new(data), 2, 4).unwrap();
    let metrics: Vec<_> = (0..5)
        .map(|id| (table.advance(GlyphId(id)), table.side_bearing(GlyphId(id))))
        .collect();

    assert_eq!(metrics, vec![
        (Some(10), Some(-2)),
        (Some(20), Some(4)),
        (Some(20), Some(5)),
        (Some(20), Some(-6)),
        (None, None),
    ]);
}

#[test]
fn stream_position() {
    let data = &[
        0x00, 0x01, // advance width [0]: 1
        0x00, 0x02, // side bearing [0]: 2
        0x00, 0x03, // side bearing [1]: 3
        0xAA, 0xBB, // unrelated data
    ];

    let mut s = Stream::new(data);
    Table::parse(&mut s, 1, 2).unwrap();
    assert_eq!(s.offset(), 6);
}
