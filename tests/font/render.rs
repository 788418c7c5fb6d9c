use tiny_skia_path::{PathBuilder, PathSegment};
use ttf_outline::{FontData, OutlineBuilder, Rect};

use crate::builder::{FontBuilder, Glyph};

struct Builder(PathBuilder);

impl OutlineBuilder for Builder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

fn font() -> FontData {
    let circle = Glyph::Simple(vec![vec![
        (0, 0, false), (100, 0, false), (100, 100, false), (0, 100, false),
    ]]);

    let data = FontBuilder::new()
        .glyph(Glyph::Empty, 500, 0)
        .glyph(Glyph::rect(10, -20, 400, 700), 500, 10)
        .glyph(circle, 100, 0)
        .glyph(Glyph::Simple(vec![
            vec![(0, 0, true), (100, 0, true), (50, 100, true)],
            vec![(200, 0, true), (300, 0, false), (300, 100, true)],
        ]), 300, 0)
        .map('A', 1)
        .map('O', 2)
        .map('T', 3)
        .build();

    FontData::parse(&data).unwrap()
}

fn render(font: &FontData, c: char) -> (Rect, tiny_skia_path::Path) {
    let mut builder = Builder(PathBuilder::new());
    let bbox = font.find(c).unwrap().outline(&mut builder).unwrap();
    (bbox, builder.0.finish().unwrap())
}

fn assert_bounds(bbox: Rect, path: &tiny_skia_path::Path) {
    let bounds = path.bounds();
    assert_eq!(bounds.left(), f32::from(bbox.x_min));
    assert_eq!(bounds.top(), f32::from(bbox.y_min));
    assert_eq!(bounds.right(), f32::from(bbox.x_max));
    assert_eq!(bounds.bottom(), f32::from(bbox.y_max));
}

#[test]
fn on_curve_rect() {
    let (bbox, path) = render(&font(), 'A');
    assert_eq!(bbox, Rect { x_min: 10, y_min: -20, x_max: 400, y_max: 700 });
    assert_bounds(bbox, &path);

    let quads = path.segments().filter(|s| matches!(s, PathSegment::QuadTo(..))).count();
    assert_eq!(quads, 4);
}

#[test]
fn off_curve_only() {
    let (bbox, path) = render(&font(), 'O');
    assert_bounds(bbox, &path);

    let segments: Vec<_> = path.segments().collect();
    assert!(matches!(segments.first(), Some(PathSegment::MoveTo(p)) if p.x == 0.0 && p.y == 50.0));
    assert!(matches!(segments.last(), Some(PathSegment::Close)));
}

#[test]
fn multiple_contours() {
    let (bbox, path) = render(&font(), 'T');
    assert_bounds(bbox, &path);

    let moves = path.segments().filter(|s| matches!(s, PathSegment::MoveTo(..))).count();
    let closes = path.segments().filter(|s| matches!(s, PathSegment::Close)).count();
    assert_eq!((moves, closes), (2, 2));
}

#[test]
fn empty_glyph() {
    let font = font();
    let mut builder = Builder(PathBuilder::new());
    assert_eq!(font.lookup('?').outline(&mut builder), None);
    assert!(builder.0.finish().is_none());
}
