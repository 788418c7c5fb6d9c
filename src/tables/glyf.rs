//! A [Glyph Data Table](
//! https://docs.microsoft.com/en-us/typography/opentype/spec/glyf) implementation.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::parser::{F2Dot14, FWord, Stream};
use crate::tables::loca;
use crate::{Error, GlyphId, Rect, Result};

/// Maximum nesting of composite glyphs.
///
/// Not defined by the format, so we are using our own value.
pub const MAX_COMPONENT_DEPTH: u8 = 32;

/// Maximum number of points in a single glyph, including all components.
pub const MAX_POINTS: usize = u16::MAX as usize;


// https://docs.microsoft.com/en-us/typography/opentype/spec/glyf#simple-glyph-description
#[derive(Clone, Copy)]
struct SimpleGlyphFlags(u8);

impl SimpleGlyphFlags {
    const ON_CURVE_POINT: Self                          = Self(1 << 0);
    const X_SHORT_VECTOR: Self                          = Self(1 << 1);
    const Y_SHORT_VECTOR: Self                          = Self(1 << 2);
    const REPEAT_FLAG: Self                             = Self(1 << 3);
    const X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR: Self    = Self(1 << 4);
    const Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR: Self    = Self(1 << 5);

    #[inline] fn all() -> Self { Self(63) }
    #[inline] fn from_bits_truncate(bits: u8) -> Self { Self(bits & Self::all().0) }
    #[inline] fn contains(&self, other: Self) -> bool { (self.0 & other.0) == other.0 }
}


// https://docs.microsoft.com/en-us/typography/opentype/spec/glyf#composite-glyph-description
#[derive(Clone, Copy)]
struct CompositeGlyphFlags(u16);

impl CompositeGlyphFlags {
    const ARG_1_AND_2_ARE_WORDS: Self     = Self(1 << 0);
    const ARGS_ARE_XY_VALUES: Self        = Self(1 << 1);
    const WE_HAVE_A_SCALE: Self           = Self(1 << 3);
    const MORE_COMPONENTS: Self           = Self(1 << 5);
    const WE_HAVE_AN_X_AND_Y_SCALE: Self  = Self(1 << 6);
    const WE_HAVE_A_TWO_BY_TWO: Self      = Self(1 << 7);

    #[inline] fn all() -> Self { Self(235) }
    #[inline] fn from_bits_truncate(bits: u16) -> Self { Self(bits & Self::all().0) }
    #[inline] fn contains(&self, other: Self) -> bool { (self.0 & other.0) == other.0 }
}


/// A single outline point in font design units.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OutlinePoint {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Indicates that the point lies on the curve.
    ///
    /// Off-curve points are quadratic control points.
    pub on_curve: bool,
}


/// A decoded glyph outline.
///
/// Composite glyphs are flattened: they own transformed copies
/// of their components' points.
#[derive(Clone, PartialEq, Debug)]
pub struct GlyphOutline {
    pub(crate) glyph_id: GlyphId,
    pub(crate) points: Vec<OutlinePoint>,
    pub(crate) end_points: Vec<usize>,
    pub(crate) bbox: Rect,
    pub(crate) advance_width: u16,
    pub(crate) left_side_bearing: i16,
}

impl GlyphOutline {
    /// Returns the glyph ID.
    #[inline]
    pub fn glyph_id(&self) -> GlyphId {
        self.glyph_id
    }

    /// Returns all outline points.
    #[inline]
    pub fn points(&self) -> &[OutlinePoint] {
        &self.points
    }

    /// Returns indices of the last point of each contour.
    ///
    /// Strictly increasing. The last one is `points().len() - 1`.
    /// Empty for glyphs without an outline.
    #[inline]
    pub fn end_points(&self) -> &[usize] {
        &self.end_points
    }

    /// Returns the glyph bounding box, as stored in the glyph header.
    #[inline]
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Returns glyph's advance width.
    #[inline]
    pub fn advance_width(&self) -> u16 {
        self.advance_width
    }

    /// Returns glyph's left side bearing.
    #[inline]
    pub fn left_side_bearing(&self) -> i16 {
        self.left_side_bearing
    }

    /// Returns glyph's right side bearing.
    ///
    /// `advance - (lsb + x_max - x_min)`
    #[inline]
    pub fn right_side_bearing(&self) -> i32 {
        i32::from(self.advance_width)
            - (i32::from(self.left_side_bearing) + i32::from(self.bbox.x_max)
               - i32::from(self.bbox.x_min))
    }

    /// Checks that the glyph has no outline.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over contours.
    pub fn contours(&self) -> impl Iterator<Item = &[OutlinePoint]> + '_ {
        let mut start = 0;
        self.end_points.iter().map(move |&end| {
            let contour = self.points.get(start..=end).unwrap_or(&[]);
            start = end + 1;
            contour
        })
    }
}


/// A raw glyph, before metrics are attached.
#[derive(Clone)]
struct Glyph {
    points: Vec<OutlinePoint>,
    end_points: Vec<usize>,
    bbox: Rect,
}

impl Glyph {
    fn empty() -> Self {
        Glyph {
            points: Vec::new(),
            end_points: Vec::new(),
            bbox: Rect::default(),
        }
    }
}


/// A glyph record kind, selected by the sign of the contours count.
#[derive(Clone, Copy, PartialEq, Debug)]
enum GlyphKind {
    Simple(u16),
    Composite,
}

impl GlyphKind {
    #[inline]
    fn from_contours_count(number_of_contours: i16) -> Self {
        if number_of_contours >= 0 {
            GlyphKind::Simple(number_of_contours as u16)
        } else {
            GlyphKind::Composite
        }
    }
}


/// A `glyf` outline decoder.
///
/// Decodes glyph records into flat point lists, following composite glyphs recursively.
#[derive(Clone, Copy)]
#[allow(missing_debug_implementations)]
pub struct Decoder<'a> {
    loca: loca::Table<'a>,
    max_depth: u8,
}

impl<'a> Decoder<'a> {
    /// Creates a new decoder.
    ///
    /// `max_depth` limits the number of glyphs on a single composite path,
    /// including the requested one. So 1 allows only simple glyphs.
    /// Zero is treated as 1.
    #[inline]
    pub fn new(loca: loca::Table<'a>, max_depth: u8) -> Self {
        Decoder {
            loca,
            max_depth: max_depth.max(1),
        }
    }

    /// Decodes a glyph outline.
    ///
    /// `s` must be a stream over the whole font data, since `loca` ranges are absolute.
    /// The stream position is not preserved.
    ///
    /// The returned outline has zero metrics.
    pub fn decode(&self, s: &mut Stream, glyph_id: GlyphId) -> Result<GlyphOutline> {
        let mut path = Vec::new();
        let mut components = BTreeMap::new();
        let glyph = self.decode_impl(s, glyph_id, &mut path, &mut components)?;

        debug!("Glyph {}: {} points in {} contours.",
               glyph_id, glyph.points.len(), glyph.end_points.len());

        Ok(GlyphOutline {
            glyph_id,
            points: glyph.points,
            end_points: glyph.end_points,
            bbox: glyph.bbox,
            advance_width: 0,
            left_side_bearing: 0,
        })
    }

    fn decode_impl(
        &self,
        s: &mut Stream,
        glyph_id: GlyphId,
        path: &mut Vec<GlyphId>,
        components: &mut BTreeMap<GlyphId, Glyph>,
    ) -> Result<Glyph> {
        if path.contains(&glyph_id) || path.len() >= usize::from(self.max_depth) {
            return Err(Error::GlyphCycleDetected(glyph_id));
        }

        let range = self.loca.glyph_range(glyph_id)?;
        if range.start == range.end {
            // A glyph without an outline, like a space.
            return Ok(Glyph::empty());
        }

        s.seek(range.start);
        let number_of_contours: i16 = s.read()?;
        let bbox = Rect {
            x_min: s.read::<FWord>()?,
            y_min: s.read::<FWord>()?,
            x_max: s.read::<FWord>()?,
            y_max: s.read::<FWord>()?,
        };

        path.push(glyph_id);
        let glyph = match GlyphKind::from_contours_count(number_of_contours) {
            GlyphKind::Simple(count) => parse_simple_glyph(s, glyph_id, count, bbox),
            GlyphKind::Composite => self.parse_composite_glyph(s, glyph_id, bbox, path, components),
        };
        path.pop();

        glyph
    }

    fn parse_composite_glyph(
        &self,
        s: &mut Stream,
        glyph_id: GlyphId,
        bbox: Rect,
        path: &mut Vec<GlyphId>,
        components: &mut BTreeMap<GlyphId, Glyph>,
    ) -> Result<Glyph> {
        type Flags = CompositeGlyphFlags;

        let mut glyph = Glyph {
            points: Vec::new(),
            end_points: Vec::new(),
            bbox,
        };

        loop {
            let flags = Flags::from_bits_truncate(s.read()?);
            let component_id: GlyphId = s.read()?;

            if !flags.contains(Flags::ARGS_ARE_XY_VALUES) {
                return Err(Error::UnsupportedComponentArgs(glyph_id));
            }

            let mut ts = Transform::default();
            if flags.contains(Flags::ARG_1_AND_2_ARE_WORDS) {
                ts.e = f32::from(s.read::<i16>()?);
                ts.f = f32::from(s.read::<i16>()?);
            } else {
                ts.e = f32::from(s.read::<i8>()?);
                ts.f = f32::from(s.read::<i8>()?);
            }

            if flags.contains(Flags::WE_HAVE_A_TWO_BY_TWO) {
                ts.a = s.read::<F2Dot14>()?.to_f32();
                ts.b = s.read::<F2Dot14>()?.to_f32();
                ts.c = s.read::<F2Dot14>()?.to_f32();
                ts.d = s.read::<F2Dot14>()?.to_f32();
            } else if flags.contains(Flags::WE_HAVE_AN_X_AND_Y_SCALE) {
                ts.a = s.read::<F2Dot14>()?.to_f32();
                ts.d = s.read::<F2Dot14>()?.to_f32();
            } else if flags.contains(Flags::WE_HAVE_A_SCALE) {
                ts.a = s.read::<F2Dot14>()?.to_f32();
                ts.d = ts.a;
            }

            // Components are decoded once per requested glyph.
            // A finished component cannot be on the current path.
            let component = match components.get(&component_id) {
                Some(component) => component.clone(),
                None => {
                    // The component is decoded with the same stream,
                    // so we have to restore the position afterwards.
                    let pos = s.offset();
                    let component = self.decode_impl(s, component_id, path, components)?;
                    s.seek(pos);
                    components.insert(component_id, component.clone());
                    component
                }
            };

            let base = glyph.points.len();
            if base + component.points.len() > MAX_POINTS {
                return Err(Error::MalformedGlyph(glyph_id));
            }

            let is_default_ts = ts.is_default();
            glyph.points.extend(component.points.into_iter().map(|mut p| {
                if !is_default_ts {
                    ts.apply_to(&mut p.x, &mut p.y);
                }

                p
            }));
            glyph.end_points.extend(component.end_points.into_iter().map(|n| n + base));

            if !flags.contains(Flags::MORE_COMPONENTS) {
                break;
            }
        }

        Ok(glyph)
    }
}

fn parse_simple_glyph(
    s: &mut Stream,
    glyph_id: GlyphId,
    number_of_contours: u16,
    bbox: Rect,
) -> Result<Glyph> {
    type Flags = SimpleGlyphFlags;

    if number_of_contours == 0 {
        return Ok(Glyph { bbox, ..Glyph::empty() });
    }

    let mut end_points = Vec::with_capacity(usize::from(number_of_contours));
    for _ in 0..number_of_contours {
        let n = usize::from(s.read::<u16>()?);
        // End points must be in strictly increasing order.
        if let Some(&prev) = end_points.last() {
            if n <= prev {
                return Err(Error::MalformedGlyph(glyph_id));
            }
        }

        end_points.push(n);
    }

    // Cannot be empty, since we have at least one contour.
    let points_total = end_points.last().map(|n| n + 1).unwrap_or(0);

    let instructions_len: u16 = s.read()?;
    s.advance(usize::from(instructions_len));

    let mut flags = Vec::with_capacity(points_total);
    while flags.len() < points_total {
        let f = Flags::from_bits_truncate(s.read()?);

        // The number of times a glyph point repeats.
        let mut repeats = 1;
        if f.contains(Flags::REPEAT_FLAG) {
            repeats += usize::from(s.read::<u8>()?);
        }

        let left = points_total - flags.len();
        if repeats > left {
            warn!("Glyph {} has flags repeated past the last point. Truncated.", glyph_id);
            repeats = left;
        }

        flags.extend(core::iter::repeat(f).take(repeats));
    }

    let mut points = Vec::with_capacity(points_total);

    let mut x = 0i16;
    for f in &flags {
        let dx = glyph_coord(*f, Flags::X_SHORT_VECTOR, Flags::X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR, s)?;
        x = x.wrapping_add(dx);
        points.push(OutlinePoint {
            x: f32::from(x),
            y: 0.0,
            on_curve: f.contains(Flags::ON_CURVE_POINT),
        });
    }

    let mut y = 0i16;
    for (f, p) in flags.iter().zip(points.iter_mut()) {
        let dy = glyph_coord(*f, Flags::Y_SHORT_VECTOR, Flags::Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR, s)?;
        y = y.wrapping_add(dy);
        p.y = f32::from(y);
    }

    Ok(Glyph {
        points,
        end_points,
        bbox,
    })
}

fn glyph_coord(
    flags: SimpleGlyphFlags,
    short_vector: SimpleGlyphFlags,
    is_same_or_positive_short_vector: SimpleGlyphFlags,
    s: &mut Stream,
) -> Result<i16> {
    let flags = (
        flags.contains(short_vector),
        flags.contains(is_same_or_positive_short_vector),
    );

    Ok(match flags {
        (true, true) => {
            i16::from(s.read::<u8>()?)
        }
        (true, false) => {
            -i16::from(s.read::<u8>()?)
        }
        (false, true) => {
            // Keep previous coordinate.
            0
        }
        (false, false) => {
            s.read()?
        }
    })
}


#[derive(Clone, Copy)]
struct Transform {
    a: f32, b: f32, c: f32,
    d: f32, e: f32, f: f32,
}

impl Transform {
    #[inline]
    fn apply_to(&self, x: &mut f32, y: &mut f32) {
        let tx = *x;
        let ty = *y;
        *x = self.a * tx + self.c * ty + self.e;
        *y = self.b * tx + self.d * ty + self.f;
    }

    #[inline]
    fn is_default(&self) -> bool {
        // A direct float comparison is fine in our case.
           self.a == 1.0
        && self.b == 0.0
        && self.c == 0.0
        && self.d == 1.0
        && self.e == 0.0
        && self.f == 0.0
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 }
    }
}
