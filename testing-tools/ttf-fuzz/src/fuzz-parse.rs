use ttf_outline::{FontData, ParseOptions};

fn main() {
    afl::fuzz!(|data: &[u8]| {
        let options = ParseOptions { decode_all_glyphs: true, ..ParseOptions::default() };
        if let Ok(font) = FontData::parse_with_options(data, options) {
            for glyph in font.glyphs() {
                let _ = glyph.outline(&mut Builder(0));
            }

            let _ = ttf_outline::layout::layout(&font, "Hello, World!\n\tfuzz");
        }
    });
}


struct Builder(usize);

impl ttf_outline::OutlineBuilder for Builder {
    #[inline]
    fn move_to(&mut self, _: f32, _: f32) {
        self.0 += 1;
    }

    #[inline]
    fn quad_to(&mut self, _: f32, _: f32, _: f32, _: f32) {
        self.0 += 2;
    }

    #[inline]
    fn close(&mut self) {
        self.0 += 1;
    }
}
