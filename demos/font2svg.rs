use std::fmt::Write;

use ttf_outline::layout::{self, LINE_HEIGHT};
use ttf_outline::{FontData, GlyphId, GlyphOutline, ParseOptions};
use xmlwriter::XmlWriter;

const COLUMNS: u32 = 20;

const HELP: &str = "\
Usage:
    font2svg [OPTIONS] font.ttf out.svg

Renders all glyphs as a grid or a text when `--text` is set.

Options:
    --text TEXT     Text to render
    --size SIZE     Font size in pixels [default: 128]
    -h, --help      Prints help
";

struct Args {
    text: Option<String>,
    size: f32,
    font: std::path::PathBuf,
    out: std::path::PathBuf,
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            print!("{}", HELP);
            std::process::exit(1);
        }
    };

    if let Err(e) = process(args) {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    Ok(Args {
        text: args.opt_value_from_str("--text")?,
        size: args.opt_value_from_str("--size")?.unwrap_or(128.0),
        font: args.free_from_str()?,
        out: args.free_from_str()?,
    })
}

fn process(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(&args.font)?;

    let now = std::time::Instant::now();
    let options = ParseOptions {
        decode_all_glyphs: args.text.is_none(),
        ..ParseOptions::default()
    };
    let font = FontData::parse_with_options(&data, options)?;
    log::info!("Parsed in {:.2}ms.", now.elapsed().as_micros() as f64 / 1000.0);

    let svg = match args.text {
        Some(ref text) => render_text(&font, text, args.size),
        None => render_grid(&font, args.size),
    };

    std::fs::write(&args.out, svg)?;
    Ok(())
}

fn render_text(font: &FontData, text: &str, size: f32) -> String {
    let glyphs = layout::layout(font, text);
    let lines = text.lines().count().max(1) as f32;
    let width = glyphs.iter()
        .map(|g| {
            let advance = f32::from(glyph(font, g.glyph_id).advance_width());
            g.x() + advance / f32::from(font.units_per_em())
        })
        .fold(0.0, f32::max);

    let mut svg = start_svg(width * size, lines * LINE_HEIGHT * size);
    let scale = size / f32::from(font.units_per_em());
    let ascender = f32::from(font.ascender()) * scale;
    for g in &glyphs {
        write_glyph(glyph(font, g.glyph_id), g.x() * size, g.line * size + ascender, scale, &mut svg);
    }

    svg.end_document()
}

fn render_grid(font: &FontData, size: f32) -> String {
    let scale = size / f32::from(font.units_per_em());
    let cell_size = (i32::from(font.ascender()) - i32::from(font.descender())) as f32 * scale;
    let rows = (f32::from(font.number_of_glyphs()) / COLUMNS as f32).ceil();

    let mut svg = start_svg(cell_size * COLUMNS as f32, cell_size * rows);
    draw_grid(COLUMNS, rows as u32, cell_size, &mut svg);

    for (i, glyph) in font.glyphs().enumerate() {
        let i = i as u32;
        let dx = (cell_size - f32::from(glyph.advance_width()) * scale) / 2.0;
        let x = (i % COLUMNS) as f32 * cell_size + dx;
        let y = (i / COLUMNS) as f32 * cell_size + f32::from(font.ascender()) * scale;
        write_glyph(glyph, x, y, scale, &mut svg);
    }

    svg.end_document()
}

fn glyph(font: &FontData, glyph_id: GlyphId) -> &GlyphOutline {
    font.glyph(glyph_id).unwrap_or_else(|| font.missing_glyph())
}

fn start_svg(width: f32, height: f32) -> XmlWriter {
    let mut svg = XmlWriter::new(xmlwriter::Options::default());
    svg.start_element("svg");
    svg.write_attribute("xmlns", "http://www.w3.org/2000/svg");
    svg.write_attribute_fmt("viewBox", format_args!("0 0 {} {}", width.ceil(), height.ceil()));
    svg
}

fn draw_grid(columns: u32, rows: u32, cell_size: f32, svg: &mut XmlWriter) {
    let width = columns as f32 * cell_size;
    let height = rows as f32 * cell_size;

    let mut path = String::new();
    for i in 0..=columns {
        let x = i as f32 * cell_size;
        let _ = write!(path, "M {} 0 L {} {} ", x, x, height);
    }

    for i in 0..=rows {
        let y = i as f32 * cell_size;
        let _ = write!(path, "M 0 {} L {} {} ", y, width, y);
    }

    svg.start_element("path");
    svg.write_attribute("fill", "none");
    svg.write_attribute("stroke", "black");
    svg.write_attribute("stroke-width", "1");
    svg.write_attribute("d", path.trim_end());
    svg.end_element();
}

fn write_glyph(glyph: &GlyphOutline, x: f32, y: f32, scale: f32, svg: &mut XmlWriter) {
    let mut builder = Builder(String::new());
    if glyph.outline(&mut builder).is_none() {
        return;
    }

    svg.start_element("path");
    svg.write_attribute("d", builder.0.trim_end());
    svg.write_attribute_fmt(
        "transform",
        format_args!("matrix({} 0 0 {} {} {})", scale, -scale, x, y),
    );
    svg.end_element();
}

struct Builder(String);

impl ttf_outline::OutlineBuilder for Builder {
    fn move_to(&mut self, x: f32, y: f32) {
        let _ = write!(self.0, "M {} {} ", x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let _ = write!(self.0, "Q {} {} {} {} ", x1, y1, x, y);
    }

    fn close(&mut self) {
        self.0.push_str("Z ");
    }
}
