use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, Rgb, RgbImage};

use super::font::GlyphSource;

pub const DEFAULT_HEADWORD: &str = "Word";
pub const DEFAULT_LABEL: &str = "Vocabulary";

/// Canvas size, colours and text placement of a placeholder card.
/// `*_top` is the y coordinate of the top of each text line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderStyle {
    pub width: u32,
    pub height: u32,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    pub muted: Rgb<u8>,
    pub headword_size: f32,
    pub headword_top: f32,
    pub gloss_size: f32,
    pub gloss_top: f32,
    pub label_size: f32,
    pub label_top: f32,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        PlaceholderStyle {
            width: 400,
            height: 300,
            background: Rgb([102, 126, 234]),
            foreground: Rgb([255, 255, 255]),
            muted: Rgb([200, 200, 200]),
            headword_size: 40.0,
            headword_top: 100.0,
            gloss_size: 24.0,
            gloss_top: 180.0,
            label_size: 18.0,
            label_top: 220.0,
        }
    }
}

/// Renders placeholder cards as PNG data URIs.
///
/// Output depends only on the three strings, the style and the glyph source,
/// so equal inputs always produce the same bytes.
pub struct PlaceholderRenderer {
    style: PlaceholderStyle,
    glyphs: GlyphSource,
}

impl PlaceholderRenderer {
    pub fn new(style: PlaceholderStyle, glyphs: GlyphSource) -> Self {
        PlaceholderRenderer { style, glyphs }
    }

    pub fn glyphs(&self) -> &GlyphSource {
        &self.glyphs
    }

    pub fn render(&self, headword: &str, gloss: &str, label: &str) -> Result<String, ImageError> {
        let style = &self.style;
        let mut canvas = RgbImage::from_pixel(style.width, style.height, style.background);

        let headword = if headword.is_empty() { DEFAULT_HEADWORD } else { headword };
        let label = if label.is_empty() { DEFAULT_LABEL } else { label };

        self.draw_centered(
            &mut canvas,
            headword,
            style.headword_size,
            style.headword_top,
            style.foreground,
        );
        if !gloss.is_empty() {
            self.draw_centered(
                &mut canvas,
                gloss,
                style.gloss_size,
                style.gloss_top,
                style.foreground,
            );
        }
        self.draw_centered(&mut canvas, label, style.label_size, style.label_top, style.muted);

        let png = encode_png(&canvas)?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }

    fn draw_centered(
        &self,
        canvas: &mut RgbImage,
        text: &str,
        size: f32,
        top: f32,
        color: Rgb<u8>,
    ) {
        let width = self.glyphs.text_width(text, size);
        let x = ((self.style.width as f32 - width) / 2.0).floor();
        self.glyphs.draw_text(canvas, text, size, x, top, color);
    }
}

fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(data_uri: &str) -> RgbImage {
        let payload = data_uri
            .strip_prefix("data:image/png;base64,")
            .expect("not a PNG data URI");
        let bytes = STANDARD.decode(payload).unwrap();
        image::load_from_memory(&bytes).unwrap().to_rgb8()
    }

    fn renderer() -> PlaceholderRenderer {
        PlaceholderRenderer::new(PlaceholderStyle::default(), GlyphSource::Bitmap)
    }

    #[test]
    fn renders_fixed_size_png() {
        let image = decode(&renderer().render("밥", "nasi", "명사").unwrap());
        assert_eq!(image.dimensions(), (400, 300));
        assert_eq!(image.get_pixel(0, 0), &Rgb([102, 126, 234]));
    }

    #[test]
    fn text_lands_in_each_band() {
        let image = decode(&renderer().render("Bap", "nasi", "Noun").unwrap());
        let style = PlaceholderStyle::default();
        let lit_rows = |from: f32, to: f32, color: Rgb<u8>| {
            (from as u32..to as u32)
                .filter(|y| (0..style.width).any(|x| image.get_pixel(x, *y) == &color))
                .count()
        };

        assert!(lit_rows(style.headword_top, style.gloss_top, style.foreground) > 0);
        assert!(lit_rows(style.gloss_top, style.label_top, style.foreground) > 0);
        assert!(lit_rows(style.label_top, style.height as f32, style.muted) > 0);
        assert_eq!(lit_rows(0.0, style.headword_top, style.foreground), 0);
    }

    #[test]
    fn same_inputs_render_identically() {
        let renderer = renderer();
        let first = renderer.render("기차", "kereta", "명사").unwrap();
        let second = renderer.render("기차", "kereta", "명사").unwrap();
        assert_eq!(first, second);
        assert_ne!(first, renderer.render("기차", "kapal", "명사").unwrap());
    }

    #[test]
    fn empty_headword_and_label_use_defaults() {
        let renderer = renderer();
        assert_eq!(
            renderer.render("", "", "").unwrap(),
            renderer.render(DEFAULT_HEADWORD, "", DEFAULT_LABEL).unwrap()
        );
    }
}
