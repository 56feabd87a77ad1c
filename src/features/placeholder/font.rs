use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};

// Tried in order when no font is configured.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

const BITMAP_CELL: u32 = 8;
const MISSING_GLYPH: [u8; 8] = [0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

/// Where glyph shapes come from.
///
/// `Bitmap` is the built-in 8x8 font used whenever no outline font can be
/// loaded. It covers Latin text only; other characters render as a box.
#[derive(Clone)]
pub enum GlyphSource {
    Outline { font: FontArc, path: PathBuf },
    Bitmap,
}

impl GlyphSource {
    /// Loads `configured` if given, otherwise the first readable system font.
    /// Any failure degrades to the bitmap font.
    pub fn load(configured: Option<&Path>) -> Self {
        if let Some(path) = configured {
            match GlyphSource::from_file(path) {
                Ok(source) => return source,
                Err(e) => log::warn!("Cannot use font {}: {}", path.display(), e),
            }
        }

        SYSTEM_FONT_CANDIDATES
            .iter()
            .map(Path::new)
            .filter(|path| path.exists())
            .find_map(|path| GlyphSource::from_file(path).ok())
            .unwrap_or_else(|| {
                log::warn!("No outline font available, using built-in bitmap font");
                GlyphSource::Bitmap
            })
    }

    pub fn from_file(path: &Path) -> Result<Self, FontLoadError> {
        let bytes = std::fs::read(path)?;
        let font = FontArc::try_from_vec(bytes)?;
        Ok(GlyphSource::Outline {
            font,
            path: path.to_path_buf(),
        })
    }

    pub fn describe(&self) -> String {
        match self {
            GlyphSource::Outline { path, .. } => path.display().to_string(),
            GlyphSource::Bitmap => "built-in bitmap".to_string(),
        }
    }

    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        match self {
            GlyphSource::Outline { font, .. } => {
                let scaled = font.as_scaled(PxScale::from(size));
                let mut width = 0.0;
                let mut previous = None;
                for ch in text.chars() {
                    let id = scaled.glyph_id(ch);
                    if let Some(prev) = previous {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    previous = Some(id);
                }
                width
            }
            GlyphSource::Bitmap => {
                (text.chars().count() as u32 * BITMAP_CELL * bitmap_factor(size)) as f32
            }
        }
    }

    /// Draws `text` with its top-left corner at (`x`, `top`). Pixels outside
    /// the canvas are clipped.
    pub fn draw_text(
        &self,
        canvas: &mut RgbImage,
        text: &str,
        size: f32,
        x: f32,
        top: f32,
        color: Rgb<u8>,
    ) {
        match self {
            GlyphSource::Outline { font, .. } => {
                let scale = PxScale::from(size);
                let scaled = font.as_scaled(scale);
                let baseline = top + scaled.ascent();
                let mut caret = x;
                let mut previous = None;

                for ch in text.chars() {
                    let id = scaled.glyph_id(ch);
                    if let Some(prev) = previous {
                        caret += scaled.kern(prev, id);
                    }
                    let glyph = id.with_scale_and_position(scale, point(caret, baseline));
                    caret += scaled.h_advance(id);
                    previous = Some(id);

                    if let Some(outlined) = font.outline_glyph(glyph) {
                        let bounds = outlined.px_bounds();
                        outlined.draw(|gx, gy, coverage| {
                            let px = bounds.min.x as i64 + gx as i64;
                            let py = bounds.min.y as i64 + gy as i64;
                            blend(canvas, px, py, color, coverage);
                        });
                    }
                }
            }
            GlyphSource::Bitmap => {
                let factor = bitmap_factor(size) as i64;
                let origin_x = x.round() as i64;
                let origin_y = top.round() as i64;

                for (index, ch) in text.chars().enumerate() {
                    let rows = bitmap_glyph(ch);
                    let cell_x = origin_x + index as i64 * BITMAP_CELL as i64 * factor;
                    for (row, bits) in rows.iter().enumerate() {
                        for bit in 0..BITMAP_CELL as i64 {
                            if bits & (1 << bit) == 0 {
                                continue;
                            }
                            for dy in 0..factor {
                                for dx in 0..factor {
                                    blend(
                                        canvas,
                                        cell_x + bit * factor + dx,
                                        origin_y + row as i64 * factor + dy,
                                        color,
                                        1.0,
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn bitmap_factor(size: f32) -> u32 {
    ((size / BITMAP_CELL as f32).round() as u32).max(1)
}

fn bitmap_glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .unwrap_or(MISSING_GLYPH)
}

fn blend(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for channel in 0..3 {
        let base = pixel.0[channel] as f32;
        let target = color.0[channel] as f32;
        pixel.0[channel] = (base + (target - base) * coverage).round() as u8;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FontLoadError {
    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid font data: {0}")]
    Invalid(#[from] ab_glyph::InvalidFont),
}
