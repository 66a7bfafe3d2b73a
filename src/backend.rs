use crate::{Font, FontDescriptor, Px};
use owned_ttf_parser::AsFaceRef;

/// A raw text measurement as reported by a backend, relative to the text
/// origin on the baseline. `ink_left` is the leftward extent of inked pixels
/// (positive values reach left of the origin), `ink_right` the rightward
/// extent, `ink_ascent` the extent above the baseline, and `ink_descent` the
/// extent below it (positive values reach down). The ink box can reach beyond
/// or fall short of `advance_width`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TextMetrics {
    pub advance_width: Px,
    pub ink_left: Px,
    pub ink_right: Px,
    pub ink_ascent: Px,
    pub ink_descent: Px,
}

/// Anything that can measure a run of text in a given font. The measurement
/// engine only ever calls this one method and never draws, so a backend can be
/// a full 2D raster surface, a bare font face, or a table of made-up numbers.
///
/// Backends are not expected to fail: a backend that cannot resolve a glyph
/// should substitute or skip it, and anything genuinely fatal (an unreadable
/// face, a poisoned surface) is the backend's to surface however it sees fit.
pub trait MeasureBackend {
    fn measure_text(&self, font: &FontDescriptor, text: &str) -> TextMetrics;
}

/// A measurement backend over a single parsed [Font] face.
///
/// Advance widths come from the face's horizontal advances and ink extents
/// from the union of glyph bounding boxes. Characters missing from the face
/// fall back to the replacement glyph (U+FFFD) and are skipped entirely when
/// the face carries neither. The descriptor's family, style, and weight are
/// ignored: one backend wraps one face, and picking the right face for a
/// descriptor (or falling back between faces) is the caller's concern.
pub struct FaceBackend {
    pub font: Font,
}

impl FaceBackend {
    pub fn new(font: Font) -> FaceBackend {
        FaceBackend { font }
    }
}

impl MeasureBackend for FaceBackend {
    fn measure_text(&self, font: &FontDescriptor, text: &str) -> TextMetrics {
        let face = self.font.face.as_face_ref();
        let scaling: Px = font.size / face.units_per_em() as f32;

        let mut x = Px::ZERO;
        // (min x, max x, max y, min y) of the union of glyph ink boxes
        let mut ink: Option<(Px, Px, Px, Px)> = None;

        for ch in text.chars() {
            let gid = match self
                .font
                .glyph_id(ch)
                .or_else(|| self.font.replacement_glyph_id())
            {
                Some(gid) => owned_ttf_parser::GlyphId(gid),
                None => continue,
            };

            if let Some(bbox) = face.glyph_bounding_box(gid) {
                let x0 = x + scaling * bbox.x_min as f32;
                let x1 = x + scaling * bbox.x_max as f32;
                let y0 = scaling * bbox.y_min as f32;
                let y1 = scaling * bbox.y_max as f32;
                ink = Some(match ink {
                    None => (x0, x1, y1, y0),
                    Some((min_x, max_x, max_y, min_y)) => {
                        (min_x.min(x0), max_x.max(x1), max_y.max(y1), min_y.min(y0))
                    }
                });
            }

            x += scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f32;
        }

        match ink {
            Some((min_x, max_x, max_y, min_y)) => TextMetrics {
                advance_width: x,
                ink_left: Px::ZERO - min_x,
                ink_right: max_x,
                ink_ascent: max_y,
                ink_descent: Px::ZERO - min_y,
            },
            // no inked glyphs at all (empty text, spaces)
            None => TextMetrics {
                advance_width: x,
                ..TextMetrics::default()
            },
        }
    }
}

/// A tiny heuristic measurement backend suitable for demos, tests, and early
/// layout passes before real font data is available. It assumes every
/// character advances the same fraction of an em and that ink fills the
/// advance exactly, with no side bearings.
#[derive(Debug, Copy, Clone)]
pub struct HeuristicBackend {
    /// Horizontal advance per character, in ems (default 0.6)
    pub advance_em: f32,
    /// Ink extent above the baseline, in ems (default 0.8)
    pub ascent_em: f32,
    /// Ink extent below the baseline, in ems (default 0.2)
    pub descent_em: f32,
}

impl Default for HeuristicBackend {
    fn default() -> HeuristicBackend {
        HeuristicBackend {
            advance_em: 0.6,
            ascent_em: 0.8,
            descent_em: 0.2,
        }
    }
}

impl MeasureBackend for HeuristicBackend {
    fn measure_text(&self, font: &FontDescriptor, text: &str) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }

        let advance = font.size * (self.advance_em * text.chars().count() as f32);
        TextMetrics {
            advance_width: advance,
            ink_left: Px::ZERO,
            ink_right: advance,
            ink_ascent: font.size * self.ascent_em,
            ink_descent: font.size * self.descent_em,
        }
    }
}
