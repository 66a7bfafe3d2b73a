use crate::{FontDescriptor, MeasureBackend, Px, TextMetrics};
use std::collections::HashMap;

/// The measured shape of one text fragment in one font: its advance width and
/// the four signed offsets from the nominal glyph box to the visually inked
/// box. Negative paddings mean the ink falls short of the nominal box (the
/// common case for `padding_top`, since most glyphs stay well under the em
/// height); positive paddings mean the ink reaches past it (diacritics,
/// descenders, italic overhang).
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMetrics {
    pub text: String,
    pub width: Px,
    pub padding_top: Px,
    pub padding_bottom: Px,
    pub padding_left: Px,
    pub padding_right: Px,
}

/// Memoizes [GlyphMetrics] per (font descriptor string, text fragment) so the
/// fitter's repeated layout passes only hit the backend once per fragment.
/// Values are deterministic functions of the key for fixed font data, so the
/// cache never invalidates on its own; call [MetricsCache::clear] after
/// swapping font data reachable through an already-used descriptor string.
/// Single entries cannot be evicted.
#[derive(Debug, Default)]
pub struct MetricsCache {
    entries: HashMap<String, HashMap<String, GlyphMetrics>>,
}

impl MetricsCache {
    pub fn new() -> MetricsCache {
        MetricsCache::default()
    }

    /// Discard every memoized measurement
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total number of cached fragment measurements across all fonts
    pub fn len(&self) -> usize {
        self.entries.values().map(|fragments| fragments.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Measure a text fragment in the given font, consulting the cache first
    /// and the backend on a miss.
    pub fn measure<B: MeasureBackend>(
        &mut self,
        backend: &B,
        font: &FontDescriptor,
        text: &str,
    ) -> GlyphMetrics {
        let fragments = self.entries.entry(font.to_string()).or_default();
        if let Some(metrics) = fragments.get(text) {
            return metrics.clone();
        }

        let metrics = glyph_metrics(font, text, backend.measure_text(font, text));
        fragments.insert(text.to_string(), metrics.clone());
        metrics
    }
}

/// Fold a raw backend measurement into cacheable glyph paddings.
///
/// Some backends report the bounding box of a right-to-left run with its
/// asymmetry mirrored: nearly all of the extent on the left of the origin and
/// nearly none on the right. When that shape is detected the left/right
/// padding computations swap their advance correction so the resulting
/// paddings describe the box the glyphs actually occupy.
fn glyph_metrics(font: &FontDescriptor, text: &str, measured: TextMetrics) -> GlyphMetrics {
    let mut padding_left = measured.ink_left;
    let mut padding_right = measured.ink_right - measured.advance_width;

    if measured.advance_width > Px::ZERO
        && measured.ink_left / measured.advance_width > 0.8
        && measured.ink_right / measured.advance_width < 0.2
    {
        padding_left = measured.ink_left - measured.advance_width;
        padding_right = measured.ink_right;
    }

    GlyphMetrics {
        text: text.to_string(),
        width: measured.advance_width,
        padding_top: measured.ink_ascent - font.size,
        padding_bottom: measured.ink_descent,
        padding_left,
        padding_right,
    }
}
