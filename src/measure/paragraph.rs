use crate::measure::{MeasuredLine, MeasuredWord, MetricsCache, WordBreak};
use crate::{FontDescriptor, FontStyle, FontWeight, MeasureBackend, Px};

/// The largest width/height constraint the engine defaults to when the caller
/// does not provide one; mirrors the usual texture-size ceiling of raster
/// targets.
pub const MAX_DIMENSION: Px = Px(16384.0);

/// Everything a paragraph layout depends on besides the text itself. Optional
/// fields resolve at the start of a fit call.
///
/// Defaults: 24 px `"Arial"`, regular style and weight, wrap enabled, glyph
/// padding enabled, constraints at [MAX_DIMENSION], the font-size search
/// pinned to `font_size` (both bounds default to it), and line heights equal
/// to the font size.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphOptions {
    pub font_family: String,
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
    /// Starting (and largest default) font size for the fit search, and the
    /// exact size used by single-pass measurement
    pub font_size: Px,
    /// Smallest size the fit search may fall to; `None` pins it to
    /// `font_size`. The minimum is non-negotiable: if even this size
    /// overflows the constraints, its layout is returned anyway.
    pub min_font_size: Option<Px>,
    /// Largest size the fit search may grow to; `None` pins it to `font_size`
    pub max_font_size: Option<Px>,
    pub max_width: Px,
    pub max_height: Px,
    /// Disable automatic wrapping entirely; only mandatory breaks produce new
    /// lines and lines may exceed `max_width`
    pub no_auto_wrap: bool,
    /// Compare and report tight ink bounds (`bounding_width`/`bounding_height`)
    /// instead of nominal box dimensions
    pub use_glyph_padding: bool,
    /// Baseline-to-baseline advance after a mandatory break; overrides the
    /// multiplier when both are set
    pub line_height: Option<Px>,
    /// Mandatory-break advance as a multiple of the font size
    pub line_height_multiplier: Option<f32>,
    /// Baseline-to-baseline advance after an automatic wrap; overrides the
    /// multiplier when both are set, and falls back to the mandatory-break
    /// line height when neither is set
    pub auto_wrap_line_height: Option<Px>,
    /// Auto-wrap advance as a multiple of the font size
    pub auto_wrap_line_height_multiplier: Option<f32>,
}

impl Default for ParagraphOptions {
    fn default() -> ParagraphOptions {
        ParagraphOptions {
            font_family: "Arial".to_string(),
            font_style: FontStyle::default(),
            font_weight: FontWeight::default(),
            font_size: Px(24.0),
            min_font_size: None,
            max_font_size: None,
            max_width: MAX_DIMENSION,
            max_height: MAX_DIMENSION,
            no_auto_wrap: false,
            use_glyph_padding: true,
            line_height: None,
            line_height_multiplier: None,
            auto_wrap_line_height: None,
            auto_wrap_line_height_multiplier: None,
        }
    }
}

impl ParagraphOptions {
    /// The font descriptor these options select at a particular candidate size
    pub fn font(&self, size: Px) -> FontDescriptor {
        FontDescriptor {
            style: self.font_style,
            weight: self.font_weight,
            size,
            family: self.font_family.clone(),
        }
    }

    /// Resolve the `(mandatory, auto-wrap)` line heights for a candidate font
    /// size. Both are rounded to whole pixels.
    fn line_heights(&self, font_size: Px) -> (Px, Px) {
        let line_height = match (self.line_height, self.line_height_multiplier) {
            (Some(height), _) => height,
            (None, Some(multiplier)) => font_size * multiplier,
            (None, None) => font_size,
        }
        .round();

        let auto_wrap_line_height = match (
            self.auto_wrap_line_height,
            self.auto_wrap_line_height_multiplier,
        ) {
            (Some(height), _) => height,
            (None, Some(multiplier)) => font_size * multiplier,
            (None, None) => line_height,
        }
        .round();

        (line_height, auto_wrap_line_height)
    }
}

/// A fully measured paragraph: the artifact handed to drawing/composition
/// layers to place glyphs, and to callers for layout decisions (chosen font
/// size, line count, dimensions).
///
/// `width`/`height` are the nominal box dimensions; `bounding_width`/
/// `bounding_height` additionally fold in the padding envelope, tightly
/// enclosing the visual ink. `height` accumulates line advances starting from
/// the font size itself (the first line's ascent allowance). Immutable once
/// produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredParagraph {
    pub text: String,
    pub width: Px,
    pub height: Px,
    pub bounding_width: Px,
    pub bounding_height: Px,
    /// The exact font size this layout was produced at
    pub font_size: Px,
    pub font_family: String,
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
    pub space_width: Px,
    pub padding_top: Px,
    pub padding_bottom: Px,
    pub padding_left: Px,
    pub padding_right: Px,
    pub lines: Vec<MeasuredLine>,
}

/// Measures and fits paragraphs against a measurement backend, memoizing
/// per-fragment metrics in an owned [MetricsCache].
///
/// Every operation runs to completion on the calling thread; there is no
/// shared global state. To reuse metrics across threads, either put the whole
/// measurer behind a lock or give each task its own; metrics are deterministic
/// functions of (descriptor, fragment), so duplicated work is the only cost of
/// separate caches.
pub struct Measurer<B> {
    backend: B,
    cache: MetricsCache,
}

impl<B: MeasureBackend> Measurer<B> {
    pub fn new(backend: B) -> Measurer<B> {
        Measurer {
            backend,
            cache: MetricsCache::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Discard all memoized metrics. Call this after replacing font data that
    /// an already-used descriptor string can reach, otherwise stale
    /// measurements will keep being served for it.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Break text into words and measure each one. Fragments are trimmed of
    /// trailing whitespace before measurement; the stripped count rides along
    /// so wrapping can reconstruct the exact inter-word spacing.
    pub fn measure_words(&mut self, font: &FontDescriptor, text: &str) -> Vec<MeasuredWord> {
        WordBreak::new(text)
            .map(|record| {
                let trimmed = record.word.trim_end();
                let ending_space_count =
                    record.word.chars().count() - trimmed.chars().count();
                MeasuredWord {
                    metrics: self.cache.measure(&self.backend, font, trimmed),
                    ending_space_count,
                    is_last_word: record.is_last_word,
                    has_line_break: record.has_line_break,
                }
            })
            .collect()
    }

    /// Lay the text out once at a fixed font size: greedy wrapping of measured
    /// words under `options.max_width`.
    ///
    /// Width comparisons are strict, so a line landing exactly on the budget
    /// is kept. A single word wider than the budget is never split; its line
    /// simply overflows. A mandatory break on a non-final word always closes
    /// the line, so consecutive breaks yield empty lines and their spacing.
    pub fn measure_paragraph(
        &mut self,
        text: &str,
        options: &ParagraphOptions,
        font_size: Px,
    ) -> MeasuredParagraph {
        let font = options.font(font_size);
        let words = self.measure_words(&font, text);
        let (line_height, auto_wrap_line_height) = options.line_heights(font_size);
        let space_width = self.cache.measure(&self.backend, &font, " ").width;

        let mut paragraph = MeasuredParagraph {
            text: text.to_string(),
            width: Px::ZERO,
            height: Px::ZERO,
            bounding_width: Px::ZERO,
            bounding_height: Px::ZERO,
            font_size,
            font_family: options.font_family.clone(),
            font_style: options.font_style,
            font_weight: options.font_weight,
            space_width,
            padding_top: Px::ZERO,
            padding_bottom: Px::ZERO,
            padding_left: Px::ZERO,
            padding_right: Px::ZERO,
            lines: Vec::new(),
        };

        let mut line = MeasuredLine::open(font_size);
        // trailing-space count and break flag of the previously placed word
        let mut last_spacing: Option<(usize, bool)> = None;

        for word in words {
            let space_count = match last_spacing {
                Some((count, false)) => count,
                _ => 0,
            };
            let spaces_width = space_width * space_count as f32;

            let mut width_to_add = line.width + spaces_width + word.metrics.width;
            if options.use_glyph_padding {
                width_to_add =
                    width_to_add + word.metrics.padding_left + word.metrics.padding_right;
            }

            let is_last_word = word.is_last_word;
            let has_line_break = word.has_line_break;
            let ending_space_count = word.ending_space_count;

            if !options.no_auto_wrap && width_to_add > options.max_width {
                if !line.text.is_empty() {
                    line.next_line_height = auto_wrap_line_height;
                    paragraph.lines.push(line);
                }
                line = MeasuredLine::starting_with(word);
            } else {
                line.push(word, space_count, spaces_width);
            }

            if !is_last_word && has_line_break {
                line.next_line_height = line_height;
                paragraph.lines.push(line);
                line = MeasuredLine::open(font_size);
            }

            last_spacing = Some((ending_space_count, has_line_break));
        }

        if line.width != Px::ZERO {
            paragraph.lines.push(line);
        }

        if let (Some(first), Some(last)) = (paragraph.lines.first(), paragraph.lines.last()) {
            let padding_top = first.padding_top;
            let padding_bottom = last.padding_bottom;

            paragraph.width = paragraph
                .lines
                .iter()
                .fold(Px::ZERO, |acc, line| acc.max(line.width));
            paragraph.height = paragraph
                .lines
                .iter()
                .fold(font_size, |acc, line| acc + line.next_line_height);
            paragraph.padding_top = padding_top;
            paragraph.padding_bottom = padding_bottom;
            paragraph.bounding_height = paragraph.height + padding_top + padding_bottom;
            paragraph.bounding_width = paragraph.lines.iter().fold(Px::ZERO, |acc, line| {
                acc.max(line.width + line.padding_left + line.padding_right)
            });
            paragraph.padding_left = paragraph
                .lines
                .iter()
                .fold(Px::ZERO - font_size, |acc, line| acc.max(line.padding_left));
            paragraph.padding_right = paragraph
                .lines
                .iter()
                .fold(Px::ZERO - font_size, |acc, line| acc.max(line.padding_right));
        }

        paragraph
    }

    /// Find the largest font size in `[min_font_size, max_font_size]` whose
    /// layout fits within `max_width`/`max_height` (tight bounds when
    /// `use_glyph_padding` is set), and return that layout.
    ///
    /// This is a bounded binary search: each pass is an independent layout at
    /// the candidate size, and the bracket halves every iteration, so at most
    /// `log2(max - min)` passes run. Fragment metrics are memoized, so repeat
    /// passes mostly re-run the wrap arithmetic. When even the minimum size
    /// overflows, its (overflowing) layout is returned; the caller asked for a
    /// floor, and the engine never reports failure.
    ///
    /// Behavior with `min_font_size > max_font_size` is unspecified; validate
    /// bounds before calling.
    pub fn fit_paragraph(&mut self, text: &str, options: &ParagraphOptions) -> MeasuredParagraph {
        let mut min_font_size = options.min_font_size.unwrap_or(options.font_size);
        let mut max_font_size = options.max_font_size.unwrap_or(options.font_size);
        let mut font_size = options.font_size;

        loop {
            let paragraph = self.measure_paragraph(text, options, font_size);
            let (width, height) = if options.use_glyph_padding {
                (paragraph.bounding_width, paragraph.bounding_height)
            } else {
                (paragraph.width, paragraph.height)
            };

            log::trace!(
                "fit pass at {font_size}px: {width}x{height} against {}x{}, bracket [{min_font_size}, {max_font_size}]",
                options.max_width,
                options.max_height,
            );

            if height <= options.max_height && width <= options.max_width {
                if max_font_size > font_size {
                    min_font_size = font_size;
                    font_size = ((font_size + max_font_size) / 2.0).ceil();
                } else {
                    return paragraph;
                }
            } else if min_font_size < font_size {
                max_font_size = font_size - 1.0;
                font_size = ((font_size + min_font_size) / 2.0).floor();
            } else {
                return paragraph;
            }
        }
    }
}
