use crate::measure::GlyphMetrics;
use crate::Px;

/// One word of a paragraph, ready for wrapping: the cached metrics of its
/// trimmed text plus the spacing and break information the wrapper needs to
/// reconstruct the original inter-word layout.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredWord {
    pub metrics: GlyphMetrics,
    /// Number of trailing whitespace characters stripped before measurement;
    /// the wrapper multiplies this by the space width to restore the gap to
    /// the following word
    pub ending_space_count: usize,
    /// This word closes the paragraph
    pub is_last_word: bool,
    /// A mandatory break followed this word in the original text
    pub has_line_break: bool,
}

/// One laid-out line of a paragraph. The padding envelope is the union of the
/// line's word paddings: `padding_left` comes from the first word placed on
/// the line, `padding_right` from the most recent, and the vertical paddings
/// are running maxima across every word.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredLine {
    pub text: String,
    pub width: Px,
    pub padding_top: Px,
    pub padding_bottom: Px,
    pub padding_left: Px,
    pub padding_right: Px,
    /// Vertical advance from this line's baseline to the next one; zero on
    /// the paragraph's final line
    pub next_line_height: Px,
    pub words: Vec<MeasuredWord>,
}

impl MeasuredLine {
    /// A fresh, empty line. The top padding starts at `-font_size` so that a
    /// line which never receives an inked word (a blank line) collapses to
    /// nothing in tight-bounds mode.
    pub(crate) fn open(font_size: Px) -> MeasuredLine {
        MeasuredLine {
            text: String::new(),
            width: Px::ZERO,
            padding_top: Px::ZERO - font_size,
            padding_bottom: Px::ZERO,
            padding_left: Px::ZERO,
            padding_right: Px::ZERO,
            next_line_height: Px::ZERO,
            words: Vec::new(),
        }
    }

    /// A new line opened by an auto-wrap, seeded from the word that did not
    /// fit on the previous line. Any spaces trailing the previous word are
    /// swallowed by the wrap.
    pub(crate) fn starting_with(word: MeasuredWord) -> MeasuredLine {
        MeasuredLine {
            text: word.metrics.text.clone(),
            width: word.metrics.width,
            padding_top: word.metrics.padding_top,
            padding_bottom: word.metrics.padding_bottom,
            padding_left: word.metrics.padding_left,
            padding_right: word.metrics.padding_right,
            next_line_height: Px::ZERO,
            words: vec![word],
        }
    }

    /// Append a word, along with the reconstructed spaces separating it from
    /// the previous word on this line.
    pub(crate) fn push(&mut self, word: MeasuredWord, space_count: usize, spaces_width: Px) {
        for _ in 0..space_count {
            self.text.push(' ');
        }
        self.text.push_str(&word.metrics.text);

        self.padding_top = self.padding_top.max(word.metrics.padding_top);
        self.padding_bottom = self.padding_bottom.max(word.metrics.padding_bottom);
        if self.width == Px::ZERO {
            self.padding_left = word.metrics.padding_left;
        }
        self.padding_right = word.metrics.padding_right;

        self.width = self.width + spaces_width + word.metrics.width;
        self.words.push(word);
    }
}
