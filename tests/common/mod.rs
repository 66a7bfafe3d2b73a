use text_fit::{FontDescriptor, HeuristicBackend, MeasureBackend, Px, TextMetrics};

/// A heuristic backend tuned so every quantity is a multiple of half the font
/// size: exactly representable in f32 for integer sizes, so tests can assert
/// widths with `==` and place lines exactly on wrap budgets.
pub fn grid_backend() -> HeuristicBackend {
    HeuristicBackend {
        advance_em: 0.5,
        ascent_em: 0.75,
        descent_em: 0.25,
    }
}

/// A fixed-advance backend whose ink deliberately overhangs the nominal box:
/// every character advances half an em, ink reaches 0.1 em left of the origin,
/// and runs 0.2 em past the advance. Gives the glyph-padding paths something
/// nonzero to chew on.
pub struct OverhangBackend;

impl MeasureBackend for OverhangBackend {
    fn measure_text(&self, font: &FontDescriptor, text: &str) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }

        let advance = font.size * (0.5 * text.chars().count() as f32);
        TextMetrics {
            advance_width: advance,
            ink_left: font.size * 0.1,
            ink_right: advance + font.size * 0.2,
            ink_ascent: font.size * 0.7,
            ink_descent: font.size * 0.25,
        }
    }
}

/// Flatten a paragraph back into its words, in layout order.
#[allow(dead_code)]
pub fn words_in_order(paragraph: &text_fit::measure::MeasuredParagraph) -> Vec<String> {
    paragraph
        .lines
        .iter()
        .flat_map(|line| line.words.iter().map(|word| word.metrics.text.clone()))
        .collect()
}
