mod common;

use common::{grid_backend, words_in_order, OverhangBackend};
use text_fit::measure::{Measurer, ParagraphOptions};
use text_fit::{HeuristicBackend, Px};

// The grid backend advances half an em per character, so at a 10 px font size
// every character (including the space) is worth exactly 5 px.
fn measurer() -> Measurer<HeuristicBackend> {
    Measurer::new(grid_backend())
}

fn options(max_width: f32) -> ParagraphOptions {
    ParagraphOptions {
        max_width: Px(max_width),
        font_size: Px(10.0),
        use_glyph_padding: false,
        ..ParagraphOptions::default()
    }
}

#[test]
fn empty_text_produces_no_lines() {
    let mut measurer = measurer();
    let paragraph = measurer.measure_paragraph("", &options(100.0), Px(10.0));
    assert!(paragraph.lines.is_empty());
    assert_eq!(paragraph.width, Px::ZERO);
    assert_eq!(paragraph.height, Px::ZERO);
    assert_eq!(paragraph.bounding_width, Px::ZERO);
    assert_eq!(paragraph.bounding_height, Px::ZERO);
}

#[test]
fn single_short_word_fills_one_line() {
    let mut measurer = measurer();
    let options = ParagraphOptions {
        max_width: Px(1000.0),
        font_size: Px(24.0),
        use_glyph_padding: false,
        ..ParagraphOptions::default()
    };
    let paragraph = measurer.measure_paragraph("Hi", &options, Px(24.0));

    assert_eq!(paragraph.lines.len(), 1);
    let line = &paragraph.lines[0];
    assert_eq!(line.text, "Hi");
    assert_eq!(line.words.len(), 1);
    assert!(line.words[0].is_last_word);
    assert_eq!(line.next_line_height, Px::ZERO);
    assert_eq!(paragraph.width, Px(24.0));
    assert_eq!(paragraph.height, Px(24.0));
}

#[test]
fn forced_wrap_keeps_every_line_within_budget() {
    let mut measurer = measurer();
    // the full run is 80 px wide, the widest word 20 px
    let paragraph = measurer.measure_paragraph("abcd XYZ 123 789", &options(45.0), Px(10.0));

    assert!(paragraph.lines.len() > 1);
    for line in &paragraph.lines {
        assert!(line.width <= Px(45.0), "line {:?} overflows", line.text);
    }
    assert_eq!(
        words_in_order(&paragraph),
        ["abcd", "XYZ", "123", "789"],
        "wrapping must preserve word order"
    );
    assert_eq!(paragraph.lines[0].text, "abcd XYZ");
    assert_eq!(paragraph.lines[0].width, Px(40.0));
    assert_eq!(paragraph.lines[1].text, "123 789");
    assert_eq!(paragraph.lines[1].width, Px(35.0));
}

#[test]
fn a_line_exactly_at_the_budget_is_kept() {
    let mut measurer = measurer();
    // "ab cd" measures 10 + 5 + 10 = 25 px
    let paragraph = measurer.measure_paragraph("ab cd", &options(25.0), Px(10.0));
    assert_eq!(paragraph.lines.len(), 1);
    assert_eq!(paragraph.lines[0].width, Px(25.0));

    let paragraph = measurer.measure_paragraph("ab cd", &options(24.0), Px(10.0));
    assert_eq!(paragraph.lines.len(), 2);
}

#[test]
fn an_overwide_word_overflows_without_splitting() {
    let mut measurer = measurer();
    let paragraph = measurer.measure_paragraph("abcdefghij x", &options(30.0), Px(10.0));

    assert_eq!(paragraph.lines.len(), 2);
    assert_eq!(paragraph.lines[0].text, "abcdefghij");
    assert_eq!(paragraph.lines[0].width, Px(50.0));
    assert!(paragraph.lines[0].width > Px(30.0));
    assert_eq!(paragraph.lines[1].text, "x");
}

#[test]
fn consecutive_breaks_produce_empty_lines() {
    let mut measurer = measurer();
    let paragraph = measurer.measure_paragraph("a\n\n\nb", &options(100.0), Px(10.0));

    let texts: Vec<&str> = paragraph.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["a", "", "", "b"]);
    assert_eq!(paragraph.lines[1].width, Px::ZERO);
    // three advances of the default (font-size) line height over four lines
    assert_eq!(paragraph.height, Px(40.0));
}

#[test]
fn no_auto_wrap_only_honors_mandatory_breaks() {
    let mut measurer = measurer();
    let options = ParagraphOptions {
        no_auto_wrap: true,
        ..options(10.0)
    };

    let paragraph = measurer.measure_paragraph("aaaa bbbb", &options, Px(10.0));
    assert_eq!(paragraph.lines.len(), 1);
    assert_eq!(paragraph.lines[0].width, Px(45.0));

    let paragraph = measurer.measure_paragraph("aaaa\nbbbb", &options, Px(10.0));
    assert_eq!(paragraph.lines.len(), 2);
}

#[test]
fn mandatory_and_auto_wrap_line_heights_differ() {
    let mut measurer = measurer();
    let options = ParagraphOptions {
        line_height: Some(Px(20.0)),
        auto_wrap_line_height: Some(Px(12.0)),
        ..options(20.0)
    };
    // "aa bb" is 25 px, so bb wraps; the \n after bb is a mandatory break
    let paragraph = measurer.measure_paragraph("aa bb\ncc", &options, Px(10.0));

    let texts: Vec<&str> = paragraph.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["aa", "bb", "cc"]);
    assert_eq!(paragraph.lines[0].next_line_height, Px(12.0));
    assert_eq!(paragraph.lines[1].next_line_height, Px(20.0));
    assert_eq!(paragraph.lines[2].next_line_height, Px::ZERO);
    assert_eq!(paragraph.height, Px(42.0));
}

#[test]
fn inter_word_spacing_is_reconstructed_exactly() {
    let mut measurer = measurer();
    let paragraph = measurer.measure_paragraph("a    b", &options(1000.0), Px(10.0));

    assert_eq!(paragraph.lines.len(), 1);
    assert_eq!(paragraph.lines[0].text, "a    b");
    // one char + four spaces + one char
    assert_eq!(paragraph.lines[0].width, Px(30.0));
}

#[test]
fn leading_spaces_carry_their_width() {
    let mut measurer = measurer();
    let paragraph = measurer.measure_paragraph(" a", &options(1000.0), Px(10.0));

    assert_eq!(paragraph.lines.len(), 1);
    assert_eq!(paragraph.lines[0].text, " a");
    assert_eq!(paragraph.lines[0].width, Px(10.0));
}

#[test]
fn wider_budgets_never_produce_more_lines() {
    let mut measurer = measurer();
    let text = lipsum::lipsum(40);

    let mut previous = usize::MAX;
    for max_width in [40.0, 60.0, 90.0, 150.0, 240.0, 400.0, 1000.0] {
        let paragraph = measurer.measure_paragraph(&text, &options(max_width), Px(10.0));
        let count = paragraph.lines.len();
        assert!(
            count <= previous,
            "{count} lines at width {max_width}, {previous} at the next narrower width"
        );
        previous = count;
    }
}

#[test]
fn glyph_padding_tightens_the_reported_bounds() {
    let mut measurer = Measurer::new(OverhangBackend);
    let options = ParagraphOptions {
        max_width: Px(1000.0),
        font_size: Px(10.0),
        ..ParagraphOptions::default()
    };
    let paragraph = measurer.measure_paragraph("abc", &options, Px(10.0));

    assert_eq!(paragraph.lines.len(), 1);
    // advance 15, ink overhangs 1 px left and 2 px right
    assert_eq!(paragraph.width, Px(15.0));
    assert_eq!(paragraph.bounding_width, Px(18.0));
    // ascent 7 px of a 10 px em, descent 2.5 px
    assert_eq!(paragraph.padding_top, Px(-3.0));
    assert_eq!(paragraph.padding_bottom, Px(2.5));
    assert_eq!(paragraph.height, Px(10.0));
    assert_eq!(paragraph.bounding_height, Px(9.5));
}

#[test]
fn glyph_padding_participates_in_wrap_decisions() {
    // nominal width of "aa bb" is 25 px; with the trailing word's 3 px of
    // overhang the padded width is 28 px
    let text = "aa bb";
    let options = ParagraphOptions {
        max_width: Px(26.0),
        font_size: Px(10.0),
        use_glyph_padding: false,
        ..ParagraphOptions::default()
    };

    let mut measurer = Measurer::new(OverhangBackend);
    let nominal = measurer.measure_paragraph(text, &options, Px(10.0));
    assert_eq!(nominal.lines.len(), 1);

    let options = ParagraphOptions {
        use_glyph_padding: true,
        ..options
    };
    let padded = measurer.measure_paragraph(text, &options, Px(10.0));
    assert_eq!(padded.lines.len(), 2);
}
