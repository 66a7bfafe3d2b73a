use text_fit::measure::{Measurer, ParagraphOptions};
use text_fit::{HeuristicBackend, Px};

fn main() {
    let words: usize = std::env::args()
        .nth(1)
        .and_then(|n| n.parse().ok())
        .unwrap_or(100);
    let text = lipsum::lipsum(words);

    let mut measurer = Measurer::new(HeuristicBackend::default());
    let options = ParagraphOptions {
        max_width: Px(600.0),
        max_height: Px(600.0),
        font_size: Px(40.0),
        min_font_size: Some(Px(6.0)),
        ..ParagraphOptions::default()
    };

    let paragraph = measurer.fit_paragraph(&text, &options);
    println!(
        "{words} words into 600x600: {}px over {} lines ({} x {})",
        paragraph.font_size,
        paragraph.lines.len(),
        paragraph.width,
        paragraph.height,
    );
    for line in &paragraph.lines {
        println!("{:>9.2} px | {}", line.width.0, line.text);
    }
}
