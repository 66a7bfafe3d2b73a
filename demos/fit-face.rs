use text_fit::measure::{Measurer, ParagraphOptions};
use text_fit::{FaceBackend, Font, Px};

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("usage: fit-face <font.ttf|otf> [text ...]");
    let text = args.collect::<Vec<String>>().join(" ");
    let text = if text.is_empty() {
        "The quick brown fox\njumps over the lazy dog".to_string()
    } else {
        text
    };

    let font = Font::load_file(&path).expect("can load font");
    println!(
        "measuring with {} (family {:?}, weight {})",
        font.name(),
        font.family(),
        font.weight()
    );

    // let the face dictate its natural leading instead of the em-sized default
    let line_height_multiplier = font.line_height(Px(1.0)).0;

    let mut measurer = Measurer::new(FaceBackend::new(font));
    let options = ParagraphOptions {
        max_width: Px(400.0),
        max_height: Px(300.0),
        font_size: Px(96.0),
        min_font_size: Some(Px(8.0)),
        line_height_multiplier: Some(line_height_multiplier),
        ..ParagraphOptions::default()
    };

    let paragraph = measurer.fit_paragraph(&text, &options);
    println!(
        "chose {}px: {} x {} nominal, {} x {} tight, {} lines",
        paragraph.font_size,
        paragraph.width,
        paragraph.height,
        paragraph.bounding_width,
        paragraph.bounding_height,
        paragraph.lines.len(),
    );
    for line in &paragraph.lines {
        println!("{:>9.2} px | {}", line.width.0, line.text);
    }
}
