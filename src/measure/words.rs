use unicode_linebreak::{linebreaks, BreakOpportunity};

/// One break opportunity in a run of text: the substring since the previous
/// break, where it starts, and what kind of break closed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakRecord {
    /// The substring from the previous break up to this one, with any trailing
    /// mandatory-break characters (`\n`, optionally preceded by `\r`) stripped
    pub word: String,
    /// Byte offset of the substring's start in the original text
    pub index: usize,
    /// This break sits at the very end of the text
    pub is_last_word: bool,
    /// The break is mandatory (a hard line break such as `\n`), not merely an
    /// opportunity the wrapper may take
    pub has_line_break: bool,
}

/// A lazy, one-shot iterator over the break opportunities of a run of text,
/// following the Unicode line breaking algorithm (UAX #14).
///
/// Every Unicode-defined break is preserved, including breaks that produce
/// zero-length words: consecutive mandatory breaks (blank lines) come out as
/// empty-string [BreakRecord]s, which downstream line spacing depends on
/// counting. Empty input produces an empty sequence.
pub struct WordBreak<'a> {
    text: &'a str,
    breaks: Box<dyn Iterator<Item = (usize, BreakOpportunity)> + 'a>,
    last: usize,
}

impl<'a> WordBreak<'a> {
    pub fn new(text: &'a str) -> WordBreak<'a> {
        let breaks: Box<dyn Iterator<Item = (usize, BreakOpportunity)> + 'a> = if text.is_empty() {
            Box::new(std::iter::empty())
        } else {
            Box::new(linebreaks(text))
        };
        WordBreak {
            text,
            breaks,
            last: 0,
        }
    }
}

impl Iterator for WordBreak<'_> {
    type Item = BreakRecord;

    fn next(&mut self) -> Option<BreakRecord> {
        let (position, opportunity) = self.breaks.next()?;
        let word = strip_trailing_breaks(&self.text[self.last..position]);

        let record = BreakRecord {
            word: word.to_string(),
            index: self.last,
            is_last_word: position == self.text.len(),
            has_line_break: opportunity == BreakOpportunity::Mandatory,
        };
        self.last = position;
        Some(record)
    }
}

/// Strip a trailing run of mandatory break characters: any number of `\n`s,
/// each optionally preceded by `\r`. A lone trailing `\r` is left in place;
/// fragment measurement trims remaining whitespace anyway.
fn strip_trailing_breaks(word: &str) -> &str {
    let mut word = word;
    while let Some(rest) = word.strip_suffix('\n') {
        word = rest.strip_suffix('\r').unwrap_or(rest);
    }
    word
}
