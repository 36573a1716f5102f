use unicode_width::UnicodeWidthStr;

/// How the length of a title is counted when centering it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMeasure {
    /// Unicode scalar values, one per `char`
    #[default]
    Chars,
    /// Terminal display columns (wide CJK glyphs count as two)
    Columns,
}

impl TextMeasure {
    pub fn measure(&self, text: &str) -> usize {
        match self {
            TextMeasure::Chars => text.chars().count(),
            TextMeasure::Columns => text.width(),
        }
    }
}

/// Center `text` in a field of `width`, counting its length with `measure`.
///
/// Odd padding puts the extra space on the right. Text that already fills
/// the field is returned unchanged, so the field grows instead of truncating.
pub fn center_text(text: &str, width: usize, measure: TextMeasure) -> String {
    let text_width = measure.measure(text);
    if text_width >= width {
        return text.to_string();
    }

    let padding = width - text_width;
    let left_padding = padding / 2;
    let right_padding = padding - left_padding;

    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// A run of `fill` exactly `width` characters long.
pub fn fill_line(fill: char, width: usize) -> String {
    std::iter::repeat_n(fill, width).collect()
}
