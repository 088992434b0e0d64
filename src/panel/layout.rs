/// Center `text` in exactly `width` characters.
///
/// The left pad is the floor of half the slack; the right pad takes the rest. Text longer than
/// `width` is truncated. Widths are counted in `char`s.
pub fn center_line(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width + text.len());
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

/// `fill` repeated `n` times.
pub(crate) fn repeat(fill: char, n: usize) -> String {
    std::iter::repeat_n(fill, n).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/panel/layout.rs"]
mod tests;
