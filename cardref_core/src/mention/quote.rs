/// Drop blank lines and `>` quote lines, trim the rest and join them with spaces.
///
/// Quoted text has already been answered where it was first posted.
#[must_use]
pub fn strip_quoted_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('>'))
        .collect::<Vec<_>>()
        .join(" ")
}
