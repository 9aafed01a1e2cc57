//! Conversion of rendered reply bodies to Telegram HTML.

/// Turn the superscript-and-bold reply markup into Telegram HTML.
///
/// `&#40;`/`&#41;` go back to parentheses, `^^` markers and soft-break
/// padding are dropped, HTML specials are escaped, and `**x**` becomes
/// `<b>x</b>` when the markers pair up on a line.
#[must_use]
pub fn to_telegram_html(body: &str) -> String {
    let plain = body
        .replace("&#40;", "(")
        .replace("&#41;", ")")
        .replace("^^", "")
        .replace('\r', "")
        .replace("    \n", "\n");

    let escaped = plain
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    escaped
        .split_inclusive('\n')
        .map(bold_line)
        .collect()
}

fn bold_line(line: &str) -> String {
    let parts: Vec<&str> = line.split("**").collect();
    // An odd last index means one `**` has no partner.
    if (parts.len() - 1) % 2 == 1 {
        return line.to_string();
    }
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i % 2 == 1 {
                format!("<b>{part}</b>")
            } else {
                (*part).to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_becomes_html() {
        let body = "**Biggs Darklighter** *\n\r\n^^Ship: ^^X-Wing ^^&#40;3/2/3/2&#41;    \n^^Points: ^^25    \n";
        assert_eq!(
            to_telegram_html(body),
            "<b>Biggs Darklighter</b> *\n\nShip: X-Wing (3/2/3/2)\nPoints: 25\n"
        );
    }

    #[test]
    fn test_html_specials_escaped() {
        assert_eq!(
            to_telegram_html("^^Range: ^^<1-2> & more"),
            "Range: &lt;1-2&gt; &amp; more"
        );
    }

    #[test]
    fn test_unpaired_bold_marker_left_alone() {
        assert_eq!(to_telegram_html("a ** b\n**c**"), "a ** b\n<b>c</b>");
    }
}
