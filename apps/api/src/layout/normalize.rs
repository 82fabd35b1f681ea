//! Text normalization: folds arbitrary Unicode input onto the glyph subset the
//! standard PDF faces can draw.
//!
//! Every string passes through [`normalize`] before it is measured or drawn, so the
//! width tables and the WinAnsi encoder never see typographic punctuation they
//! cannot represent.

/// Canonicalizes `text` for measurement and drawing.
///
/// - NBSP becomes a plain space
/// - U+2010..=U+2015 and U+2212 become `-`
/// - curly double/single quotes become straight quotes
/// - `…` becomes `...`
/// - whitespace runs collapse to a single space, and the result is trimmed
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        let mapped: &str = match c {
            '\u{00A0}' => " ",
            '\u{2010}'..='\u{2015}' | '\u{2212}' => "-",
            '\u{201C}' | '\u{201D}' => "\"",
            '\u{2018}' | '\u{2019}' => "'",
            '\u{2026}' => "...",
            _ => {
                if c.is_whitespace() {
                    pending_space = true;
                    continue;
                }
                out.push_str(flush_space(&mut pending_space, out.is_empty()));
                out.push(c);
                continue;
            }
        };

        if mapped == " " {
            pending_space = true;
            continue;
        }
        out.push_str(flush_space(&mut pending_space, out.is_empty()));
        out.push_str(mapped);
    }

    out
}

/// Normalizes an optional field; `None` is the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Emits the deferred separator, dropping it at the start of the output (trim).
fn flush_space(pending: &mut bool, at_start: bool) -> &'static str {
    let emit = *pending && !at_start;
    *pending = false;
    if emit {
        " "
    } else {
        ""
    }
}
