use std::borrow::Cow;

fn is_invisible_or_bidi_char(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}' // Soft hyphen
            | '\u{034F}' // Combining grapheme joiner
            | '\u{061C}' // Arabic Letter Mark
            | '\u{200B}'..='\u{200F}' // Zero-width + LRM/RLM
            | '\u{202A}'..='\u{202E}' // BiDi embedding/override controls
            | '\u{2060}'..='\u{2064}' // Word joiner + invisible operators
            | '\u{2066}'..='\u{2069}' // BiDi isolate controls
            | '\u{FEFF}' // Zero-width no-break space (BOM)
    )
}

fn is_dropped(c: char) -> bool {
    (c.is_ascii_control() && c != '\n' && c != '\t') || is_invisible_or_bidi_char(c)
}

/// Cleans a contact-form field before it leaves the browser.
///
/// Trims surrounding whitespace and drops ASCII control characters (other
/// than newline and tab) along with invisible or bidi-override code points, so the
/// delivered email reads the same as what the visitor saw in the form.
/// Carriage returns are dropped, which turns CRLF line endings into LF.
pub fn clean_field(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim();

    let Some(bad_idx) = trimmed.find(is_dropped) else {
        return Cow::Borrowed(trimmed);
    };

    let mut result = String::with_capacity(trimmed.len());
    result.push_str(&trimmed[..bad_idx]);
    result.extend(trimmed[bad_idx..].chars().filter(|c| !is_dropped(*c)));

    // Dropping a leading/trailing invisible char can expose whitespace.
    let inner = result.trim();
    if inner.len() == result.len() {
        Cow::Owned(result)
    } else {
        Cow::Owned(inner.to_string())
    }
}
