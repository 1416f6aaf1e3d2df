/// Whitespace as matched by the cleaning rule: ASCII space, `\t` through `\r`
/// (including vertical tab) and the `\x1C`..`\x1F` separators.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t'..='\r' | '\x1C'..='\x1F')
}

/// Characters that end up as a single space in normalized text.
fn is_separator(c: char) -> bool {
    !c.is_ascii() || is_whitespace(c)
}

/// Clean a unit of extracted text.
///
/// Every run of non-ASCII characters and whitespace collapses into one
/// space, and the result is trimmed. The output is pure ASCII with no
/// leading, trailing or repeated whitespace.
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split(is_separator).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Clean each unit and join them one per line.
///
/// Units are appended with a trailing newline and the whole string is
/// trimmed at the end, so empty leading and trailing units disappear while
/// empty units in the middle leave a blank line.
pub fn join_units<I, S>(units: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut full_text = String::new();
    for unit in units {
        full_text.push_str(&clean_text(unit.as_ref()));
        full_text.push('\n');
    }
    full_text.trim_matches(is_whitespace).to_string()
}
