/// Lower-case `text`, then upper-case the first letter of every word.
///
/// Word boundaries are whitespace and `.`. An apostrophe is a boundary only
/// after a one-letter elision prefix, so `o'neil` becomes `O'Neil` while
/// `world's` stays `World's`. Characters before the first letter of a word
/// (digits, punctuation) are left alone and the next letter is capitalized.
pub fn capitalize_words(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    let mut capitalized = false;
    let mut word_len = 0usize;
    for c in text.chars().flat_map(char::to_lowercase) {
        if !capitalized && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalized = true;
            word_len += 1;
            continue;
        }

        let boundary = c.is_whitespace() || c == '.' || (c == '\'' && word_len == 1);
        if boundary {
            capitalized = false;
            word_len = 0;
        } else {
            word_len += 1;
        }
        out.push(c);
    }
    out
}

/// `true` for `None` or text that is empty after trimming.
pub fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|t| t.trim().is_empty())
}
