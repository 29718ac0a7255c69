//! snake_case → camelCase.

use std::borrow::Cow;

/// Rewrite every `x_y` window, where `x` is not whitespace and `y` is a
/// lowercase ASCII letter, to `xY`.
///
/// Windows whose third character is anything else (digit, uppercase,
/// another underscore) are copied through untouched but still consumed, so
/// `"a__b"` stays as is while `"__b"` becomes `"_B"`.
pub(super) fn to_camel(input: &str) -> Cow<'_, str> {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len());
    let mut changed = false;
    let mut i = 0;

    while let Some(&first) = chars.get(i) {
        if let (Some('_'), Some(&after)) = (chars.get(i + 1).copied(), chars.get(i + 2))
            && !is_word_gap(first)
            && !is_line_terminator(after)
        {
            result.push(first);
            if after.is_ascii_lowercase() {
                result.push(after.to_ascii_uppercase());
                changed = true;
            } else {
                result.push('_');
                result.push(after);
            }
            i += 3;
            continue;
        }

        result.push(first);
        i += 1;
    }

    if changed {
        Cow::Owned(result)
    } else {
        Cow::Borrowed(input)
    }
}

/// Whitespace that cannot precede a converted underscore.
///
/// Unicode `White_Space` minus NEL (U+0085), plus the byte-order mark.
fn is_word_gap(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Characters that end a line; an underscore followed by one of these is left alone.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
