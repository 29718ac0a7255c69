//! camelCase → snake_case.

use std::borrow::Cow;

/// Rewrite every lowercase-then-uppercase ASCII pair `aB` to `a_b`.
///
/// Only the pair is touched: a leading capital stays capital
/// (`"HelloWorld"` → `"Hello_world"`) and runs of capitals split once
/// (`"aBC"` → `"a_bC"`).
pub(super) fn to_snake(input: &str) -> Cow<'_, str> {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + input.len() / 4);
    let mut changed = false;
    let mut i = 0;

    while let Some(&lower) = chars.get(i) {
        if let Some(&upper) = chars.get(i + 1)
            && lower.is_ascii_lowercase()
            && upper.is_ascii_uppercase()
        {
            result.push(lower);
            result.push('_');
            result.push(upper.to_ascii_lowercase());
            changed = true;
            i += 2;
            continue;
        }

        result.push(lower);
        i += 1;
    }

    if changed {
        Cow::Owned(result)
    } else {
        Cow::Borrowed(input)
    }
}
