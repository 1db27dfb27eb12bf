//! Unescaping of HTML character references in texts returned by the API.
//!
//! Twitter escapes `&`, `<` and `>` in message texts while reporting entity offsets against the
//! escaped text. After unescaping, the offsets have to be shifted so that they point into the
//! unescaped text again.

use crate::types::Indices;

/// Longest reference we try to decode, `&#x10FFFF;` included.
const MAX_REFERENCE_LEN: usize = 10;

/// Unescapes HTML character references in `text` and shifts each of `indices` left by the
/// number of code points removed before it.
///
/// Offsets are counted in Unicode code points. Unknown or malformed references are kept as is.
pub fn unescape_and_slide<'a, I>(text: &str, indices: I) -> String
where
    I: IntoIterator<Item = &'a mut Indices>,
{
    let (unescaped, removals) = unescape_with_removals(text);
    if removals.is_empty() {
        return unescaped;
    }

    for (start, end) in indices {
        *start -= removed_before(&removals, *start);
        *end -= removed_before(&removals, *end);
    }

    unescaped
}

/// Unescapes HTML character references in a text without entities, like a screen name.
pub fn unescape(text: &str) -> String {
    unescape_with_removals(text).0
}

/// Unescapes `text`, also returning `(position, removed)` pairs for each decoded reference,
/// where `position` is the code point offset of the `&` in the escaped text.
fn unescape_with_removals(text: &str) -> (String, Vec<(u64, u64)>) {
    let mut out = String::with_capacity(text.len());
    let mut removals = Vec::new();
    let mut rest = text;
    let mut pos = 0;

    while let Some(amp) = rest.find('&') {
        let before = &rest[..amp];
        out.push_str(before);
        pos += before.chars().count() as u64;
        rest = &rest[amp..];

        match decode_reference(rest) {
            Some((c, len)) => {
                out.push(c);
                // References are ASCII, so byte length equals code point count.
                removals.push((pos, len as u64 - 1));
                pos += len as u64;
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                pos += 1;
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);

    (out, removals)
}

/// Decodes the character reference at the start of `s`, returning the character and the byte
/// length of the reference.
fn decode_reference(s: &str) -> Option<(char, usize)> {
    let head = s.get(..MAX_REFERENCE_LEN.min(s.len())).unwrap_or(s);
    let semi = head.find(';')?;
    let name = &s[1..semi];

    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let code = if let Some(hex) = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)?
        }
    };

    Some((c, semi + 1))
}

/// An offset pointing into the middle of a reference is moved to just after the decoded
/// character.
fn removed_before(removals: &[(u64, u64)], offset: u64) -> u64 {
    removals
        .iter()
        .take_while(|&&(pos, _)| pos < offset)
        .map(|&(pos, removed)| removed.min(offset - pos - 1))
        .sum()
}
