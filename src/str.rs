//! ASCII case-insensitive token search and version token scanning.

/// Byte offset of the first occurrence of `token` in `haystack`,
/// compared ASCII case-insensitively. An empty `token` is never found.
pub(crate) fn find_token(haystack: &[u8], token: &[u8]) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    haystack
        .windows(token.len())
        .position(|window| window.eq_ignore_ascii_case(token))
}

/// Returns `true` if `token` occurs in `ua`, compared ASCII case-insensitively.
pub(crate) fn has_token(ua: &str, token: &str) -> bool {
    find_token(ua.as_bytes(), token.as_bytes()).is_some()
}

/// Returns `true` if any of `tokens` occurs in `ua`, compared ASCII case-insensitively.
pub(crate) fn has_any_token(ua: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| has_token(ua, token))
}

/// Returns `true` for characters that can be part of a version token:
/// ASCII letters and digits, `_`, `.` and `-`.
#[inline]
pub(crate) fn is_version_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Finds the first `<token><sep><version>` in `s` and returns the version.
///
/// `token` is matched ASCII case-insensitively, `sep` is one of the given
/// separator bytes and the version is the longest non-empty run of
/// [version characters](is_version_char) directly following it.
/// Occurrences of `token` not followed by a separator and at least
/// one version character are skipped.
pub(crate) fn version_after<'a>(s: &'a str, token: &str, separators: &[u8]) -> Option<&'a str> {
    let bytes = s.as_bytes();
    let mut offset = 0;
    while let Some(loc) = find_token(&bytes[offset..], token.as_bytes()) {
        let sep = offset + loc + token.len();
        offset += loc + 1;

        if !bytes.get(sep).is_some_and(|b| separators.contains(b)) {
            continue;
        }
        // separators are ascii so `sep + 1` is always a char boundary
        let Some(rest) = s.get(sep + 1..) else {
            continue;
        };
        let end = rest.find(|c: char| !is_version_char(c)).unwrap_or(rest.len());
        if end > 0 {
            return Some(&rest[..end]);
        }
    }
    None
}

/// Returns the version token at the very end of `s`, ignoring trailing whitespace.
///
/// When `closing_paren` is [`Paren::Required`] the token must be directly
/// followed by a `)`; with [`Paren::Optional`] that `)` may be missing.
pub(crate) fn trailing_version(s: &str, closing_paren: Paren) -> Option<&str> {
    let s = s.trim_end();
    let s = match (s.strip_suffix(')'), closing_paren) {
        (Some(stripped), _) => stripped,
        (None, Paren::Optional) => s,
        (None, Paren::Required) => return None,
    };
    let start = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_version_char(*c))
        .last()
        .map(|(idx, _)| idx)?;
    Some(&s[start..])
}

/// Whether a closing parenthesis is expected after a trailing version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Paren {
    Required,
    Optional,
}
