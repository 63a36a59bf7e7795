//! Redaction of credentials from text that ends up in logs.

use std::borrow::Cow;

const MAX_LOGGED_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Google API keys and OAuth access tokens start with these.
const KEY_PREFIXES: [&str; 2] = ["AIza", "ya29."];

/// The secret follows the marker.
const KEY_MARKERS: [&str; 5] = [
    "key=",
    "x-goog-api-key: ",
    "\"key\":\"",
    "Authorization: Bearer ",
    "authorization: bearer ",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Replace every `marker<token>` with `[REDACTED]`, keeping bare markers.
fn redact_after(text: &mut String, marker: &str, keep_marker: bool) {
    let mut from = 0;
    while let Some(rel) = text[from..].find(marker) {
        let start = from + rel;
        let token_start = start + marker.len();
        let token_len: usize = text[token_start..]
            .chars()
            .take_while(|c| is_secret_char(*c))
            .map(char::len_utf8)
            .sum();
        if token_len == 0 {
            from = token_start;
            continue;
        }
        let replace_from = if keep_marker { token_start } else { start };
        text.replace_range(replace_from..token_start + token_len, REDACTED);
        from = replace_from + REDACTED.len();
    }
}

pub fn scrub_secrets(input: &str) -> Cow<'_, str> {
    if !KEY_PREFIXES
        .iter()
        .chain(KEY_MARKERS.iter())
        .any(|p| input.contains(p))
    {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for prefix in KEY_PREFIXES {
        redact_after(&mut scrubbed, prefix, false);
    }
    for marker in KEY_MARKERS {
        redact_after(&mut scrubbed, marker, true);
    }
    Cow::Owned(scrubbed)
}

/// Scrub secrets, then cap the length for a single log line.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secrets(input);
    match scrubbed.char_indices().nth(MAX_LOGGED_CHARS) {
        Some((end, _)) => format!("{}...", &scrubbed[..end]),
        None => scrubbed.into_owned(),
    }
}
