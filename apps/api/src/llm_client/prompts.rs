// Shared prompt fragments. Each caller builds its own prompts alongside it
// (see evaluation/prompts.rs); this file only holds cross-cutting pieces.

/// Appended to every prompt that expects a JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond in valid JSON only, with exactly the keys \
    listed above. Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";

/// Truncates `text` to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Fills `{name}` placeholders in `template` in a single pass. Substituted values are
/// written verbatim and never scanned again; unknown `{...}` sequences are kept as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let capacity = template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match filled {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
