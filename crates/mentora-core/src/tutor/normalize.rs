//! Cleanup pass for raw endpoint text.
//!
//! Models sometimes echo a role label, wrap the reply in quotes, or
//! fall back to numbered lists despite the prompt instructions. The
//! pass strips those artifacts, flattens line breaks into single
//! spaces, and enforces a capitalized, period-terminated sentence. It
//! is idempotent: running it on already-cleaned text is a no-op.

/// Role labels sometimes echoed at the start of a reply.
const ROLE_LABELS: &[&str] = &["tuteur:", "assistant:", "ia:", "bot:"];

/// Strip one leading role label (case-insensitive) and the whitespace
/// after it.
fn strip_role_label(text: &str) -> &str {
    let lower = text.to_lowercase();
    for label in ROLE_LABELS {
        if lower.starts_with(label) {
            return text[label.len()..].trim_start();
        }
    }
    text
}

/// Strip one wrapping quote character from each end.
fn strip_wrapping_quotes(text: &str) -> &str {
    let text = text
        .strip_prefix('"')
        .or_else(|| text.strip_prefix('\''))
        .unwrap_or(text);
    text.strip_suffix('"')
        .or_else(|| text.strip_suffix('\''))
        .unwrap_or(text)
}

/// Strip a leading `N.` or `N)` marker from a single line.
fn strip_list_marker(line: &str) -> &str {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return line;
    }
    let rest = &line[digits..];
    match rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
        Some(after) => after.trim_start_matches(' '),
        None => line,
    }
}

/// Collapse every whitespace run containing a line break into one space.
fn flatten_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    let mut run_has_break = false;

    for c in text.chars() {
        if c.is_whitespace() {
            run.push(c);
            run_has_break |= c == '\n' || c == '\r';
        } else {
            if !run.is_empty() {
                if run_has_break {
                    out.push(' ');
                } else {
                    out.push_str(&run);
                }
                run.clear();
                run_has_break = false;
            }
            out.push(c);
        }
    }
    out
}

/// Normalize raw reply text into a single clean French sentence block.
pub fn normalize_reply(text: &str) -> String {
    let trimmed = text.trim();
    let unlabeled = strip_role_label(trimmed);
    let unquoted = strip_wrapping_quotes(unlabeled).trim();

    let unlisted = unquoted
        .lines()
        .map(strip_list_marker)
        .collect::<Vec<_>>()
        .join("\n");

    let mut cleaned = flatten_breaks(unlisted.trim());

    // Capitalize the first character.
    if let Some(first) = cleaned.chars().next() {
        let upper: String = first.to_uppercase().collect();
        if upper != first.to_string() {
            cleaned = format!("{upper}{}", &cleaned[first.len_utf8()..]);
        }
    }

    if !cleaned.is_empty() && !cleaned.ends_with(['.', '!', '?']) {
        cleaned.push('.');
    }

    cleaned
}
