//! Regex helpers shared by the rewrite passes

use regex::{Captures, Match, Regex};

/// Compile a pattern that is a fixed literal in this crate.
pub(crate) fn static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static rewrite pattern must compile")
}

/// Replace all non-overlapping matches, skipping matches that `reject` refuses.
///
/// The `regex` crate has no look-around, so context checks live in `reject`.
/// A refused match consumes nothing: scanning resumes one character past its
/// start, so a later match may still overlap the refused span.
pub(crate) fn replace_all_unless<R, F>(text: &str, re: &Regex, reject: R, mut rep: F) -> String
where
    R: Fn(&str, &Captures<'_>) -> bool,
    F: FnMut(&Captures<'_>) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut emitted = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if reject(text, &caps) {
            pos = whole.start() + next_char_len(text, whole.start());
            continue;
        }

        out.push_str(&text[emitted..whole.start()]);
        out.push_str(&rep(&caps));
        emitted = whole.end();
        pos = if whole.is_empty() {
            whole.end() + next_char_len(text, whole.end())
        } else {
            whole.end()
        };
    }

    out.push_str(&text[emitted..]);
    out
}

fn next_char_len(text: &str, at: usize) -> usize {
    text[at..].chars().next().map_or(1, char::len_utf8)
}

/// Emit a LaTeX control word followed by whatever the operator pattern captured after it.
///
/// A letter directly after a control word would be read as part of its name
/// (`\cdotb`), so a single space separates them.
pub(crate) fn control_word(word: &str, following: Option<Match<'_>>) -> String {
    match following {
        Some(letter) => format!("{} {}", word, letter.as_str()),
        None => word.to_string(),
    }
}

/// Pattern for a literal operator, capturing one directly following letter.
pub(crate) fn operator_pattern(operator: &str) -> String {
    format!(r"{}(\p{{L}})?", regex::escape(operator))
}

/// Rewrite every occurrence of an operator compiled with [`operator_pattern`].
pub(crate) fn replace_operator(text: &str, re: &Regex, word: &str) -> String {
    re.replace_all(text, |caps: &Captures<'_>| control_word(word, caps.get(1)))
        .into_owned()
}
