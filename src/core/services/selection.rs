use std::io;

use crate::core::errors::Result;

/// Answers that abort the selection.
pub const QUIT_TOKENS: [&str; 2] = ["q", "quit"];

/// Outcome of asking the operator for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 1-based position in the displayed key list.
    Key(usize),
    Quit,
}

pub fn prompt_text(max_key: usize) -> String {
    format!("Which key do you want to export? (1..{max_key}; q to quit): ")
}

/// Ask until the operator picks a number in `1..=max_key` or quits.
///
/// `input` is called with the prompt on every round and returns the
/// answer, or `None` once the input is exhausted (treated as quit).
/// Answers that are not numbers or out of range are dropped and asked
/// again without complaint.
pub fn input_key<F>(max_key: usize, mut input: F) -> Result<Selection>
where
    F: FnMut(&str) -> io::Result<Option<String>>,
{
    let prompt = prompt_text(max_key);
    loop {
        let Some(answer) = input(&prompt)? else {
            return Ok(Selection::Quit);
        };
        let answer = answer.trim();
        if QUIT_TOKENS.contains(&answer) {
            return Ok(Selection::Quit);
        }
        match answer.parse::<usize>() {
            Ok(num) if (1..=max_key).contains(&num) => return Ok(Selection::Key(num)),
            _ => tracing::debug!(answer, "rejected selection"),
        }
    }
}
