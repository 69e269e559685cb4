//! Line-oriented operator prompts

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one line, without its line ending.
///
/// End of input reads as an empty line.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Whether the release prompt answer asks to leave without releasing.
/// Only the exact word `quit` counts.
#[must_use]
pub fn is_quit(answer: &str) -> bool {
    answer == "quit"
}
