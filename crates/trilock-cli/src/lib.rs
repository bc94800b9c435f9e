//! Shared pieces of the challenge binaries: the embedded gamma payload and
//! the stdin helpers every prompt uses.

use std::io::{self, BufRead, Write};

pub mod payload;

/// Print a prompt and read one line from stdin.
///
/// Returns the line without its trailing newline. An empty result means
/// end-of-input or a bare return.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Like [`prompt_line`], but keeps only the first whitespace-delimited
/// token, matching the classic `cin >> key` behaviour of the early
/// challenges.
pub fn prompt_token(prompt: &str) -> io::Result<String> {
    let line = prompt_line(prompt)?;
    Ok(line.split_whitespace().next().unwrap_or("").to_string())
}
