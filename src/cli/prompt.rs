use std::io::{self, BufRead, Write};

/// Show `prompt` on stdout and read one line from stdin.
///
/// Returns `None` at end of input.
pub fn stdin_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}
