use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

/// Print a success line, e.g. for each written archive member.
pub fn success(msg: impl Display) {
    println!("  {} {msg}", "✓".green());
}

/// Print a warning line on stdout; used for non-error outcomes.
pub fn warning(msg: impl Display) {
    println!("  {} {msg}", "⚠".yellow());
}

/// Print an error line on stderr.
pub fn error(msg: impl Display) {
    eprintln!("  {} {msg}", "✗".red());
}

/// Print a bold section header preceded by a blank line.
pub fn header(msg: impl Display) {
    println!("\n{}", msg.to_string().bold());
}

/// Pass through what the key tool printed, byte for byte.
pub fn forward(stdout: &[u8], stderr: &[u8]) -> io::Result<()> {
    forward_to(&mut io::stdout().lock(), stdout)?;
    forward_to(&mut io::stderr().lock(), stderr)
}

fn forward_to<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    if bytes.is_empty() {
        return Ok(());
    }
    out.write_all(bytes)?;
    out.flush()
}
