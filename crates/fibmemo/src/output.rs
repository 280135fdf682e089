//! Output formatting and file writing.

use std::io::{self, Write};

use num_bigint::BigUint;

/// Format a `BigUint` for display, truncating long values unless verbose.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Write the decimal value to a file.
pub fn write_to_file(path: &str, value: &BigUint) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{value}")?;
    Ok(())
}
