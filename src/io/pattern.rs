//! Loading rectangular symbol patterns from text

use crate::io::error::{LatticeError, Result, WithPath};
use std::fs;
use std::path::Path;

/// Split text into pattern rows
///
/// Carriage returns are stripped and trailing blank lines dropped, so files
/// saved on any platform with or without a final newline load the same way.
///
/// # Errors
///
/// Returns an error if:
/// - The text holds no rows
/// - A row's length differs from the first row's length
pub fn parse_pattern(text: &str) -> Result<Vec<String>> {
    let mut rows: Vec<String> = text
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();

    while rows.last().is_some_and(|row| row.trim().is_empty()) {
        rows.pop();
    }

    let expected = rows
        .first()
        .map(|row| row.chars().count())
        .ok_or(LatticeError::EmptyPattern)?;

    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != expected {
            return Err(LatticeError::RaggedPattern {
                row,
                expected,
                found,
            });
        }
    }

    Ok(rows)
}

/// Read and split a pattern file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not a
/// rectangular pattern
pub fn read_pattern(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_path(path, "read pattern")?;
    parse_pattern(&text)
}
