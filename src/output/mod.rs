// Output formatting — the answer file and the terminal report.

pub mod terminal;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Format a percentage the way the answer file expects it: bare number,
/// exactly two decimals, no trailing newline.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.2}")
}

/// Write the similarity percentage to the answer file, creating parent
/// directories as needed.
pub fn write_result(path: &Path, percent: f64) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
    }
    fs::write(path, format_percent(percent))
        .with_context(|| format!("Failed to write result file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_bare_two_decimal_number() {
        assert_eq!(format_percent(62.99), "62.99");
        assert_eq!(format_percent(100.0), "100.00");
        assert_eq!(format_percent(0.0), "0.00");
        assert_eq!(format_percent(99.5), "99.50");
    }

    #[test]
    fn writes_result_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nested/result.txt");
        write_result(&path, 87.33).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "87.33");
    }
}
