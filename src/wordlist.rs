use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one entry per line, stopping at the first empty line
pub fn read_wordlist(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open word list: {}", path.display()))?;

    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("Failed to read word list: {}", path.display()))?;
        if line.is_empty() {
            break;
        }
        entries.push(line);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_list(contents: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_trailing_newline_is_dropped() {
        let (_dir, path) = write_list("carlos\nadmin\nwiener\n");
        assert_eq!(read_wordlist(&path).unwrap(), vec!["carlos", "admin", "wiener"]);
    }

    #[test]
    fn test_last_line_without_newline_is_kept() {
        let (_dir, path) = write_list("123456\npassword");
        assert_eq!(read_wordlist(&path).unwrap(), vec!["123456", "password"]);
    }

    #[test]
    fn test_stops_at_first_blank_line() {
        let (_dir, path) = write_list("a\nb\n\nc\n");
        assert_eq!(read_wordlist(&path).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_crlf_terminators_are_stripped() {
        let (_dir, path) = write_list("a\r\nb\r\n");
        assert_eq!(read_wordlist(&path).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = read_wordlist(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open word list"));
    }
}
