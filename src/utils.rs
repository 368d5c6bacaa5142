//! Utility functions for log formatting and output file checks.

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes, never inside a multi-byte
/// character, and get an ellipsis plus the number of bytes dropped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Ensure the directory that will hold `output` exists and is writable.
///
/// Creates missing parent directories, then writes and removes a probe file
/// next to the output. Crawling takes minutes, so a bad destination should
/// fail before the first request rather than after the last.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(output = %output.display()))]
pub async fn ensure_writable_parent(output: &Path) -> Result<(), Box<dyn Error>> {
    let dir = output_dir(output);
    fs::create_dir_all(dir).await?;

    let probe_path = dir.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!(dir = %dir.display(), "Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

/// Directory an output file lands in; bare file names resolve to `.`.
fn output_dir(output: &Path) -> &Path {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // "é" is two bytes; cutting at 2 would split the second one
        let result = truncate_for_log("aéé", 2);
        assert_eq!(result, "a…(+4 bytes)");
    }

    #[tokio::test]
    async fn test_ensure_writable_parent_creates_missing_dirs() {
        let dir = std::env::temp_dir().join(format!("bbc_news_out_{}", std::process::id()));
        let output = dir.join("nested").join("news.csv");

        ensure_writable_parent(&output).await.unwrap();

        assert!(output.parent().unwrap().is_dir());
        assert!(!output.exists());
        let _ = stdfs::remove_dir_all(&dir);
    }

    #[test]
    fn test_output_dir_of_bare_file_name_is_current_dir() {
        assert_eq!(output_dir(Path::new("news.csv")), Path::new("."));
        assert_eq!(output_dir(Path::new("data/news.csv")), Path::new("data"));
    }

    #[tokio::test]
    async fn test_ensure_writable_parent_accepts_existing_dir() {
        let dir = std::env::temp_dir().join(format!("bbc_news_existing_{}", std::process::id()));
        stdfs::create_dir_all(&dir).unwrap();
        let output = dir.join("news.csv");

        ensure_writable_parent(&output).await.unwrap();

        assert!(!output.exists());
        assert!(!dir.join("..__probe_write__").exists());
        let _ = stdfs::remove_dir_all(&dir);
    }
}
