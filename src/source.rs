use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the URL list: one URL per line, blank lines ignored, order preserved.
pub fn read_urls(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("File {} not found", path.display()))?;

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_lines_and_skips_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        fs::write(
            &path,
            "https://a.example/page\n\n  https://b.example/page  \n\t\nhttps://c.example/\n",
        )
        .unwrap();

        let urls = read_urls(&path).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://a.example/page",
                "https://b.example/page",
                "https://c.example/",
            ]
        );
    }

    #[test]
    fn preserves_source_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        fs::write(&path, "https://z.example/\nhttps://a.example/\n").unwrap();

        let urls = read_urls(&path).unwrap();
        assert_eq!(urls[0], "https://z.example/");
        assert_eq!(urls[1], "https://a.example/");
    }

    #[test]
    fn missing_file_is_an_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = read_urls(&path).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn empty_file_yields_no_urls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.txt");
        fs::write(&path, "").unwrap();

        assert!(read_urls(&path).unwrap().is_empty());
    }
}
