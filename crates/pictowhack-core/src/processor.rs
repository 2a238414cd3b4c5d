use std::fs;
use std::path::Path;

use crate::classifier::PictogramCallback;
use crate::error::{PictowhackError, Result};
use crate::text::{decode_permissive, strip_pictograms};

/// Outcome of processing a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileOutcome {
    /// Whether pictograms were found (and written back unless dry run)
    pub modified: bool,
    pub original_chars: usize,
    pub cleaned_chars: usize,
}

impl FileOutcome {
    /// Number of characters removed
    pub fn removed(&self) -> usize {
        self.original_chars - self.cleaned_chars
    }
}

/// Strip pictograms from one file.
///
/// In dry-run mode the file is never written. Files without pictograms are
/// left untouched either way.
pub fn process_file(
    path: &Path,
    dry_run: bool,
    on_pictogram: PictogramCallback<'_>,
) -> Result<FileOutcome> {
    let bytes = fs::read(path).map_err(|e| PictowhackError::file_io(path, e))?;
    let content = decode_permissive(&bytes);

    let original_chars = content.chars().count();
    let cleaned = strip_pictograms(&content, on_pictogram);
    let cleaned_chars = cleaned.chars().count();

    if original_chars == cleaned_chars {
        return Ok(FileOutcome {
            modified: false,
            original_chars,
            cleaned_chars,
        });
    }

    if !dry_run {
        fs::write(path, cleaned.as_bytes()).map_err(|e| PictowhackError::file_io(path, e))?;
    }

    Ok(FileOutcome {
        modified: true,
        original_chars,
        cleaned_chars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_process_removes_pictograms() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.md", "Done \u{2705} and shipped \u{1F680}\n".as_bytes());

        let outcome = process_file(&path, false, None).unwrap();

        assert!(outcome.modified);
        assert_eq!(outcome.removed(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Done  and shipped \n");
    }

    #[test]
    fn test_process_unchanged_file() {
        let dir = TempDir::new().unwrap();
        let content = "plain text \u{2190} with an arrow\n";
        let path = write_file(&dir, "plain.txt", content.as_bytes());

        let outcome = process_file(&path, false, None).unwrap();

        let n = content.chars().count();
        assert_eq!(
            outcome,
            FileOutcome {
                modified: false,
                original_chars: n,
                cleaned_chars: n
            }
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let content = "keep \u{00A9} me\n";
        let path = write_file(&dir, "legal.txt", content.as_bytes());
        let mtime_before = fs::metadata(&path).unwrap().modified().unwrap();

        let outcome = process_file(&path, true, None).unwrap();

        assert!(outcome.modified);
        assert_eq!(outcome.removed(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), mtime_before);
    }

    #[test]
    fn test_dry_run_predicts_real_run() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "mixed.txt",
            "\u{263A}\u{2600}\u{2500}\u{1F3FB}\u{00B0}abc".as_bytes(),
        );

        let predicted = process_file(&path, true, None).unwrap();
        let actual = process_file(&path, false, None).unwrap();

        assert_eq!(predicted, actual);
        assert_eq!(actual.removed(), 3);
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "twice.txt", "x\u{1F600}y\u{2B50}z".as_bytes());

        assert!(process_file(&path, false, None).unwrap().modified);
        let second = process_file(&path, false, None).unwrap();
        assert!(!second.modified);
        assert_eq!(second.removed(), 0);
    }

    #[test]
    fn test_invalid_utf8_dropped_only_when_rewritten() {
        let dir = TempDir::new().unwrap();

        let untouched = write_file(&dir, "bin.dat", b"abc\xFFdef");
        let outcome = process_file(&untouched, false, None).unwrap();
        assert!(!outcome.modified);
        assert_eq!(outcome.original_chars, 6);
        assert_eq!(fs::read(&untouched).unwrap(), b"abc\xFFdef");

        let rewritten = write_file(&dir, "mixed.dat", b"abc\xFF\xC2\xA9def");
        let outcome = process_file(&rewritten, false, None).unwrap();
        assert!(outcome.modified);
        assert_eq!(fs::read(&rewritten).unwrap(), b"abcdef");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.txt");

        let err = process_file(&path, false, None).unwrap_err();
        assert!(matches!(err, PictowhackError::FileIo { .. }));
        assert!(err.to_string().contains("gone.txt"));
    }
}
