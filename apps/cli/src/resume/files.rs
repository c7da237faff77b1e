//! Data-folder listing for the interactive resume picker.

use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Lists the PDF files directly under `dir`, sorted by file name so menu
/// numbering stays stable across runs.
pub fn list_resume_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_pdf(path))
        .collect();
    files.sort();
    Ok(files)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_lists_only_pdfs_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b_resume.pdf", "a_resume.PDF", "notes.txt", "cv.docx"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = list_resume_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a_resume.PDF", "b_resume.pdf"]);
    }

    #[test]
    fn test_empty_dir_is_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_resume_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let err = list_resume_files(Path::new("no/such/dir")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("archive.pdf")).unwrap();
        File::create(dir.path().join("real.pdf")).unwrap();

        let files = list_resume_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.pdf"));
    }
}
