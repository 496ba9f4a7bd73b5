//! Integration test for error handling

#[cfg(test)]
mod tests {
    use crate::fixtures::{scan_before, write_document};
    use ncdiff::io::report_file::{find_report_files, first_and_last};
    use ncdiff::{Error, FormatError, ParseOptions};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ncdiff::load_report("/definitely/does/not/exist/xyz123.json", &ParseOptions::default());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_file_names_the_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, b"[1, 1, {}]").unwrap();

        let err = ncdiff::load_report(&path, &ParseOptions::default()).unwrap_err();

        match &err {
            Error::Format { path: failed, source } => {
                assert!(failed.ends_with("broken.json"));
                assert!(matches!(source, FormatError::TopLevelArity { found: 3 }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_one_bad_side_fails_the_pair() {
        let temp_dir = TempDir::new().unwrap();
        let good = write_document(temp_dir.path(), "good.json", scan_before()).unwrap();
        let bad = temp_dir.path().join("bad.json");
        fs::write(&bad, b"not json").unwrap();

        let result = ncdiff::diff_files(&good, &bad, &ParseOptions::default());
        assert!(matches!(result, Err(Error::Format { .. })));
    }

    #[test]
    fn test_excluded_root_fails_the_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_document(temp_dir.path(), "scan.json", scan_before()).unwrap();
        let opts = ParseOptions::with_ignore_paths(["/root/"]);

        let err = ncdiff::load_report(&path, &opts).unwrap_err();
        assert!(matches!(
            err,
            Error::Format {
                source: FormatError::RootExcluded { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_too_few_exports() {
        let files = vec![PathBuf::from("only.json")];
        let err = first_and_last(&files).unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_missing_input_path() {
        let result = find_report_files(&["/definitely/does/not/exist/xyz123"]);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
