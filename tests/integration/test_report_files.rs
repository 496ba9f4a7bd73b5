//! Integration test for export discovery

#[cfg(test)]
mod tests {
    use crate::fixtures::{scan_after, scan_before, write_document};
    use ncdiff::io::report_file::{find_report_files, first_and_last};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_files_are_taken_as_given() {
        let temp_dir = TempDir::new().unwrap();
        let before = write_document(temp_dir.path(), "z-before.json", scan_before()).unwrap();
        let after = write_document(temp_dir.path(), "a-after.json", scan_after()).unwrap();

        let files = find_report_files(&[&before, &after]).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("z-before.json"));
        assert!(files[1].ends_with("a-after.json"));
    }

    #[test]
    fn test_directory_is_searched_recursively_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_document(root, "2024-03.json", scan_after()).unwrap();
        write_document(root, "2024-01.json", scan_before()).unwrap();
        write_document(root, "nested/2024-02.json", scan_before()).unwrap();
        fs::write(root.join("notes.txt"), b"not an export").unwrap();

        let files = find_report_files(&[root]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["2024-01.json", "2024-03.json", "2024-02.json"]);

        let (first, last) = first_and_last(&files).unwrap();
        assert!(first.ends_with("2024-01.json"));
        assert!(last.ends_with("2024-02.json"));
    }

    #[test]
    fn test_directory_pair_diffs_first_against_last() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_document(root, "1.json", scan_before()).unwrap();
        write_document(root, "2.json", scan_before()).unwrap();
        write_document(root, "3.json", scan_after()).unwrap();

        let files = find_report_files(&[root]).unwrap();
        let (first, last) = first_and_last(&files).unwrap();
        let tree = ncdiff::diff_files(first, last, &ncdiff::ParseOptions::default()).unwrap();

        assert!(tree.left_path.ends_with("1.json"));
        assert!(tree.right_path.ends_with("3.json"));
        assert_eq!(tree.summary().added, 1);
    }
}
