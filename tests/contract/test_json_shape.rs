//! Contract test for the presentation-layer record and CLI output shape

use crate::fixtures::{report, scan_after, scan_before};
use ncdiff::cli::output::{format_json, format_text};
use ncdiff::{DiffTree, ParseOptions, diff_reports};

fn sample_tree() -> DiffTree {
    let opts = ParseOptions::default();
    diff_reports(
        &report("before.json", scan_before(), &opts),
        &report("after.json", scan_after(), &opts),
    )
}

#[test]
fn test_core_record_fields() {
    let tree = sample_tree();
    let cores = tree.cores_at(&["/root"]).unwrap();
    let json = serde_json::to_value(&cores).unwrap();

    let common = &json[0];
    for field in ["name", "is_dir", "presence", "level", "entry0", "entry1", "aggr0", "aggr1", "children"] {
        assert!(common.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(common["presence"], "both");
    assert_eq!(common["entry0"]["name"], "a.txt");
    assert_eq!(common["entry1"]["asize"], 9000);
    assert_eq!(common["aggr0"]["dsize"], 4096);
    assert!(common.get("children_nodes").is_none());

    let removed = &json[2];
    assert_eq!(removed["presence"], "left_only");
    assert!(removed["entry1"].is_null());
    assert!(removed["aggr1"].is_null());

    let added = &json[3];
    assert_eq!(added["presence"], "right_only");
    assert!(added["entry0"].is_null());
}

#[test]
fn test_json_output_fields() {
    let tree = sample_tree();
    let path = vec!["/root".to_string()];
    let entries = tree.cores_at(&path).unwrap();

    let output: serde_json::Value =
        serde_json::from_str(&format_json(&tree, &path, &entries)).unwrap();

    assert_eq!(output["left"], "before.json");
    assert_eq!(output["right"], "after.json");
    assert_eq!(output["path"][0], "/root");
    assert_eq!(output["summary"]["added"], 1);
    assert_eq!(output["summary"]["removed"], 3);
    assert_eq!(output["summary"]["common"], 4);
    assert_eq!(output["entries"].as_array().unwrap().len(), 4);
}

#[test]
fn test_text_output_markers() {
    let tree = sample_tree();
    let path = vec!["/root".to_string()];
    let entries = tree.cores_at(&path).unwrap();

    let text = format_text(&tree, &path, &entries, false);

    assert!(text.starts_with("before.json -> after.json\n"));
    assert!(text.contains("/root (1 added, 3 removed, 4 common)"));
    assert!(text.lines().any(|l| l.starts_with("+ c.tmp")));
    assert!(text.lines().any(|l| l.starts_with("- b.log")));
    assert!(text.lines().any(|l| l.starts_with("  sub/")));
    assert!(text.contains("+8.0 KB"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_text_output_empty_listing() {
    let tree = sample_tree();
    let path = vec!["/root".to_string(), "a.txt".to_string()];
    let entries = tree.cores_at(&path).unwrap();

    let text = format_text(&tree, &path, &entries, true);
    assert!(text.contains("No entries found."));
}
