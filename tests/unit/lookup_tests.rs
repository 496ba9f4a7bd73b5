//! Unit tests for diff tree path lookup

#[cfg(test)]
mod tests {
    use crate::fixtures::{dir, file, report, scan_after, scan_before};
    use ncdiff::services::lookup::children_at;
    use ncdiff::{DiffTree, LookupError, ParseOptions, Presence, diff_reports};

    fn sample_tree() -> DiffTree {
        let opts = ParseOptions::default();
        diff_reports(&report("l", scan_before(), &opts), &report("r", scan_after(), &opts))
    }

    #[test]
    fn test_children_of_single_child_dir() {
        let opts = ParseOptions::default();
        let root = dir(file("a", 0, 0), vec![file("x", 1, 1)]);
        let rep = report("same", root, &opts);
        let tree = diff_reports(&rep, &rep);

        let children = tree.children_at(&["a"]).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name(), "x");
    }

    #[test]
    fn test_missing_segment_is_reported() {
        let opts = ParseOptions::default();
        let rep = report("same", dir(file("a", 0, 0), vec![file("x", 1, 1)]), &opts);
        let tree = diff_reports(&rep, &rep);

        let err = tree.children_at(&["a", "missing"]).unwrap_err();
        assert_eq!(
            err,
            LookupError {
                segment: "missing".to_string()
            }
        );
        assert_eq!(err.to_string(), "no such file: `missing`");
    }

    #[test]
    fn test_empty_path_returns_roots() {
        let tree = sample_tree();
        let roots = tree.children_at::<&str>(&[]).unwrap();

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name(), "/root");
    }

    #[test]
    fn test_descends_through_one_sided_nodes() {
        let tree = sample_tree();

        let deep = tree.children_at(&["/root", "sub", "deep"]).unwrap();
        assert_eq!(deep.len(), 1);
        assert_eq!(deep[0].name(), "y.bin");
        assert_eq!(deep[0].presence(), Presence::LeftOnly);

        let leaf = children_at(&tree.roots, &["/root", "c.tmp"]).unwrap();
        assert!(leaf.is_empty());
    }

    #[test]
    fn test_lookup_accepts_owned_segments() {
        let tree = sample_tree();
        let path = vec!["/root".to_string(), "sub".to_string()];

        let names: Vec<&str> = tree
            .children_at(&path)
            .unwrap()
            .iter()
            .map(|n| n.name())
            .collect();
        assert_eq!(names, vec!["x.bin", "deep"]);
    }

    #[test]
    fn test_cores_at_flattens_one_level() {
        let tree = sample_tree();
        let cores = tree.cores_at(&["/root"]).unwrap();

        let names: Vec<&str> = cores.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "sub", "b.log", "c.tmp"]);

        let sub = &cores[1];
        assert!(sub.is_dir);
        assert_eq!(sub.level, 1);
        assert_eq!(sub.children, 2);
        assert_eq!(sub.aggr0.unwrap().files, 3);
        assert_eq!(sub.aggr1.unwrap().files, 1);

        let removed = &cores[2];
        assert_eq!(removed.presence, Presence::LeftOnly);
        assert!(removed.entry1.is_none());
        assert!(removed.aggr1.is_none());
        assert_eq!(removed.dsize_delta(), -4096);
    }

    #[test]
    fn test_cores_at_propagates_lookup_error() {
        let tree = sample_tree();
        let err = tree.cores_at(&["nope"]).unwrap_err();
        assert_eq!(err.segment, "nope");
    }
}
