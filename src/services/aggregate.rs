//! Bottom-up aggregation of parsed entries into report nodes

use crate::models::{Aggregation, DirEntry, Entry, ReportNode};
use crate::services::parse::{RED_ZONE, STACK_GROWTH};

/// Build the report node for `entry` and its whole subtree.
///
/// Children are aggregated first; a directory then sums them. Every child
/// contributes itself plus its own descendants to `files`, and directory
/// children additionally bump `dirs`. Sizes include the node's own.
#[must_use]
pub fn build(entry: Entry, depth: u32) -> ReportNode {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || build_node(entry, depth))
}

fn build_node(entry: Entry, depth: u32) -> ReportNode {
    let kind = entry.kind();
    match entry {
        Entry::File(file) => ReportNode {
            aggregation: Aggregation {
                asize: file.asize,
                dsize: file.dsize,
                ..Aggregation::default()
            },
            entry: file,
            kind,
            depth,
            children: Vec::new(),
        },
        Entry::Dir(DirEntry { head, children }) => {
            let children: Vec<ReportNode> = children
                .into_iter()
                .map(|child| build(child, depth + 1))
                .collect();

            let mut aggregation = Aggregation {
                children: children.len() as u64,
                asize: head.asize,
                dsize: head.dsize,
                ..Aggregation::default()
            };
            for child in &children {
                aggregation.files = aggregation
                    .files
                    .saturating_add(child.aggregation.files + 1);
                aggregation.dirs = aggregation
                    .dirs
                    .saturating_add(child.aggregation.dirs + u64::from(child.is_dir()));
                aggregation.asize = aggregation.asize.saturating_add(child.aggregation.asize);
                aggregation.dsize = aggregation.dsize.saturating_add(child.aggregation.dsize);
            }

            ReportNode {
                entry: head,
                kind,
                depth,
                aggregation,
                children,
            }
        }
    }
}
