//! Structural diff of two report trees, aligned by name at every level

use std::collections::HashMap;

use crate::models::{DiffNode, DiffTree, Report, ReportNode};
use crate::services::parse::{RED_ZONE, STACK_GROWTH};

/// Diff the root lists of two reports.
#[must_use]
pub fn diff_reports(left: &Report, right: &Report) -> DiffTree {
    DiffTree {
        left_path: left.path.clone(),
        right_path: right.path.clone(),
        roots: diff_siblings(&left.roots, &right.roots),
    }
}

/// Align two sibling lists by exact name.
///
/// Output order is every left node in left order (matched or left-only),
/// followed by the unmatched right nodes in right order.
#[must_use]
pub fn diff_siblings(left: &[ReportNode], right: &[ReportNode]) -> Vec<DiffNode> {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, || align(left, right))
}

fn align(left: &[ReportNode], right: &[ReportNode]) -> Vec<DiffNode> {
    let mut right_by_name: HashMap<&str, usize> = HashMap::with_capacity(right.len());
    for (index, node) in right.iter().enumerate() {
        right_by_name.entry(node.name()).or_insert(index);
    }
    let mut matched = vec![false; right.len()];

    let mut nodes = Vec::with_capacity(left.len().max(right.len()));
    for node in left {
        match right_by_name.remove(node.name()) {
            Some(index) => {
                matched[index] = true;
                nodes.push(both(node, &right[index]));
            }
            None => nodes.push(left_only(node)),
        }
    }
    nodes.extend(
        right
            .iter()
            .zip(&matched)
            .filter(|(_, used)| !**used)
            .map(|(node, _)| right_only(node)),
    );
    nodes
}

fn both(left: &ReportNode, right: &ReportNode) -> DiffNode {
    DiffNode::both(
        left.into(),
        right.into(),
        left.depth,
        diff_siblings(&left.children, &right.children),
    )
}

fn left_only(node: &ReportNode) -> DiffNode {
    DiffNode::left_only(node.into(), node.depth, diff_siblings(&node.children, &[]))
}

fn right_only(node: &ReportNode) -> DiffNode {
    DiffNode::right_only(node.into(), node.depth, diff_siblings(&[], &node.children))
}
