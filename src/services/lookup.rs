//! Path lookup into a diff tree for lazy, level-by-level browsing

use crate::models::DiffNode;

/// A path segment matched none of the candidates at its level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no such file: `{segment}`")]
pub struct LookupError {
    pub segment: String,
}

/// Walk `path` down from `roots` and return the immediate children found there.
///
/// Each segment is compared with [`DiffNode::name`]. An empty path returns
/// `roots` itself.
pub fn children_at<'a, S: AsRef<str>>(
    roots: &'a [DiffNode],
    path: &[S],
) -> Result<&'a [DiffNode], LookupError> {
    let mut current = roots;
    for segment in path {
        let segment = segment.as_ref();
        let node = current
            .iter()
            .find(|node| node.name() == segment)
            .ok_or_else(|| LookupError {
                segment: segment.to_string(),
            })?;
        current = node.children();
    }
    Ok(current)
}
