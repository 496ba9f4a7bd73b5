//! Cumulative entry paths and ignore-path normalization

/// Append an entry name to its parent's cumulative path.
///
/// The root has an empty parent, so its path is its own name (usually the
/// absolute directory ncdu was pointed at). Trailing separators on the
/// name are dropped, so a root named `/data/` is addressed as `/data`.
#[must_use]
pub fn join(parent: &str, name: &str) -> String {
    let trimmed = name.trim_end_matches('/');
    let name = if trimmed.is_empty() && !name.is_empty() {
        "/"
    } else {
        trimmed
    };
    if parent.is_empty() {
        name.to_string()
    } else if parent.ends_with('/') {
        format!("{parent}{name}")
    } else {
        format!("{parent}/{name}")
    }
}

/// Normalize a user-supplied path so it can be compared with cumulative
/// entry paths: repeated separators collapse, `.` segments vanish, `..`
/// is resolved lexically and no trailing separator is left (except for `/`).
#[must_use]
pub fn normalize_ignore_path(raw: &str) -> String {
    let absolute = raw.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push(segment);
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
