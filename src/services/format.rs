//! Human-readable sizes and signed size changes
//!
//! All sizes are byte counts; floating point only appears here, at the
//! display boundary.

/// Format a byte count with binary units (KB = 1024).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    const TB: f64 = GB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else if b < TB {
        format!("{:.2} GB", b / GB)
    } else {
        format!("{:.2} TB", b / TB)
    }
}

/// Format a size change with an explicit sign; zero has none.
#[must_use]
pub fn format_delta(delta: i128) -> String {
    let magnitude = u64::try_from(delta.unsigned_abs()).unwrap_or(u64::MAX);
    match delta.signum() {
        1 => format!("+{}", format_size(magnitude)),
        -1 => format!("-{}", format_size(magnitude)),
        _ => format_size(0),
    }
}
