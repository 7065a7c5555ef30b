const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Humanizes a byte count for display next to a file name.
pub fn format_size(size: u64) -> String {
    let mut size = size as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
