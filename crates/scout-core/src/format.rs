const UNITS: &[&str] = &["KB", "MB", "GB", "TB", "PB", "EB"];

/// Binary-scaled size with one decimal place, e.g. `1.5 KB`.
pub fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    // compare the displayed value so 1023.96 KB shows as 1.0 MB
    while round_tenths(value) >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(1023), "1023 B");
        assert_eq!(human_size(1024), "1.0 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.0 GB");
        assert_eq!(human_size(u64::MAX), "16.0 EB");
    }

    #[test]
    fn test_human_size_rounds_into_next_unit() {
        assert_eq!(human_size(1_048_575), "1.0 MB");
        assert_eq!(human_size(1_048_524), "1023.9 KB");
        assert_eq!(human_size(1024 * 1024 * 1024 - 1), "1.0 GB");
    }
}
