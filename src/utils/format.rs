/// Format a page goal as a decimal string, trimming a trailing ".0"
pub fn format_pages(pages: f64) -> String {
    if pages == pages.floor() {
        format!("{}", pages as i64)
    } else {
        format!("{:.1}", pages)
    }
}

/// Countdown text for the days left until the target day
pub fn format_countdown(days_left: u32) -> String {
    match days_left {
        0 => "target day reached".to_string(),
        1 => "1 day left".to_string(),
        n => format!("{} days left", n),
    }
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}
