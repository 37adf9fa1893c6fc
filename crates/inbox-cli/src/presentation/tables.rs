//! Table formatting utilities for CLI output.

use inbox_core::NotificationRecord;

/// Message shown when there is nothing to list.
pub const EMPTY_STATE: &str = "No notifications available.";

/// Message shown when the unread filter hides every notification.
pub const NO_UNREAD: &str = "No unread notifications.";

/// Truncates a string to a maximum number of characters, adding "..." if
/// needed.
///
/// # Examples
///
/// ```rust
/// use inbox_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Render notifications as a table, or the empty-state message.
pub fn render_notifications(records: &[NotificationRecord], unread_only: bool) -> String {
    if records.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let visible: Vec<&NotificationRecord> = records
        .iter()
        .filter(|r| !unread_only || !r.is_read)
        .collect();

    if visible.is_empty() {
        return NO_UNREAD.to_string();
    }

    let mut out = format!(
        "{:<6} {:<4} {:<24} {:<26} Message\n",
        "ID", "", "Title", "Time"
    );
    out.push_str(&separator(100));
    out.push('\n');

    for record in visible {
        let marker = if record.is_read { "" } else { "*" };
        out.push_str(&format!(
            "{:<6} {:<4} {:<24} {:<26} {}\n",
            record.id,
            marker,
            truncate_string(&record.title, 23),
            truncate_string(&record.timestamp, 25),
            truncate_string(&record.message, 40),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, title: &str, is_read: bool) -> NotificationRecord {
        NotificationRecord {
            id,
            title: title.to_string(),
            message: "body".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            is_read,
        }
    }

    #[test]
    fn test_truncate_string_no_truncation_needed() {
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("ありがとうございます", 6), "ありが...");
    }

    #[test]
    fn test_render_empty_state() {
        assert_eq!(render_notifications(&[], false), EMPTY_STATE);
    }

    #[test]
    fn test_render_marks_unread() {
        let out = render_notifications(&[record(1, "Hello", false), record(2, "Bye", true)], false);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("1"));
        assert!(lines[2].contains('*'));
        assert!(lines[3].starts_with("2"));
        assert!(!lines[3].contains('*'));
    }

    #[test]
    fn test_render_empty_with_unread_filter() {
        assert_eq!(render_notifications(&[], true), EMPTY_STATE);
    }

    #[test]
    fn test_render_unread_only() {
        let records = [record(1, "Hello", true), record(2, "Bye", true)];
        assert_eq!(render_notifications(&records, true), NO_UNREAD);

        let records = [record(1, "Hello", true), record(2, "Bye", false)];
        let out = render_notifications(&records, true);
        assert!(out.contains("Bye"));
        assert!(!out.contains("Hello"));
    }
}
