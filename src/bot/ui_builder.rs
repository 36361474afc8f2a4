//! UI Builder module for creating keyboards and formatting replies

use crate::db::{LogRow, UserRow};
use teloxide::types::{KeyboardButton, KeyboardMarkup};
use teloxide::utils::html::escape;

/// Mask rendered in place of any stored credential
pub const PASSWORD_MASK: &str = "●●●●●●";

/// Build the reply keyboard from resolved labels, one button per row
pub fn menu_keyboard(labels: &[String]) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = labels
        .iter()
        .map(|label| vec![KeyboardButton::new(label.clone())])
        .collect();

    let mut markup = KeyboardMarkup::new(rows);
    markup.resize_keyboard = true;
    markup
}

/// Format the users report. Credentials are never rendered, only the
/// fixed mask; a missing email renders as a dash.
pub fn format_users(rows: &[UserRow]) -> String {
    let blocks: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let email = row.email.as_deref().unwrap_or("—");
            format!("{}. 👤 {}\n📧 {}\n🔒 {}", i + 1, row.name, email, PASSWORD_MASK)
        })
        .collect();

    blocks.join("\n\n")
}

/// Format the recent-logs report as HTML lines, newest first. Usernames
/// and log text are sender-controlled and must be escaped, or a stray
/// `<`/`&` in a logged message would make Telegram reject the whole send.
pub fn format_logs(rows: &[LogRow]) -> String {
    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            format!(
                "<b>{}</b> [{}]: {}",
                escape(&row.username),
                row.dtime.format("%Y-%m-%d %H:%M"),
                escape(&row.log)
            )
        })
        .collect();

    lines.join("\n\n")
}

/// Format the echo reply for text that matched no label or command.
/// Both fields are sender-controlled; escaping keeps the reply deliverable
/// for any valid message text.
pub fn format_echo(display_name: &str, text: &str) -> String {
    format!("<b>{}</b> wrote: {}", escape(display_name), escape(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_menu_keyboard_one_label_per_row() {
        let labels = vec!["Cats".to_string(), "Info".to_string()];
        let markup = menu_keyboard(&labels);

        assert_eq!(markup.keyboard.len(), 2);
        assert_eq!(markup.keyboard[0].len(), 1);
        assert_eq!(markup.keyboard[0][0].text, "Cats");
        assert_eq!(markup.keyboard[1][0].text, "Info");
        assert!(markup.resize_keyboard);
    }

    #[test]
    fn test_format_users_masks_credentials() {
        let rows = vec![
            UserRow {
                name: "alice".to_string(),
                email: Some("alice@example.com".to_string()),
                password: "hunter2".to_string(),
            },
            UserRow {
                name: "bob".to_string(),
                email: None,
                password: "s3cret".to_string(),
            },
        ];

        let report = format_users(&rows);
        assert!(report.contains("1. 👤 alice"));
        assert!(report.contains("alice@example.com"));
        assert!(report.contains("2. 👤 bob"));
        assert!(report.contains("📧 —"));
        assert!(report.contains(PASSWORD_MASK));
        assert!(!report.contains("hunter2"));
        assert!(!report.contains("s3cret"));
    }

    #[test]
    fn test_format_logs() {
        let rows = vec![LogRow {
            username: "alice".to_string(),
            log: "/cats".to_string(),
            dtime: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(9, 26, 53)
                .unwrap(),
        }];

        let report = format_logs(&rows);
        assert_eq!(report, "<b>alice</b> [2025-03-14 09:26]: /cats");
    }

    #[test]
    fn test_format_echo() {
        assert_eq!(format_echo("alice", "Dogs"), "<b>alice</b> wrote: Dogs");
    }

    #[test]
    fn test_format_echo_escapes_html_markup() {
        let reply = format_echo("Ann <i>", "a <b> c & d");
        assert_eq!(
            reply,
            "<b>Ann &lt;i&gt;</b> wrote: a &lt;b&gt; c &amp; d"
        );
        // Only the fixed wrapper tags survive as markup
        assert!(!reply.contains("<i>"));
        assert!(!reply.contains("<b> c"));
    }

    #[test]
    fn test_format_logs_escapes_html_markup() {
        let rows = vec![LogRow {
            username: "<script>".to_string(),
            log: "a < b && c > d".to_string(),
            dtime: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }];

        let report = format_logs(&rows);
        assert_eq!(
            report,
            "<b>&lt;script&gt;</b> [2025-03-14 09:00]: a &lt; b &amp;&amp; c &gt; d"
        );
    }
}
