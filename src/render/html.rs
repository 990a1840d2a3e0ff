//! Shared HTML building blocks for the server-rendered pages.
//!
//! Every page is assembled by pure functions: given structured data they
//! return a complete document as a `String`. Styles and scripts are static
//! string constants owned by the page modules; only data interpolations go
//! through [`escape_html`].

use crate::entities::{ComplaintModel, ComplaintStatus};
use sea_orm::prelude::DateTimeUtc;

/// Escapes text for safe interpolation into HTML bodies and attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Chinese label shown for a status badge.
#[must_use]
pub const fn status_label(status: ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::Pending => "待处理",
        ComplaintStatus::Processing => "处理中",
        ComplaintStatus::Resolved => "已解决",
    }
}

/// CSS class applied to a status badge.
#[must_use]
pub const fn status_css_class(status: ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::Pending => "status-pending",
        ComplaintStatus::Processing => "status-processing",
        ComplaintStatus::Resolved => "status-resolved",
    }
}

/// Formats a submission timestamp for the dashboard table.
#[must_use]
pub fn format_timestamp(timestamp: &DateTimeUtc) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Counts shown on the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// All listed complaints
    pub total: usize,
    /// Complaints nobody has touched yet
    pub pending: usize,
    /// Complaints currently being handled
    pub processing: usize,
    /// Complaints marked done
    pub resolved: usize,
}

/// Tallies stats over the complaints the dashboard is about to render.
#[must_use]
pub fn dashboard_stats(complaints: &[ComplaintModel]) -> DashboardStats {
    let mut stats = DashboardStats {
        total: complaints.len(),
        ..DashboardStats::default()
    };
    for complaint in complaints {
        match complaint.status {
            ComplaintStatus::Pending => stats.pending += 1,
            ComplaintStatus::Processing => stats.processing += 1,
            ComplaintStatus::Resolved => stats.resolved += 1,
        }
    }
    stats
}

/// Wraps a page body in the shared document skeleton.
///
/// `style` and `script` are static constants, never user data, so they are
/// inserted verbatim; `body` is built by the caller with all interpolations
/// already escaped.
#[must_use]
pub fn page_shell(title: &str, style: &'static str, body: &str, script: &'static str) -> String {
    let mut page = String::with_capacity(
        style.len() + body.len() + script.len() + title.len() + 256,
    );
    page.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n");
    page.push_str("<meta charset=\"UTF-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    page.push_str("<title>");
    page.push_str(&escape_html(title));
    page.push_str("</title>\n<style>");
    page.push_str(style);
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str(body);
    if !script.is_empty() {
        page.push_str("\n<script>");
        page.push_str(script);
        page.push_str("</script>\n");
    }
    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::ImageMetaList;

    fn complaint_with_status(status: ComplaintStatus) -> ComplaintModel {
        ComplaintModel {
            id: "id".to_string(),
            main_category: "存在侵权行为".to_string(),
            sub_category: String::new(),
            contact: "someone@example.com".to_string(),
            content: "内容".to_string(),
            images: ImageMetaList::default(),
            status,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_escape_html_neutralizes_markup() {
        let escaped = escape_html("<script>alert(\"x\") & 'y'</script>");
        assert_eq!(
            escaped,
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("存在欺诈骗钱行为"), "存在欺诈骗钱行为");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(ComplaintStatus::Pending), "待处理");
        assert_eq!(status_label(ComplaintStatus::Processing), "处理中");
        assert_eq!(status_label(ComplaintStatus::Resolved), "已解决");
    }

    #[test]
    fn test_dashboard_stats_tally() {
        let complaints = vec![
            complaint_with_status(ComplaintStatus::Pending),
            complaint_with_status(ComplaintStatus::Pending),
            complaint_with_status(ComplaintStatus::Processing),
            complaint_with_status(ComplaintStatus::Resolved),
        ];

        let stats = dashboard_stats(&complaints);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.processing, 1);
        assert_eq!(stats.resolved, 1);
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let stats = dashboard_stats(&[]);
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_page_shell_assembles_document() {
        let page = page_shell("标题", "body { margin: 0; }", "<p>hi</p>", "console.log(1);");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>标题</title>"));
        assert!(page.contains("body { margin: 0; }"));
        assert!(page.contains("<p>hi</p>"));
        assert!(page.contains("console.log(1);"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn test_page_shell_skips_empty_script() {
        let page = page_shell("t", "", "<p>hi</p>", "");
        assert!(!page.contains("<script>"));
    }
}
