//! Human-readable rendering of check results.

use crate::http::CheckResult;

pub const SUCCESS_ICON: &str = "✅";
pub const WARNING_ICON: &str = "⚠️";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub fn format(result: &CheckResult) -> String {
    match result {
        CheckResult::Success {
            target,
            status_code,
            reason,
            elapsed_seconds,
            server_header,
            content_type_header,
            timestamp,
        } => {
            let icon = if *status_code == 200 {
                SUCCESS_ICON
            } else {
                WARNING_ICON
            };
            format!(
                "\n{icon} Check Results for: {target}\n\
                 {RULE}\n\
                 🕒 Timestamp: {}\n\
                 📊 Status Code: {status_code}\n\
                 📝 Reason: {reason}\n\
                 ⚡ Response Time: {elapsed_seconds:.2} seconds\n\
                 🖥️ Server: {server_header}\n\
                 📄 Content Type: {content_type_header}\n\
                 {RULE}\n",
                timestamp.format(TIMESTAMP_FORMAT),
            )
        }
        CheckResult::ConnectionFailure { target } => {
            format!("❌ Failed to connect to {}\n", target)
        }
        CheckResult::TimeoutFailure { target } => {
            format!("⏰ Timeout while connecting to {}\n", target)
        }
        CheckResult::GenericFailure { target, message } => {
            format!("❌ Error checking {}: {}\n", target, message)
        }
        CheckResult::ValidationFailure => format!("{} Invalid URL format\n", WARNING_ICON),
    }
}
