use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

use crate::http::CheckResult;

#[derive(Debug, Clone)]
pub struct SessionStats {
    pub start_time: DateTime<Utc>,
    pub total_checks: usize,
    pub successful_checks: usize,
    pub connection_failures: usize,
    pub timeouts: usize,
    pub other_failures: usize,
    pub invalid_inputs: usize,
    pub status_codes: BTreeMap<u16, usize>,
    pub average_response_time: f64, // in seconds, successful checks only
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<SessionStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(SessionStats {
                start_time: Utc::now(),
                total_checks: 0,
                successful_checks: 0,
                connection_failures: 0,
                timeouts: 0,
                other_failures: 0,
                invalid_inputs: 0,
                status_codes: BTreeMap::new(),
                average_response_time: 0.0,
            })),
        }
    }

    pub fn record(&self, result: &CheckResult) {
        let mut stats = self.stats.write();
        stats.total_checks += 1;

        match result {
            CheckResult::Success {
                status_code,
                elapsed_seconds,
                ..
            } => {
                stats.successful_checks += 1;
                *stats.status_codes.entry(*status_code).or_insert(0) += 1;

                let n = stats.successful_checks as f64;
                stats.average_response_time =
                    (stats.average_response_time * (n - 1.0) + elapsed_seconds) / n;
            }
            CheckResult::ConnectionFailure { .. } => stats.connection_failures += 1,
            CheckResult::TimeoutFailure { .. } => stats.timeouts += 1,
            CheckResult::GenericFailure { .. } => stats.other_failures += 1,
            CheckResult::ValidationFailure => stats.invalid_inputs += 1,
        }
    }

    pub fn get_stats(&self) -> SessionStats {
        self.stats.read().clone()
    }

    pub fn summary(&self) -> String {
        let stats = self.stats.read();
        let duration = Utc::now().signed_duration_since(stats.start_time);

        let mut out = String::new();
        let _ = writeln!(out, "\nSession Statistics:");
        let _ = writeln!(out, "===================");
        let _ = writeln!(out, "Duration: {} seconds", duration.num_seconds());
        let _ = writeln!(out, "Total Checks: {}", stats.total_checks);
        let _ = writeln!(out, "Responses Received: {}", stats.successful_checks);
        let _ = writeln!(out, "Connection Failures: {}", stats.connection_failures);
        let _ = writeln!(out, "Timeouts: {}", stats.timeouts);
        let _ = writeln!(out, "Other Errors: {}", stats.other_failures);
        let _ = writeln!(out, "Invalid Inputs: {}", stats.invalid_inputs);
        let _ = writeln!(
            out,
            "Average Response Time: {:.2} seconds",
            stats.average_response_time
        );

        if !stats.status_codes.is_empty() {
            let _ = writeln!(out, "\nStatus Codes:");
            for (code, count) in &stats.status_codes {
                let _ = writeln!(out, "  {}: {}", code, count);
            }
        }
        out
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
