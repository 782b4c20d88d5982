pub mod app;
pub mod checkers;
pub mod core;
pub mod http;
pub mod report;
pub mod stats;

pub use app::{App, ConsoleDisplay, DisplaySink, Status};
pub use checkers::{Checker, HttpChecker};
pub use crate::core::{CheckerConfig, CheckerError, CheckerResult};
pub use http::{normalize, CheckRequest, CheckResult, NormalizedUrl};
pub use stats::StatsTracker;
