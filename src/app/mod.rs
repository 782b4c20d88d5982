//! The interactive session.
//!
//! The foreground loop owns every piece of display state. Each accepted
//! submission spawns one background task running the check; results come back
//! over a channel and are rendered in completion order. Overlapping checks are
//! neither de-duplicated nor cancelled.

mod command;
mod display;
mod status;

#[cfg(test)]
mod tests;

pub use command::{Command, HELP};
pub use display::{ConsoleDisplay, DisplaySink};
pub use status::Status;

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::checkers::Checker;
use crate::core::CheckerConfig;
use crate::http::{CheckRequest, CheckResult, NormalizedUrl};
use crate::report;
use crate::stats::StatsTracker;

pub struct AppState<D: DisplaySink> {
    pub display: D,
    pub status: Status,
    pub in_flight: usize,
}

/// What happened to one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Empty input; the user was warned and nothing ran.
    Rejected,
    /// Not a checkable URL; reported inline, nothing ran.
    Invalid,
    Started(NormalizedUrl),
}

pub struct App<D: DisplaySink> {
    state: AppState<D>,
    checker: Box<dyn Checker>,
    config: CheckerConfig,
    stats: StatsTracker,
    results_tx: mpsc::UnboundedSender<CheckResult>,
    results_rx: mpsc::UnboundedReceiver<CheckResult>,
}

impl<D: DisplaySink> App<D> {
    pub fn new(display: D, checker: Box<dyn Checker>, config: CheckerConfig) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let mut state = AppState {
            display,
            status: Status::Ready,
            in_flight: 0,
        };
        state.display.set_status(&state.status);

        Self {
            state,
            checker,
            config,
            stats: StatsTracker::new(),
            results_tx,
            results_rx,
        }
    }

    pub fn state(&self) -> &AppState<D> {
        &self.state
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    /// Handles one press of the check button. Must be called inside a tokio
    /// runtime.
    pub fn submit(&mut self, raw_input: &str) -> Submission {
        let raw_input = raw_input.trim();
        if raw_input.is_empty() {
            self.state.display.warn("Warning", "Please enter a URL");
            return Submission::Rejected;
        }

        let url = match CheckRequest::new(raw_input).normalize() {
            Ok(url) => url,
            Err(e) => {
                debug!("Rejected input {:?}: {}", raw_input, e);
                let result = CheckResult::ValidationFailure;
                self.stats.record(&result);
                self.state.display.append(&report::format(&result));
                return Submission::Invalid;
            }
        };

        if self.config.clear_on_check {
            self.state.display.clear();
        }
        self.set_status(Status::Checking(url.full.clone()));
        self.state.in_flight += 1;

        info!("Starting check for {}", url);
        let checker = self.checker.box_clone();
        let results_tx = self.results_tx.clone();
        let task_url = url.clone();
        tokio::spawn(async move {
            let result = checker.run_check(&task_url).await;
            if results_tx.send(result).is_err() {
                debug!("Session closed before check of {} finished", task_url);
            }
        });

        Submission::Started(url)
    }

    /// Renders a finished check.
    pub fn complete(&mut self, result: CheckResult) {
        self.state.in_flight = self.state.in_flight.saturating_sub(1);
        if let Some(target) = result.target() {
            debug!(
                "Check of {} finished (response received: {})",
                target,
                result.is_success()
            );
        }
        self.stats.record(&result);
        self.state.display.append(&report::format(&result));
        if let Some(status) = Status::after(&result) {
            self.set_status(status);
        }
    }

    pub fn clear(&mut self) {
        self.state.display.clear();
    }

    /// Waits for the next background check to finish.
    pub async fn next_result(&mut self) -> Option<CheckResult> {
        self.results_rx.recv().await
    }

    /// Drives the session from `input` until it ends or `:quit` is read, then
    /// waits for checks still running and appends the session summary.
    ///
    /// Input is decoded lossily; a failing input stream stops reading but
    /// still lets running checks land.
    pub async fn run<R>(&mut self, mut input: R)
    where
        R: AsyncBufRead + Unpin,
    {
        let mut line = Vec::new();
        let mut reading = true;

        loop {
            if !reading && self.state.in_flight == 0 {
                break;
            }

            // Partial reads stay in `line` across select! iterations.
            tokio::select! {
                read = input.read_until(b'\n', &mut line), if reading => match read {
                    Ok(0) => reading = false,
                    Ok(_) => {
                        let text = String::from_utf8_lossy(&line).into_owned();
                        line.clear();
                        reading = self.handle_line(text.trim_end_matches(['\n', '\r']));
                    }
                    Err(e) => {
                        warn!("Input stream failed: {}", e);
                        reading = false;
                    }
                },
                Some(result) = self.results_rx.recv() => self.complete(result),
            }
        }

        info!("Session finished");
        self.state.display.append(&self.stats.summary());
    }

    /// Returns false once the user asks to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        match Command::parse(line) {
            Command::Check(raw_input) => {
                self.submit(&raw_input);
            }
            Command::Clear => self.clear(),
            Command::Stats => self.state.display.append(&self.stats.summary()),
            Command::Help => self.state.display.append(HELP),
            Command::Quit => return false,
        }
        true
    }

    fn set_status(&mut self, status: Status) {
        self.state.display.set_status(&status);
        self.state.status = status;
    }
}
