use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Deadline for the whole exchange, connect included.
    pub timeout: Duration,
    pub user_agent: String,
    /// Wipe the results panel before each accepted check instead of appending.
    pub clear_on_check: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            clear_on_check: false,
        }
    }
}

impl CheckerConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_clear_on_check(mut self, clear: bool) -> Self {
        self.clear_on_check = clear;
        self
    }
}
