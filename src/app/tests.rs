use super::*;
use crate::checkers::mock_checker::{MockChecker, MockResponse};
use crate::core::FetchError;
use std::time::Duration;
use tokio::io::BufReader;

#[derive(Default)]
struct MemoryDisplay {
    text: String,
    statuses: Vec<Status>,
    warnings: Vec<(String, String)>,
    clears: usize,
}

impl DisplaySink for MemoryDisplay {
    fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn clear(&mut self) {
        self.text.clear();
        self.clears += 1;
    }

    fn set_status(&mut self, status: &Status) {
        self.statuses.push(status.clone());
    }

    fn warn(&mut self, title: &str, message: &str) {
        self.warnings.push((title.to_string(), message.to_string()));
    }
}

fn app_with(responses: Vec<MockResponse>) -> (App<MemoryDisplay>, MockChecker) {
    let checker = MockChecker::new(responses);
    let app = App::new(
        MemoryDisplay::default(),
        Box::new(checker.clone()),
        CheckerConfig::default(),
    );
    (app, checker)
}

fn google_ok() -> MockResponse {
    MockResponse::ok(200, "OK")
        .with_header("server", "gws")
        .with_header("content-type", "text/html")
        .with_elapsed(Duration::from_millis(150))
}

#[tokio::test]
async fn test_empty_input_warns_and_starts_nothing() {
    let (mut app, checker) = app_with(vec![google_ok()]);

    assert_eq!(app.submit(""), Submission::Rejected);
    assert_eq!(app.submit("   "), Submission::Rejected);

    let state = app.state();
    assert_eq!(
        state.display.warnings,
        vec![
            ("Warning".to_string(), "Please enter a URL".to_string()),
            ("Warning".to_string(), "Please enter a URL".to_string()),
        ]
    );
    assert_eq!(state.in_flight, 0);
    assert_eq!(state.status, Status::Ready);
    assert!(state.display.text.is_empty());

    tokio::task::yield_now().await;
    assert_eq!(checker.calls(), 0);
}

#[tokio::test]
async fn test_invalid_input_is_reported_inline() {
    let (mut app, checker) = app_with(vec![google_ok()]);

    assert_eq!(app.submit("not a url"), Submission::Invalid);

    let state = app.state();
    assert_eq!(state.display.text, "⚠️ Invalid URL format\n");
    assert_eq!(state.status, Status::Ready);
    assert_eq!(state.in_flight, 0);
    assert!(state.display.warnings.is_empty());
    assert_eq!(app.stats().get_stats().invalid_inputs, 1);
    assert_eq!(checker.calls(), 0);
}

#[tokio::test]
async fn test_successful_check_flow() {
    let (mut app, checker) = app_with(vec![google_ok()]);

    let submission = app.submit("  google.com ");
    match &submission {
        Submission::Started(url) => assert_eq!(url.full, "https://google.com"),
        other => panic!("expected a started check, got {:?}", other),
    }
    assert_eq!(
        app.state().status,
        Status::Checking("https://google.com".to_string())
    );
    assert_eq!(app.state().in_flight, 1);

    let result = app.next_result().await.unwrap();
    app.complete(result);

    let state = app.state();
    assert_eq!(state.in_flight, 0);
    assert_eq!(state.status, Status::Ready);
    for needle in ["✅", "200", "OK", "0.15", "gws", "text/html"] {
        assert!(
            state.display.text.contains(needle),
            "missing {:?} in {:?}",
            needle,
            state.display.text
        );
    }
    assert_eq!(
        state.display.statuses,
        vec![
            Status::Ready,
            Status::Checking("https://google.com".to_string()),
            Status::Ready,
        ]
    );
    assert_eq!(checker.calls(), 1);
}

#[tokio::test]
async fn test_failure_statuses() {
    let (mut app, _) = app_with(vec![
        MockResponse::failure(FetchError::Connect("refused".to_string())),
        MockResponse::failure(FetchError::Timeout("deadline".to_string())),
        MockResponse::failure(FetchError::Other("decode".to_string())),
    ]);

    let expected = [
        (Status::ConnectionError, "❌ Failed to connect to https://nonexistent.invalid\n"),
        (Status::TimeoutError, "⏰ Timeout while connecting to https://nonexistent.invalid\n"),
        (Status::ErrorOccurred, "❌ Error checking https://nonexistent.invalid: decode\n"),
    ];

    for (status, line) in expected {
        app.clear();
        app.submit("https://nonexistent.invalid");
        let result = app.next_result().await.unwrap();
        app.complete(result);

        assert_eq!(app.state().status, status);
        assert_eq!(app.state().display.text, line);
    }
}

#[tokio::test]
async fn test_overlapping_checks_append_in_completion_order() {
    let (mut app, checker) = app_with(vec![
        MockResponse::ok(200, "OK").with_delay(Duration::from_millis(200)),
        MockResponse::failure(FetchError::Connect("refused".to_string())),
    ]);

    app.submit("slow.example");
    app.submit("fast.example");
    assert_eq!(app.state().in_flight, 2);

    for _ in 0..2 {
        let result = app.next_result().await.unwrap();
        app.complete(result);
    }

    let text = &app.state().display.text;
    let fast = text.find("Failed to connect to https://fast.example").unwrap();
    let slow = text.find("Check Results for: https://slow.example").unwrap();
    assert!(fast < slow);
    assert_eq!(app.state().in_flight, 0);
    assert_eq!(checker.calls(), 2);
}

#[tokio::test]
async fn test_clear_on_check() {
    let checker = MockChecker::new(vec![google_ok()]);
    let mut app = App::new(
        MemoryDisplay::default(),
        Box::new(checker),
        CheckerConfig::default().with_clear_on_check(true),
    );

    app.submit("a.example");
    let first = app.next_result().await.unwrap();
    app.complete(first);
    app.submit("b.example");
    let second = app.next_result().await.unwrap();
    app.complete(second);

    let state = app.state();
    assert_eq!(state.display.clears, 2);
    assert!(!state.display.text.contains("a.example"));
    assert!(state.display.text.contains("b.example"));
}

#[tokio::test]
async fn test_run_session() {
    let (mut app, checker) = app_with(vec![google_ok()]);
    let input = b"\ngoogle.com\nnot a url\n:stats\n:quit\nignored.example\n";

    app.run(BufReader::new(&input[..])).await;

    let state = app.state();
    assert_eq!(state.display.warnings.len(), 1);
    assert_eq!(state.in_flight, 0);
    assert_eq!(state.status, Status::Ready);
    assert!(state.display.text.contains("Check Results for: https://google.com"));
    assert!(state.display.text.contains("⚠️ Invalid URL format"));
    assert!(state.display.text.contains("Session Statistics:"));
    assert!(!state.display.text.contains("ignored.example"));
    assert_eq!(checker.calls(), 1);

    let stats = app.stats().get_stats();
    assert_eq!(stats.total_checks, 2);
    assert_eq!(stats.successful_checks, 1);
}

#[tokio::test]
async fn test_run_waits_for_in_flight_checks_at_end_of_input() {
    let (mut app, _) = app_with(vec![
        MockResponse::ok(503, "Service Unavailable").with_delay(Duration::from_millis(100)),
    ]);

    app.run(BufReader::new(&b"status.example\n:clear\n"[..]))
        .await;

    let state = app.state();
    assert_eq!(state.display.clears, 1);
    assert!(state.display.text.contains("⚠️ Check Results for: https://status.example"));
    assert!(state.display.text.contains("503"));
    assert_eq!(state.status, Status::Ready);
}

#[tokio::test]
async fn test_run_survives_undecodable_line() {
    let (mut app, _) = app_with(vec![google_ok()]);
    let input = b"google.com\n\xff\xfe\nexample.com\r\n";

    app.run(BufReader::new(&input[..])).await;

    let state = app.state();
    assert_eq!(state.in_flight, 0);
    assert!(state.display.text.contains("Check Results for: https://google.com"));
    assert!(state.display.text.contains("Check Results for: https://example.com\n"));
    assert!(state.display.text.contains("Session Statistics:"));
    assert!(app.stats().get_stats().total_checks >= 2);
}

#[tokio::test]
async fn test_run_keeps_unterminated_last_line() {
    let (mut app, checker) = app_with(vec![google_ok()]);

    app.run(BufReader::new(&b"google.com"[..])).await;

    assert!(app
        .state()
        .display
        .text
        .contains("Check Results for: https://google.com"));
    assert_eq!(checker.calls(), 1);
}
