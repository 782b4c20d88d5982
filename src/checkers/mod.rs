pub mod http_checker;
pub mod mock_checker;

mod checker;
pub use checker::Checker;
pub use http_checker::HttpChecker;
pub use mock_checker::MockChecker;
