pub(crate) mod normalize;
pub(crate) mod request;
pub(crate) mod response;
pub(crate) mod result;

pub use normalize::{normalize, NormalizedUrl};
pub use request::CheckRequest;
pub use response::HttpResponse;
pub use result::{CheckResult, MISSING_HEADER};
