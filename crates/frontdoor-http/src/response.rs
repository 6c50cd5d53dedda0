use bytes::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};

/// HTTP Response representation
#[derive(Debug)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
	/// Set once status, headers and body are final
	committed: bool,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// assert!(!response.is_committed());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
			committed: false,
		}
	}

	/// Create a Response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a Response with HTTP 404 Not Found status
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Create a Response with HTTP 500 Internal Server Error status
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Set the response body
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_http::Response;
	/// use bytes::Bytes;
	///
	/// let response = Response::ok().with_body("ok");
	/// assert_eq!(response.body, Bytes::from("ok"));
	/// ```
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a custom header to the response
	///
	/// Names or values that are not valid HTTP are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_http::Response;
	///
	/// let response = Response::ok().with_header("content-type", "application/json");
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let (Ok(name), Ok(value)) = (
			HeaderName::from_bytes(name.as_bytes()),
			HeaderValue::from_str(value),
		) {
			self.headers.insert(name, value);
		}
		self
	}

	/// The `Content-Type` header, if set and valid UTF-8
	pub fn content_type(&self) -> Option<&str> {
		self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
	}

	/// Whether the response has been committed
	pub fn is_committed(&self) -> bool {
		self.committed
	}

	/// Write the final body and content type, and mark the response committed
	///
	/// Returns `false` without touching the response when it was already
	/// committed. A content type that is not a valid header value is logged
	/// and left out; the body is still committed.
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_http::Response;
	///
	/// let mut response = Response::ok();
	/// assert!(response.commit("text/plain", "first"));
	/// assert!(!response.commit("text/plain", "second"));
	/// assert_eq!(response.body, "first");
	/// ```
	pub fn commit(&mut self, content_type: &str, body: impl Into<Bytes>) -> bool {
		if self.committed {
			return false;
		}
		match HeaderValue::from_str(content_type) {
			Ok(value) => {
				self.headers.insert(CONTENT_TYPE, value);
			}
			Err(_) => {
				tracing::warn!(content_type, "invalid content type dropped from committed response");
			}
		}
		self.body = body.into();
		self.committed = true;
		true
	}

	/// Body decoded as UTF-8, replacing invalid sequences
	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

impl Default for Response {
	fn default() -> Self {
		Self::ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Response::ok(), StatusCode::OK)]
	#[case(Response::not_found(), StatusCode::NOT_FOUND)]
	#[case(Response::internal_server_error(), StatusCode::INTERNAL_SERVER_ERROR)]
	fn test_status_constructors(#[case] response: Response, #[case] expected: StatusCode) {
		assert_eq!(response.status, expected);
		assert!(!response.is_committed());
	}

	#[rstest]
	fn test_commit_sets_content_type_and_body() {
		// Arrange
		let mut response = Response::ok();

		// Act
		let committed = response.commit("application/json", r#"{"username":"kim","age":20}"#);

		// Assert
		assert!(committed);
		assert!(response.is_committed());
		assert_eq!(response.content_type(), Some("application/json"));
		assert_eq!(response.body_text(), r#"{"username":"kim","age":20}"#);
	}

	#[rstest]
	fn test_second_commit_is_refused() {
		let mut response = Response::ok();
		response.commit("text/html; charset=utf-8", "<p>first</p>");

		let committed = response.commit("text/plain", "second");

		assert!(!committed);
		assert_eq!(response.content_type(), Some("text/html; charset=utf-8"));
		assert_eq!(response.body_text(), "<p>first</p>");
	}

	#[rstest]
	fn test_invalid_content_type_is_logged_and_dropped() {
		use std::sync::{Arc, Mutex};
		use tracing_subscriber::layer::SubscriberExt as _;
		use tracing_subscriber::util::SubscriberInitExt as _;

		// Arrange
		struct LogCapture {
			logs: Arc<Mutex<Vec<String>>>,
		}

		impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
			fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
				struct ContentTypeVisitor(String);

				impl tracing::field::Visit for ContentTypeVisitor {
					fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
						if field.name() == "content_type" {
							self.0 = value.to_string();
						}
					}

					fn record_debug(&mut self, _field: &tracing::field::Field, _value: &dyn std::fmt::Debug) {}
				}

				let mut visitor = ContentTypeVisitor(String::new());
				event.record(&mut visitor);
				self.logs
					.lock()
					.unwrap()
					.push(format!("[{}] {:?}", event.metadata().level(), visitor.0));
			}
		}

		let logs = Arc::new(Mutex::new(Vec::new()));
		let _guard = tracing_subscriber::registry()
			.with(LogCapture { logs: logs.clone() })
			.set_default();
		let mut response = Response::ok();

		// Act
		let committed = response.commit("text/html\r\nx-injected: 1", "<p>body</p>");

		// Assert
		assert!(committed);
		assert!(response.content_type().is_none());
		assert_eq!(response.body_text(), "<p>body</p>");
		assert_eq!(
			*logs.lock().unwrap(),
			vec![r#"[WARN] "text/html\r\nx-injected: 1""#.to_string()]
		);
	}

	#[rstest]
	fn test_with_header_ignores_invalid_name() {
		let response = Response::ok().with_header("bad header", "x");

		assert!(response.headers.is_empty());
	}
}
