//! HTTP request representation

use crate::{Attributes, HttpError, Result};
use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri, Version};
use serde_json::Value;

/// HTTP request as seen by controllers and views
#[derive(Clone, Debug)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	attributes: Attributes,
}

impl Request {
	/// Create a new request from its parts
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_http::Request;
	/// use hyper::{HeaderMap, Method, Uri, Version};
	/// use bytes::Bytes;
	///
	/// let request = Request::new(
	///     Method::GET,
	///     Uri::from_static("/hello"),
	///     Version::HTTP_11,
	///     HeaderMap::new(),
	///     Bytes::new(),
	/// );
	/// assert_eq!(request.path(), "/hello");
	/// ```
	pub fn new(method: Method, uri: Uri, version: Version, headers: HeaderMap, body: Bytes) -> Self {
		Self {
			method,
			uri,
			version,
			headers,
			body,
			attributes: Attributes::new(),
		}
	}

	/// Start building a request
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Path component of the request URI
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// The request-scoped attribute namespace
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Set a request attribute
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_http::Request;
	/// use serde_json::json;
	///
	/// let request = Request::builder().uri("/").build().unwrap();
	/// request.set_attribute("age", 20);
	///
	/// assert_eq!(request.attribute("age"), Some(json!(20)));
	/// ```
	pub fn set_attribute(&self, key: impl Into<String>, value: impl Into<Value>) {
		self.attributes.set(key, value.into());
	}

	/// Read a request attribute
	pub fn attribute(&self, key: &str) -> Option<Value> {
		self.attributes.get(key)
	}
}

/// Builder for [`Request`]
#[derive(Debug)]
pub struct RequestBuilder {
	method: Method,
	uri: Option<String>,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
	errors: Vec<HttpError>,
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self {
			method: Method::GET,
			uri: None,
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
			errors: Vec::new(),
		}
	}
}

impl RequestBuilder {
	/// Set the HTTP method (defaults to GET)
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Set the request URI
	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	/// Set the HTTP version (defaults to HTTP/1.1)
	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	/// Replace all headers
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Add a single header
	///
	/// Invalid names or values are reported by [`build`](Self::build).
	pub fn header(mut self, name: &str, value: &str) -> Self {
		match (
			HeaderName::from_bytes(name.as_bytes()),
			HeaderValue::from_str(value),
		) {
			(Ok(name), Ok(value)) => {
				self.headers.append(name, value);
			}
			_ => self.errors.push(HttpError::InvalidHeader(name.to_string())),
		}
		self
	}

	/// Set the request body
	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Build the request
	///
	/// # Errors
	///
	/// Returns [`HttpError::InvalidUri`] when the URI is missing or does not
	/// parse, and [`HttpError::InvalidHeader`] for the first rejected header.
	pub fn build(mut self) -> Result<Request> {
		if !self.errors.is_empty() {
			return Err(self.errors.remove(0));
		}
		let raw = self
			.uri
			.ok_or_else(|| HttpError::InvalidUri("missing URI".to_string()))?;
		let uri = raw
			.parse::<Uri>()
			.map_err(|e| HttpError::InvalidUri(format!("{}: {}", raw, e)))?;

		Ok(Request::new(
			self.method,
			uri,
			self.version,
			self.headers,
			self.body,
		))
	}
}
