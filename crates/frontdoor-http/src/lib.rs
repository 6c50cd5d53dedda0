//! # frontdoor-http
//!
//! The request/response exchange handed to controllers and views.
//!
//! A [`Request`] carries a request-scoped [`Attributes`] namespace. Handlers
//! and the view dispatcher put values there before forwarding, and the
//! rendering backend reads them back under the same keys. A [`Response`]
//! tracks whether it has been committed so that a forward can refuse to
//! overwrite output that is already fixed.
//!
//! ## Examples
//!
//! ```
//! use frontdoor_http::{Request, Response};
//! use hyper::{Method, StatusCode};
//!
//! let request = Request::builder()
//!     .method(Method::GET)
//!     .uri("/members/new-form")
//!     .build()
//!     .unwrap();
//! request.set_attribute("title", "New member");
//!
//! let response = Response::ok().with_body("done");
//! assert_eq!(response.status, StatusCode::OK);
//! assert_eq!(request.path(), "/members/new-form");
//! ```

pub mod attributes;
pub mod request;
pub mod response;

pub use attributes::Attributes;
pub use request::{Request, RequestBuilder};
pub use response::Response;

use thiserror::Error;

/// Errors raised while assembling exchange types
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HttpError {
	/// The request URI could not be parsed
	#[error("Invalid URI: {0}")]
	InvalidUri(String),

	/// A header name or value was rejected
	#[error("Invalid header: {0}")]
	InvalidHeader(String),
}

/// Result alias for exchange construction
pub type Result<T> = std::result::Result<T, HttpError>;
