//! Rendering backend interface
//!
//! The dispatcher never renders anything itself. It forwards to a
//! [`ViewRenderer`] injected by the hosting environment, which turns a view
//! path plus the request's attributes into a complete [`Rendered`] body.

use crate::ViewResult;
use bytes::Bytes;
use frontdoor_http::Request;

/// Content type used by HTML backends
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// A fully rendered resource, ready to be committed to a response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
	pub content_type: String,
	pub body: Bytes,
}

impl Rendered {
	pub fn new(content_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
		Self {
			content_type: content_type.into(),
			body: body.into(),
		}
	}

	/// HTML output with `text/html; charset=utf-8`
	pub fn html(body: impl Into<Bytes>) -> Self {
		Self::new(HTML_CONTENT_TYPE, body)
	}
}

/// Template resolution and rendering keyed by string path
///
/// Implementations must render the whole resource before returning and must
/// report an unknown path as [`ViewError::ViewNotFound`](crate::ViewError::ViewNotFound).
///
/// # Examples
///
/// ```
/// use frontdoor_http::Request;
/// use frontdoor_views::{Rendered, ViewError, ViewRenderer, ViewResult};
///
/// struct Echo;
///
/// impl ViewRenderer for Echo {
///     fn render(&self, path: &str, request: &Request) -> ViewResult<Rendered> {
///         if path != "echo" {
///             return Err(ViewError::ViewNotFound(path.to_string()));
///         }
///         let keys = request.attributes().keys().join(",");
///         Ok(Rendered::new("text/plain", keys))
///     }
/// }
/// ```
pub trait ViewRenderer: Send + Sync {
	/// Render the resource at `path` using `request`'s attributes as context
	fn render(&self, path: &str, request: &Request) -> ViewResult<Rendered>;
}

impl<R: ViewRenderer + ?Sized> ViewRenderer for std::sync::Arc<R> {
	fn render(&self, path: &str, request: &Request) -> ViewResult<Rendered> {
		(**self).render(path, request)
	}
}

impl<R: ViewRenderer + ?Sized> ViewRenderer for Box<R> {
	fn render(&self, path: &str, request: &Request) -> ViewResult<Rendered> {
		(**self).render(path, request)
	}
}
