//! View descriptor and the forward operation

use crate::{Model, ViewError, ViewRenderer, ViewResult};
use frontdoor_http::{Request, Response};

/// A renderable resource named by its path
///
/// Created by a handler for one response, rendered once, then dropped.
///
/// # Examples
///
/// ```
/// use frontdoor_views::View;
///
/// let view = View::new("views/new-form.html");
/// assert_eq!(view.path(), "views/new-form.html");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct View {
	path: String,
}

impl View {
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	/// Forward the exchange to this view with no additional context
	///
	/// # Errors
	///
	/// - [`ViewError::AlreadyCommitted`] if `response` was committed before
	///   the forward.
	/// - Whatever the renderer reports, unchanged. An unknown path is
	///   [`ViewError::ViewNotFound`].
	///
	/// On error the response is left exactly as it was.
	pub fn render(
		&self,
		request: &Request,
		response: &mut Response,
		renderer: &dyn ViewRenderer,
	) -> ViewResult<()> {
		self.ensure_uncommitted(response)?;
		self.forward(request, response, renderer)
	}

	/// Expose every model entry as a request attribute, then forward
	///
	/// An empty model makes this identical to [`render`](Self::render).
	///
	/// # Errors
	///
	/// Same as [`render`](Self::render). The committed check runs before any
	/// attribute is set.
	pub fn render_with_model(
		&self,
		model: &Model,
		request: &Request,
		response: &mut Response,
		renderer: &dyn ViewRenderer,
	) -> ViewResult<()> {
		self.ensure_uncommitted(response)?;
		model.expose_to(request.attributes());
		self.forward(request, response, renderer)
	}

	fn ensure_uncommitted(&self, response: &Response) -> ViewResult<()> {
		if response.is_committed() {
			return Err(ViewError::AlreadyCommitted(self.path.clone()));
		}
		Ok(())
	}

	fn forward(
		&self,
		request: &Request,
		response: &mut Response,
		renderer: &dyn ViewRenderer,
	) -> ViewResult<()> {
		tracing::debug!(
			view = %self.path,
			request_path = %request.path(),
			attributes = request.attributes().len(),
			"forwarding to view"
		);

		let rendered = renderer.render(&self.path, request).inspect_err(|e| {
			tracing::debug!(view = %self.path, error = %e, "view rendering failed");
		})?;

		if !response.commit(&rendered.content_type, rendered.body) {
			return Err(ViewError::AlreadyCommitted(self.path.clone()));
		}
		Ok(())
	}
}
