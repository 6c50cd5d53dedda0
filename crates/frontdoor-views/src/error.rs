use hyper::StatusCode;
use thiserror::Error;

/// Errors raised while resolving or forwarding to a view
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ViewError {
	/// The view path does not name a known resource
	#[error("View not found: {0}")]
	ViewNotFound(String),

	/// The exchange or a backing resource could not be read or written
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// The resource exists but failed to render
	#[error("Template rendering failed for {path}: {message}")]
	Template { path: String, message: String },

	/// Forward attempted after the response was committed
	#[error("Cannot forward to {0}: response already committed")]
	AlreadyCommitted(String),
}

impl ViewError {
	/// HTTP status the hosting environment should answer with
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_views::ViewError;
	/// use hyper::StatusCode;
	///
	/// let error = ViewError::ViewNotFound("views/missing.html".to_string());
	/// assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
	/// ```
	pub fn status_code(&self) -> StatusCode {
		match self {
			ViewError::ViewNotFound(_) => StatusCode::NOT_FOUND,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Whether this is a [`ViewError::ViewNotFound`]
	pub fn is_not_found(&self) -> bool {
		matches!(self, ViewError::ViewNotFound(_))
	}
}

/// Result alias for view operations
pub type ViewResult<T> = Result<T, ViewError>;
