//! Controllers and the model-and-view they return

use frontdoor_http::Request;
use frontdoor_views::Model;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors a controller can report
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ControllerError {
	/// Model data could not be serialized
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// Any other failure inside the controller
	#[error("{0}")]
	Internal(String),
}

pub type ControllerResult = Result<ModelView, ControllerError>;

/// Logical view name plus the model to render it with
///
/// # Examples
///
/// ```
/// use frontdoor_dispatch::ModelView;
///
/// let mv = ModelView::new("save-result").with("username", "kim");
/// assert_eq!(mv.view_name(), "save-result");
/// assert!(mv.model().contains_key("username"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelView {
	view_name: String,
	model: Model,
}

impl ModelView {
	pub fn new(view_name: impl Into<String>) -> Self {
		Self {
			view_name: view_name.into(),
			model: Model::new(),
		}
	}

	pub fn with_model(view_name: impl Into<String>, model: Model) -> Self {
		Self {
			view_name: view_name.into(),
			model,
		}
	}

	/// Add a model entry
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.model.insert(key, value);
		self
	}

	/// Add a serialized model entry
	pub fn with_serialized<T: Serialize + ?Sized>(
		mut self,
		key: impl Into<String>,
		value: &T,
	) -> Result<Self, ControllerError> {
		self.model.insert_serialized(key, value)?;
		Ok(self)
	}

	pub fn view_name(&self) -> &str {
		&self.view_name
	}

	pub fn model(&self) -> &Model {
		&self.model
	}

	pub fn model_mut(&mut self) -> &mut Model {
		&mut self.model
	}

	pub fn into_parts(self) -> (String, Model) {
		(self.view_name, self.model)
	}
}

/// Request handler behind the front controller
///
/// Closures taking `&Request` and returning a [`ControllerResult`] are
/// controllers too.
pub trait Controller: Send + Sync {
	fn handle(&self, request: &Request) -> ControllerResult;
}

impl<F> Controller for F
where
	F: Fn(&Request) -> ControllerResult + Send + Sync,
{
	fn handle(&self, request: &Request) -> ControllerResult {
		self(request)
	}
}

/// Controller that always forwards to one view with an empty model
///
/// # Examples
///
/// ```
/// use frontdoor_dispatch::{Controller, ForwardController};
/// use frontdoor_http::Request;
///
/// let controller = ForwardController::new("new-form");
/// let request = Request::builder().uri("/members/new-form").build().unwrap();
///
/// let mv = controller.handle(&request).unwrap();
/// assert_eq!(mv.view_name(), "new-form");
/// assert!(mv.model().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ForwardController {
	view_name: String,
}

impl ForwardController {
	pub fn new(view_name: impl Into<String>) -> Self {
		Self {
			view_name: view_name.into(),
		}
	}
}

impl Controller for ForwardController {
	fn handle(&self, _request: &Request) -> ControllerResult {
		Ok(ModelView::new(self.view_name.clone()))
	}
}
