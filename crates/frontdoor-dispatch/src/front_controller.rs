//! The front controller

use crate::{Controller, DispatchError, ErrorPages, ForwardController};
use frontdoor_http::{Request, Response};
use frontdoor_views::{ViewRenderer, ViewResolver};
use hyper::StatusCode;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Single entry point for every request
///
/// Controllers are registered by exact request path. Handling a request
/// runs the matching controller, resolves the view name it returns and
/// renders that view with the controller's model. Every failure ends in an
/// error page, never a partially written response.
///
/// A `FrontController` is `Send + Sync`; share it behind an [`Arc`] to serve
/// requests from several threads.
pub struct FrontController {
	routes: HashMap<String, Arc<dyn Controller>>,
	resolver: ViewResolver,
	renderer: Arc<dyn ViewRenderer>,
	error_pages: ErrorPages,
}

impl FrontController {
	pub fn new(resolver: ViewResolver, renderer: Arc<dyn ViewRenderer>) -> Self {
		Self {
			routes: HashMap::new(),
			resolver,
			renderer,
			error_pages: ErrorPages::default(),
		}
	}

	/// Register `controller` for `path`, replacing any earlier registration
	pub fn route(mut self, path: impl Into<String>, controller: impl Controller + 'static) -> Self {
		self.routes.insert(path.into(), Arc::new(controller));
		self
	}

	/// Register a controller that renders `view_name` with an empty model
	pub fn forward(self, path: impl Into<String>, view_name: impl Into<String>) -> Self {
		self.route(path, ForwardController::new(view_name))
	}

	pub fn with_error_pages(mut self, error_pages: ErrorPages) -> Self {
		self.error_pages = error_pages;
		self
	}

	pub fn has_route(&self, path: &str) -> bool {
		self.routes.contains_key(path)
	}

	/// Registered paths, sorted
	pub fn paths(&self) -> Vec<&str> {
		let mut paths: Vec<&str> = self.routes.keys().map(String::as_str).collect();
		paths.sort_unstable();
		paths
	}

	pub fn resolver(&self) -> &ViewResolver {
		&self.resolver
	}

	/// Run the controller for `request` and render its view into `response`
	///
	/// # Errors
	///
	/// - [`DispatchError::NoHandler`] if no controller is registered for the
	///   request path.
	/// - [`DispatchError::Controller`] if the controller fails.
	/// - [`DispatchError::View`] if the view name is invalid or the view
	///   cannot be rendered. `response` is left untouched in that case.
	pub fn dispatch(&self, request: &Request, response: &mut Response) -> Result<(), DispatchError> {
		let path = request.path();
		let controller = self
			.routes
			.get(path)
			.ok_or_else(|| DispatchError::NoHandler(path.to_string()))?;

		let model_view = controller.handle(request)?;
		tracing::debug!(
			request_path = %path,
			view_name = %model_view.view_name(),
			"controller returned view"
		);

		let view = self.resolver.resolve(model_view.view_name())?;
		view.render_with_model(model_view.model(), request, response, self.renderer.as_ref())?;
		Ok(())
	}

	/// Handle `request` end to end
	///
	/// Unknown paths and views render the 404 page. Controller failures and
	/// any other view error render the 500 page.
	pub fn handle(&self, request: Request) -> Response {
		let mut response = Response::new(StatusCode::OK);
		match self.dispatch(&request, &mut response) {
			Ok(()) => response,
			Err(e) => {
				let status = e.status_code();
				if status == StatusCode::NOT_FOUND {
					tracing::warn!(request_path = %request.path(), error = %e, "request not found");
				} else {
					tracing::error!(request_path = %request.path(), error = %e, "request failed");
				}
				self.error_pages.render(status, &request, self.renderer.as_ref())
			}
		}
	}
}

impl fmt::Debug for FrontController {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FrontController")
			.field("routes", &self.paths())
			.field("resolver", &self.resolver)
			.field("error_pages", &self.error_pages)
			.finish_non_exhaustive()
	}
}
