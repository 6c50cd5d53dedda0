//! # frontdoor
//!
//! Front-controller view dispatch for Rust web handlers.
//!
//! A controller handles a request and names a logical view; the front
//! controller resolves that name to a template path and forwards the request
//! to it. Model entries travel to the view as request-scoped attributes, so
//! a template reads them under the same keys the controller used.
//!
//! ## Crates
//!
//! - [`http`]: `Request` with its attribute store, `Response` with commit
//!   tracking
//! - [`views`]: `View`, `Model`, `ViewResolver`, `ViewRenderer` and the Tera
//!   renderer
//! - [`conf`]: `ViewSettings`
//! - [`dispatch`]: `FrontController`, controllers and error pages
//!
//! ## Feature Flags
//!
//! - `templates` (default) - Tera-backed [`views::TeraRenderer`] and the
//!   file system [`views::TemplateLoader`]
//!
//! ## Quick Example
//!
//! ```rust
//! use frontdoor::prelude::*;
//! use std::sync::Arc;
//!
//! let renderer = TeraRenderer::from_templates([
//!     ("views/new-form.html", "<form action=\"save\"></form>"),
//! ])
//! .unwrap();
//!
//! let front = FrontController::new(ViewResolver::default(), Arc::new(renderer))
//!     .forward("/members/new-form", "new-form");
//!
//! let request = Request::builder().uri("/members/new-form").build().unwrap();
//! let response = front.handle(request);
//! assert_eq!(response.body_text(), "<form action=\"save\"></form>");
//! ```

pub mod conf;
pub mod dispatch;
pub mod http;
pub mod views;

pub use frontdoor_conf::{SettingsError, ViewSettings};
pub use frontdoor_dispatch::{
	Controller, ControllerError, ControllerResult, DispatchError, ErrorPages, ForwardController,
	FrontController, ModelView,
};
pub use frontdoor_http::{Request, Response};
pub use frontdoor_views::{Model, View, ViewError, ViewRenderer, ViewResolver, ViewResult};

#[cfg(feature = "templates")]
pub use frontdoor_views::{TemplateLoader, TeraRenderer};

/// Build a front controller from settings
///
/// Template directories in `settings` are resolved against `base_dir` and
/// registered with a [`TeraRenderer`]; view names resolve with the
/// configured prefix and suffix.
///
/// # Errors
///
/// Whatever [`TeraRenderer::from_settings`] reports for unreadable
/// directories or templates that fail to parse.
#[cfg(feature = "templates")]
pub fn front_controller(settings: &ViewSettings, base_dir: &std::path::Path) -> ViewResult<FrontController> {
	let renderer = TeraRenderer::from_settings(settings, base_dir)?;
	Ok(FrontController::new(
		ViewResolver::from_settings(settings),
		std::sync::Arc::new(renderer),
	))
}

pub mod prelude {
	//! Commonly used types

	pub use crate::{
		Controller, ControllerError, ControllerResult, ErrorPages, FrontController, Model, ModelView,
		Request, Response, View, ViewError, ViewRenderer, ViewResolver, ViewSettings,
	};

	#[cfg(feature = "templates")]
	pub use crate::TeraRenderer;
}
