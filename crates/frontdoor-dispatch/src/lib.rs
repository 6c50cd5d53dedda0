//! # frontdoor-dispatch
//!
//! A front controller: one entry point that receives every request, picks
//! the controller registered for the request path, resolves the logical
//! view name the controller returns, and renders that view with the
//! controller's model.
//!
//! ## Architecture
//!
//! ```text
//! Request → FrontController → Controller → ModelView
//!                 │                            │
//!                 │          ViewResolver ◄────┘ (view name)
//!                 │               │
//!                 │               ▼
//!                 └──────► View::render_with_model ──► Response
//!                                 │ error
//!                                 ▼
//!                            ErrorPages (404 / 500)
//! ```
//!
//! ## Examples
//!
//! ```
//! use frontdoor_dispatch::{ControllerResult, FrontController, ModelView};
//! use frontdoor_http::Request;
//! use frontdoor_views::{TeraRenderer, ViewResolver};
//! use hyper::StatusCode;
//! use std::sync::Arc;
//!
//! let renderer = TeraRenderer::from_templates([
//!     ("views/new-form.html", "<form></form>"),
//!     ("views/hello.html", "hello {{ username }}"),
//! ])
//! .unwrap();
//!
//! let front = FrontController::new(ViewResolver::default(), Arc::new(renderer))
//!     .forward("/members/new-form", "new-form")
//!     .route("/hello", |_request: &Request| -> ControllerResult {
//!         Ok(ModelView::new("hello").with("username", "kim"))
//!     });
//!
//! let response = front.handle(Request::builder().uri("/hello").build().unwrap());
//! assert_eq!(response.status, StatusCode::OK);
//! assert_eq!(response.body_text(), "hello kim");
//!
//! let response = front.handle(Request::builder().uri("/nowhere").build().unwrap());
//! assert_eq!(response.status, StatusCode::NOT_FOUND);
//! ```

pub mod controller;
pub mod error_pages;
pub mod front_controller;

pub use controller::{Controller, ControllerError, ControllerResult, ForwardController, ModelView};
pub use error_pages::ErrorPages;
pub use front_controller::FrontController;

use frontdoor_views::ViewError;
use hyper::StatusCode;
use thiserror::Error;

/// Errors that can occur while dispatching a request
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DispatchError {
	/// No controller is registered for the request path
	#[error("No controller registered for {0}")]
	NoHandler(String),

	/// The controller failed
	#[error("Controller error: {0}")]
	Controller(#[from] ControllerError),

	/// View resolution or rendering failed
	#[error(transparent)]
	View(#[from] ViewError),
}

impl DispatchError {
	/// HTTP status of the error page for this error
	pub fn status_code(&self) -> StatusCode {
		match self {
			DispatchError::NoHandler(_) => StatusCode::NOT_FOUND,
			DispatchError::Controller(_) => StatusCode::INTERNAL_SERVER_ERROR,
			DispatchError::View(e) => e.status_code(),
		}
	}
}
