//! # frontdoor-views
//!
//! The view dispatcher of a front-controller application.
//!
//! A handler fills a [`Model`], names a [`View`], and asks the view to
//! render itself. The view copies every model entry into the request's
//! attribute namespace and forwards the exchange to a [`ViewRenderer`]
//! supplied by the hosting environment. The response is committed only
//! after the renderer produced the whole body, so a failed forward leaves
//! no partial output behind.
//!
//! ## Architecture
//!
//! ```text
//! Controller ──► ModelView ──► ViewResolver ──► View
//!                                                 │ render_with_model
//!                                                 ▼
//!                              Request attributes ◄── Model
//!                                                 │
//!                                                 ▼
//!                                dyn ViewRenderer (e.g. TeraRenderer)
//!                                                 │
//!                                                 ▼
//!                                         Response (commit)
//! ```
//!
//! ## Examples
//!
//! ```
//! use frontdoor_http::{Request, Response};
//! use frontdoor_views::{Model, TeraRenderer, View};
//!
//! let renderer = TeraRenderer::from_templates([(
//!     "views/save-result.html",
//!     "<li>username={{ member.username }}</li>",
//! )])
//! .unwrap();
//!
//! let mut model = Model::new();
//! model.insert_serialized("member", &serde_json::json!({"username": "kim"})).unwrap();
//!
//! let request = Request::builder().uri("/members/save").build().unwrap();
//! let mut response = Response::ok();
//! View::new("views/save-result.html")
//!     .render_with_model(&model, &request, &mut response, &renderer)
//!     .unwrap();
//!
//! assert_eq!(response.body_text(), "<li>username=kim</li>");
//! ```

pub mod error;
pub mod model;
pub mod renderer;
pub mod resolver;
pub mod view;

#[cfg(feature = "templates")]
pub mod loader;
#[cfg(feature = "templates")]
pub mod tera_renderer;

pub use error::{ViewError, ViewResult};
pub use model::Model;
pub use renderer::{Rendered, ViewRenderer};
pub use resolver::ViewResolver;
pub use view::View;

#[cfg(feature = "templates")]
pub use loader::TemplateLoader;
#[cfg(feature = "templates")]
pub use tera_renderer::TeraRenderer;
