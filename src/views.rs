//! Views module.
//!
//! The view dispatcher: logical view names, models and renderers.
//!
//! # Examples
//!
//! ```rust
//! use frontdoor::views::{Model, ViewResolver};
//!
//! let view = ViewResolver::default().resolve("new-form").unwrap();
//! assert_eq!(view.path(), "views/new-form.html");
//!
//! let model = Model::new().with("username", "kim");
//! assert_eq!(model.len(), 1);
//! ```

pub use frontdoor_views::*;
