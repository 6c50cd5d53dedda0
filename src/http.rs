//! HTTP module.
//!
//! Request and response types shared by controllers and views.

pub use frontdoor_http::*;
