//! Dispatch module.
//!
//! The front controller and the controllers it routes to.

pub use frontdoor_dispatch::*;
