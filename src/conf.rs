//! Configuration module.
//!
//! View settings layered from defaults, a TOML file and `FRONTDOOR_*`
//! environment variables.

pub use frontdoor_conf::*;
