//! # frontdoor-conf
//!
//! Settings for view resolution and template loading.
//!
//! Settings are layered in priority order:
//!
//! 1. `FRONTDOOR_*` environment variables
//! 2. a TOML settings file
//! 3. built-in defaults
//!
//! ## Examples
//!
//! ```
//! use frontdoor_conf::ViewSettings;
//!
//! let settings = ViewSettings::from_toml_str(r#"
//! template_dirs = ["templates", "shared/templates"]
//! view_prefix = "WEB-INF/views/"
//! "#).unwrap();
//!
//! assert_eq!(settings.template_dirs.len(), 2);
//! assert_eq!(settings.view_prefix, "WEB-INF/views/");
//! assert_eq!(settings.view_suffix, ".html");
//! ```

pub mod env;
pub mod settings;

pub use env::{ENV_PREFIX, parse_bool, parse_list};
pub use settings::ViewSettings;

/// Errors raised while loading settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// An environment variable held a value of the wrong shape
	#[error("Invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },
}
