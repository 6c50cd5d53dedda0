//! Logical view name resolution
//!
//! Handlers name views logically (`"new-form"`); the resolver turns that into
//! the physical path the renderer knows (`"views/new-form.html"`), so
//! handlers do not hard-code where templates live.

use crate::{View, ViewError, ViewResult};
use frontdoor_conf::ViewSettings;

/// Prefix/suffix view name resolver
///
/// # Examples
///
/// ```
/// use frontdoor_views::ViewResolver;
///
/// let resolver = ViewResolver::new("WEB-INF/views/", ".html");
/// let view = resolver.resolve("new-form").unwrap();
///
/// assert_eq!(view.path(), "WEB-INF/views/new-form.html");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewResolver {
	prefix: String,
	suffix: String,
}

impl ViewResolver {
	pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			suffix: suffix.into(),
		}
	}

	/// Resolver using `view_prefix` and `view_suffix` from settings
	pub fn from_settings(settings: &ViewSettings) -> Self {
		Self::new(settings.view_prefix.clone(), settings.view_suffix.clone())
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	pub fn suffix(&self) -> &str {
		&self.suffix
	}

	/// Map a logical view name to a [`View`]
	///
	/// # Errors
	///
	/// [`ViewError::ViewNotFound`] when the name is empty, absolute, or
	/// contains a `..` segment.
	pub fn resolve(&self, view_name: &str) -> ViewResult<View> {
		if view_name.trim().is_empty() {
			return Err(ViewError::ViewNotFound("empty view name".to_string()));
		}
		if view_name.starts_with('/')
			|| view_name.contains('\\')
			|| view_name.split('/').any(|segment| segment == "..")
		{
			tracing::warn!(view_name, "rejected view name outside the view root");
			return Err(ViewError::ViewNotFound(view_name.to_string()));
		}

		Ok(View::new(format!(
			"{}{}{}",
			self.prefix, view_name, self.suffix
		)))
	}
}

impl Default for ViewResolver {
	fn default() -> Self {
		Self::from_settings(&ViewSettings::default())
	}
}
