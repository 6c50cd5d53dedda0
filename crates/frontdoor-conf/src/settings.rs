//! View settings

use crate::SettingsError;
use crate::env::{ENV_PREFIX, parse_bool_var, parse_list};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How logical view names map to templates, and where templates live
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
	/// Directories searched for templates, first match wins
	pub template_dirs: Vec<PathBuf>,

	/// Prepended to a logical view name
	pub view_prefix: String,

	/// Appended to a logical view name
	pub view_suffix: String,

	/// Keep loaded template sources in memory between renders
	pub cache_templates: bool,
}

impl Default for ViewSettings {
	fn default() -> Self {
		Self {
			template_dirs: vec![PathBuf::from("templates")],
			view_prefix: "views/".to_string(),
			view_suffix: ".html".to_string(),
			cache_templates: true,
		}
	}
}

impl ViewSettings {
	/// Settings with built-in defaults
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_conf::ViewSettings;
	/// use std::path::PathBuf;
	///
	/// let settings = ViewSettings::new();
	/// assert_eq!(settings.template_dirs, vec![PathBuf::from("templates")]);
	/// assert_eq!(settings.view_prefix, "views/");
	/// assert_eq!(settings.view_suffix, ".html");
	/// assert!(settings.cache_templates);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the template directories with a single directory
	pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.template_dirs = vec![dir.into()];
		self
	}

	/// Append a template directory searched after the existing ones
	pub fn add_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.template_dirs.push(dir.into());
		self
	}

	pub fn with_view_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.view_prefix = prefix.into();
		self
	}

	pub fn with_view_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.view_suffix = suffix.into();
		self
	}

	pub fn with_cache_templates(mut self, enabled: bool) -> Self {
		self.cache_templates = enabled;
		self
	}

	/// Parse settings from TOML text; missing keys keep their defaults
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	/// Read and parse a TOML settings file
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let source = fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), "loaded view settings file");
		Ok(settings)
	}

	/// Override fields from `FRONTDOOR_*` pairs
	///
	/// Recognized keys: `FRONTDOOR_TEMPLATE_DIRS` (comma separated),
	/// `FRONTDOOR_VIEW_PREFIX`, `FRONTDOOR_VIEW_SUFFIX`,
	/// `FRONTDOOR_CACHE_TEMPLATES`. Other keys are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_conf::ViewSettings;
	///
	/// let settings = ViewSettings::new()
	///     .apply_vars([
	///         ("FRONTDOOR_VIEW_SUFFIX".to_string(), ".tera".to_string()),
	///         ("HOME".to_string(), "/root".to_string()),
	///     ])
	///     .unwrap();
	///
	/// assert_eq!(settings.view_suffix, ".tera");
	/// ```
	pub fn apply_vars<I>(mut self, vars: I) -> Result<Self, SettingsError>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		for (key, value) in vars {
			let Some(name) = key.strip_prefix(ENV_PREFIX) else {
				continue;
			};
			match name {
				"TEMPLATE_DIRS" => {
					self.template_dirs = parse_list(&value).into_iter().map(PathBuf::from).collect();
				}
				"VIEW_PREFIX" => self.view_prefix = value,
				"VIEW_SUFFIX" => self.view_suffix = value,
				"CACHE_TEMPLATES" => self.cache_templates = parse_bool_var(&key, &value)?,
				_ => continue,
			}
			tracing::debug!(key = %key, "view setting overridden from environment");
		}
		Ok(self)
	}

	/// Override fields from the process environment
	///
	/// Variables without the `FRONTDOOR_` prefix are ignored, whatever
	/// their encoding.
	///
	/// # Errors
	///
	/// [`SettingsError::InvalidValue`] if a prefixed variable is not valid
	/// UTF-8 or does not parse.
	pub fn apply_env(self) -> Result<Self, SettingsError> {
		let mut vars = Vec::new();
		for (key, value) in std::env::vars_os() {
			let Some(key) = key.to_str().filter(|key| key.starts_with(ENV_PREFIX)) else {
				continue;
			};
			let value = value.into_string().map_err(|_| SettingsError::InvalidValue {
				key: key.to_string(),
				message: "value is not valid UTF-8".to_string(),
			})?;
			vars.push((key.to_string(), value));
		}
		self.apply_vars(vars)
	}

	/// Defaults, then the optional TOML file, then the environment
	pub fn load(file: Option<&Path>) -> Result<Self, SettingsError> {
		let base = match file {
			Some(path) => Self::from_toml_file(path)?,
			None => Self::default(),
		};
		base.apply_env()
	}

	/// Template directories with relative entries joined onto `base_dir`
	pub fn resolve_template_dirs(&self, base_dir: &Path) -> Vec<PathBuf> {
		self.template_dirs
			.iter()
			.map(|dir| {
				if dir.is_absolute() {
					dir.clone()
				} else {
					base_dir.join(dir)
				}
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		let settings = ViewSettings::from_toml_str("cache_templates = false").unwrap();

		assert!(!settings.cache_templates);
		assert_eq!(settings.view_prefix, "views/");
		assert_eq!(settings.template_dirs, vec![PathBuf::from("templates")]);
	}

	#[rstest]
	fn test_invalid_toml_is_reported() {
		let result = ViewSettings::from_toml_str("view_prefix = [");

		assert!(matches!(result, Err(SettingsError::Toml(_))));
	}

	#[rstest]
	fn test_apply_vars_overrides_all_known_keys() {
		let settings = ViewSettings::new()
			.apply_vars(vars(&[
				("FRONTDOOR_TEMPLATE_DIRS", "a, b"),
				("FRONTDOOR_VIEW_PREFIX", "WEB-INF/views/"),
				("FRONTDOOR_VIEW_SUFFIX", ".jinja"),
				("FRONTDOOR_CACHE_TEMPLATES", "off"),
				("FRONTDOOR_UNKNOWN", "ignored"),
			]))
			.unwrap();

		assert_eq!(
			settings,
			ViewSettings {
				template_dirs: vec![PathBuf::from("a"), PathBuf::from("b")],
				view_prefix: "WEB-INF/views/".to_string(),
				view_suffix: ".jinja".to_string(),
				cache_templates: false,
			}
		);
	}

	#[rstest]
	fn test_apply_vars_rejects_bad_bool() {
		let result = ViewSettings::new().apply_vars(vars(&[("FRONTDOOR_CACHE_TEMPLATES", "maybe")]));

		assert!(matches!(
			result,
			Err(SettingsError::InvalidValue { ref key, .. }) if key == "FRONTDOOR_CACHE_TEMPLATES"
		));
	}

	#[rstest]
	fn test_resolve_template_dirs_joins_relative() {
		let absolute = std::env::temp_dir();
		let settings = ViewSettings::new()
			.with_template_dir("templates")
			.add_template_dir(absolute.clone());

		let dirs = settings.resolve_template_dirs(Path::new("/srv/app"));

		assert_eq!(dirs, vec![PathBuf::from("/srv/app/templates"), absolute]);
	}
}
