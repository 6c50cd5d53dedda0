//! Environment variable parsing

use crate::SettingsError;

/// Prefix shared by every frontdoor environment variable
pub const ENV_PREFIX: &str = "FRONTDOOR_";

/// Parse a boolean the way settings files and shells spell it
///
/// # Examples
///
/// ```
/// use frontdoor_conf::parse_bool;
///
/// assert_eq!(parse_bool("Yes"), Ok(true));
/// assert_eq!(parse_bool("0"), Ok(false));
/// assert!(parse_bool("maybe").is_err());
/// ```
pub fn parse_bool(value: &str) -> Result<bool, String> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		other => Err(format!("expected a boolean, got {:?}", other)),
	}
}

/// Split a comma-separated list, dropping empty items
///
/// # Examples
///
/// ```
/// use frontdoor_conf::parse_list;
///
/// assert_eq!(parse_list("a, b,,c "), vec!["a", "b", "c"]);
/// assert!(parse_list("").is_empty());
/// ```
pub fn parse_list(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(str::to_string)
		.collect()
}

/// Parse a boolean variable, naming the variable in the error
pub(crate) fn parse_bool_var(key: &str, value: &str) -> Result<bool, SettingsError> {
	parse_bool(value).map_err(|message| SettingsError::InvalidValue {
		key: key.to_string(),
		message,
	})
}
