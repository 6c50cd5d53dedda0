//! Model data handed from a handler to its view

use frontdoor_http::Attributes;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::collections::hash_map;

/// String-keyed values made available to a view at render time
///
/// Keys are unique; inserting under an existing key replaces the value.
/// The dispatcher only reads a model, it never changes it.
///
/// # Examples
///
/// ```
/// use frontdoor_views::Model;
/// use serde_json::json;
///
/// let model = Model::new()
///     .with("username", "kim")
///     .with("age", 20);
///
/// assert_eq!(model.get("age"), Some(&json!(20)));
/// assert_eq!(model.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
	entries: HashMap<String, Value>,
}

impl Model {
	/// Create an empty model
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a value, returning the one it replaced
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.entries.insert(key.into(), value.into())
	}

	/// Serialize any value into the model
	///
	/// # Errors
	///
	/// Returns the `serde_json` error if `value` cannot be serialized; the
	/// model is left unchanged.
	pub fn insert_serialized<T: Serialize + ?Sized>(
		&mut self,
		key: impl Into<String>,
		value: &T,
	) -> Result<(), serde_json::Error> {
		let value = serde_json::to_value(value)?;
		self.entries.insert(key.into(), value);
		Ok(())
	}

	/// Builder-style [`insert`](Self::insert)
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
		self.entries.iter()
	}

	/// Copy every entry into a request attribute namespace
	///
	/// Attributes already set under the same key are overwritten; other
	/// attributes are left alone.
	pub fn expose_to(&self, attributes: &Attributes) {
		for (key, value) in &self.entries {
			attributes.set(key.clone(), value.clone());
		}
	}
}

impl<K, V> FromIterator<(K, V)> for Model
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Model {
	type Item = (&'a String, &'a Value);
	type IntoIter = hash_map::Iter<'a, String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
