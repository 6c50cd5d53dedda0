//! Request-scoped attribute storage
//!
//! String-keyed values attached to a single request. Every clone of a
//! [`Request`](crate::Request) shares the same store, so a value set by a
//! handler is visible to whatever the request is forwarded to.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Shared attribute namespace for one request
#[derive(Clone, Default, Debug)]
pub struct Attributes {
	map: Arc<Mutex<HashMap<String, Value>>>,
}

impl Attributes {
	/// Create an empty attribute store
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_http::Attributes;
	///
	/// let attributes = Attributes::new();
	/// assert!(attributes.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Set an attribute, replacing any previous value under the same key
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_http::Attributes;
	/// use serde_json::json;
	///
	/// let attributes = Attributes::new();
	/// attributes.set("age", json!(20));
	/// attributes.set("age", json!(21));
	///
	/// assert_eq!(attributes.get("age"), Some(json!(21)));
	/// ```
	pub fn set(&self, key: impl Into<String>, value: Value) {
		let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.insert(key.into(), value);
	}

	/// Serialize `value` and set it as an attribute
	///
	/// Returns the serialization error instead of storing a partial value.
	pub fn set_serialized<T: Serialize + ?Sized>(
		&self,
		key: impl Into<String>,
		value: &T,
	) -> Result<(), serde_json::Error> {
		let value = serde_json::to_value(value)?;
		self.set(key, value);
		Ok(())
	}

	/// Get a cloned attribute value
	pub fn get(&self, key: &str) -> Option<Value> {
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.get(key).cloned()
	}

	/// Check whether an attribute is set
	pub fn contains(&self, key: &str) -> bool {
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.contains_key(key)
	}

	/// Remove an attribute and return its value
	pub fn remove(&self, key: &str) -> Option<Value> {
		let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.remove(key)
	}

	/// Number of attributes set
	pub fn len(&self) -> usize {
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.len()
	}

	/// Whether no attribute is set
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Sorted attribute names
	pub fn keys(&self) -> Vec<String> {
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		let mut keys: Vec<String> = map.keys().cloned().collect();
		keys.sort();
		keys
	}

	/// Copy every attribute into a JSON object
	///
	/// Rendering backends build their template context from this snapshot;
	/// later changes to the store do not affect it.
	///
	/// # Examples
	///
	/// ```
	/// use frontdoor_http::Attributes;
	/// use serde_json::json;
	///
	/// let attributes = Attributes::new();
	/// attributes.set("username", json!("kim"));
	///
	/// let snapshot = attributes.snapshot();
	/// attributes.set("username", json!("lee"));
	///
	/// assert_eq!(snapshot.get("username"), Some(&json!("kim")));
	/// ```
	pub fn snapshot(&self) -> Map<String, Value> {
		let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
	}

	/// Remove all attributes
	pub fn clear(&self) {
		let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
		map.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[derive(Serialize)]
	struct HelloData {
		username: String,
		age: u32,
	}

	#[rstest]
	fn test_set_and_get() {
		let attributes = Attributes::new();
		attributes.set("username", json!("kim"));

		assert_eq!(attributes.get("username"), Some(json!("kim")));
		assert_eq!(attributes.get("missing"), None);
	}

	#[rstest]
	fn test_clones_share_storage() {
		let attributes = Attributes::new();
		let shared = attributes.clone();

		shared.set("age", json!(20));

		assert!(attributes.contains("age"));
		assert_eq!(attributes.len(), 1);
	}

	#[rstest]
	fn test_set_serialized_struct() {
		let attributes = Attributes::new();
		let data = HelloData {
			username: "kim".to_string(),
			age: 20,
		};

		attributes.set_serialized("member", &data).unwrap();

		assert_eq!(
			attributes.get("member"),
			Some(json!({"username": "kim", "age": 20}))
		);
	}

	#[rstest]
	fn test_remove_and_clear() {
		let attributes = Attributes::new();
		attributes.set("a", json!(1));
		attributes.set("b", json!(2));

		assert_eq!(attributes.remove("a"), Some(json!(1)));
		assert_eq!(attributes.remove("a"), None);
		assert_eq!(attributes.keys(), vec!["b".to_string()]);

		attributes.clear();
		assert!(attributes.is_empty());
	}
}
