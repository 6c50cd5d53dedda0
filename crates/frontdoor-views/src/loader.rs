//! File system template loader
//!
//! Loads template sources from one or more directories with checks that keep
//! every lookup inside those directories.

use crate::{ViewError, ViewResult};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;
use walkdir::WalkDir;

/// File system template loader
///
/// Directories are searched in order and the first one holding the template
/// wins.
#[derive(Debug)]
pub struct TemplateLoader {
	dirs: Vec<PathBuf>,
	cache: RwLock<HashMap<String, String>>,
	use_cache: bool,
}

impl TemplateLoader {
	/// Create a loader over `dirs`
	///
	/// # Example
	///
	/// ```rust,no_run
	/// use frontdoor_views::TemplateLoader;
	///
	/// let loader = TemplateLoader::new(["/app/templates", "/app/shared"], true);
	/// let source = loader.load("views/new-form.html").unwrap();
	/// ```
	pub fn new<I, P>(dirs: I, use_cache: bool) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		Self {
			dirs: dirs.into_iter().map(Into::into).collect(),
			cache: RwLock::new(HashMap::new()),
			use_cache,
		}
	}

	pub fn dirs(&self) -> &[PathBuf] {
		&self.dirs
	}

	pub fn uses_cache(&self) -> bool {
		self.use_cache
	}

	/// Load a template source by name
	///
	/// # Errors
	///
	/// - [`ViewError::ViewNotFound`] if the name tries to leave the template
	///   directories, or no directory holds a file by that name.
	/// - [`ViewError::Io`] if the file exists but cannot be read.
	pub fn load(&self, name: &str) -> ViewResult<String> {
		let name = normalize(name)?;

		if self.use_cache {
			let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
			if let Some(content) = cache.get(name) {
				return Ok(content.clone());
			}
		}

		let full_path = self
			.locate(name)
			.ok_or_else(|| ViewError::ViewNotFound(name.to_string()))?;
		let content = fs::read_to_string(&full_path)?;

		if self.use_cache {
			let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
			cache.insert(name.to_string(), content.clone());
		}

		Ok(content)
	}

	/// Every template below the directories, keyed by `/`-separated name
	///
	/// A name found in several directories maps to the first directory's
	/// source, matching [`load`](Self::load).
	pub fn load_all(&self) -> ViewResult<BTreeMap<String, String>> {
		let mut templates = BTreeMap::new();
		for dir in &self.dirs {
			if !dir.is_dir() {
				tracing::debug!(dir = %dir.display(), "template directory missing, skipped");
				continue;
			}
			for entry in WalkDir::new(dir).follow_links(true) {
				let entry = entry.map_err(walk_error)?;
				if !entry.file_type().is_file() {
					continue;
				}
				let Some(name) = relative_name(dir, entry.path()) else {
					continue;
				};
				if templates.contains_key(&name) {
					continue;
				}
				match self.load(&name) {
					Ok(source) => {
						templates.insert(name, source);
					}
					// Rejected by `locate`, e.g. a symlink leaving the directory
					Err(ViewError::ViewNotFound(_)) => {
						tracing::warn!(template = %name, "template skipped");
					}
					Err(e) => return Err(e),
				}
			}
		}
		Ok(templates)
	}

	/// Clear the template cache
	pub fn clear_cache(&self) {
		let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
		cache.clear();
	}

	fn locate(&self, name: &str) -> Option<PathBuf> {
		self.dirs.iter().find_map(|dir| {
			let full_path = dir.join(name);
			if !full_path.is_file() {
				return None;
			}
			// Symlinks may still point outside the directory
			match (full_path.canonicalize(), dir.canonicalize()) {
				(Ok(full), Ok(base)) if full.starts_with(&base) => Some(full_path),
				_ => {
					tracing::warn!(template = name, "template path escapes its directory");
					None
				}
			}
		})
	}
}

/// Strip leading slashes and reject traversal
fn normalize(name: &str) -> ViewResult<&str> {
	let normalized = name.trim_start_matches('/');
	if normalized.is_empty() {
		return Err(ViewError::ViewNotFound(name.to_string()));
	}
	for component in Path::new(normalized).components() {
		match component {
			Component::Normal(_) | Component::CurDir => {}
			_ => {
				tracing::warn!(template = name, "directory traversal attempt rejected");
				return Err(ViewError::ViewNotFound(name.to_string()));
			}
		}
	}
	Ok(normalized)
}

fn relative_name(dir: &Path, path: &Path) -> Option<String> {
	let relative = path.strip_prefix(dir).ok()?;
	let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
	Some(parts?.join("/"))
}

fn walk_error(error: walkdir::Error) -> ViewError {
	match error.into_io_error() {
		Some(io) => ViewError::Io(io),
		None => ViewError::Io(std::io::Error::other("template directory walk failed")),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;
	use tempfile::TempDir;

	fn create_test_template(dir: &Path, name: &str, content: &str) -> std::io::Result<()> {
		let file_path = dir.join(name);
		if let Some(parent) = file_path.parent() {
			fs::create_dir_all(parent)?;
		}
		let mut file = fs::File::create(file_path)?;
		file.write_all(content.as_bytes())?;
		Ok(())
	}

	#[rstest]
	fn test_load_template() {
		let temp_dir = TempDir::new().unwrap();
		create_test_template(temp_dir.path(), "views/new-form.html", "<form></form>").unwrap();

		let loader = TemplateLoader::new([temp_dir.path()], true);

		assert_eq!(loader.load("views/new-form.html").unwrap(), "<form></form>");
		assert_eq!(loader.load("/views/new-form.html").unwrap(), "<form></form>");
	}

	#[rstest]
	fn test_first_directory_wins() {
		let first = TempDir::new().unwrap();
		let second = TempDir::new().unwrap();
		create_test_template(first.path(), "base.html", "first").unwrap();
		create_test_template(second.path(), "base.html", "second").unwrap();
		create_test_template(second.path(), "only-second.html", "fallback").unwrap();

		let loader = TemplateLoader::new([first.path(), second.path()], false);

		assert_eq!(loader.load("base.html").unwrap(), "first");
		assert_eq!(loader.load("only-second.html").unwrap(), "fallback");
	}

	#[rstest]
	#[case("missing.html")]
	#[case("../outside.html")]
	#[case("views/../../outside.html")]
	#[case("")]
	fn test_unknown_or_unsafe_name_is_not_found(#[case] name: &str) {
		let temp_dir = TempDir::new().unwrap();
		let loader = TemplateLoader::new([temp_dir.path()], true);

		assert!(matches!(loader.load(name), Err(ViewError::ViewNotFound(_))));
	}

	#[rstest]
	fn test_directory_is_not_a_template() {
		let temp_dir = TempDir::new().unwrap();
		fs::create_dir_all(temp_dir.path().join("views")).unwrap();
		let loader = TemplateLoader::new([temp_dir.path()], true);

		assert!(matches!(loader.load("views"), Err(ViewError::ViewNotFound(_))));
	}

	#[rstest]
	fn test_cache_serves_stale_source_until_cleared() {
		// Arrange
		let temp_dir = TempDir::new().unwrap();
		create_test_template(temp_dir.path(), "page.html", "v1").unwrap();
		let loader = TemplateLoader::new([temp_dir.path()], true);
		assert_eq!(loader.load("page.html").unwrap(), "v1");

		// Act
		create_test_template(temp_dir.path(), "page.html", "v2").unwrap();

		// Assert
		assert_eq!(loader.load("page.html").unwrap(), "v1");
		loader.clear_cache();
		assert_eq!(loader.load("page.html").unwrap(), "v2");
	}

	#[rstest]
	fn test_without_cache_reads_fresh_source() {
		let temp_dir = TempDir::new().unwrap();
		create_test_template(temp_dir.path(), "page.html", "v1").unwrap();
		let loader = TemplateLoader::new([temp_dir.path()], false);
		loader.load("page.html").unwrap();

		create_test_template(temp_dir.path(), "page.html", "v2").unwrap();

		assert_eq!(loader.load("page.html").unwrap(), "v2");
	}

	#[cfg(unix)]
	#[rstest]
	fn test_load_all_skips_symlink_leaving_directory() {
		// Arrange
		let temp_dir = TempDir::new().unwrap();
		let outside = TempDir::new().unwrap();
		create_test_template(temp_dir.path(), "views/new-form.html", "<form></form>").unwrap();
		create_test_template(outside.path(), "secret.html", "secret").unwrap();
		std::os::unix::fs::symlink(
			outside.path().join("secret.html"),
			temp_dir.path().join("views/link.html"),
		)
		.unwrap();
		let loader = TemplateLoader::new([temp_dir.path()], true);

		// Act
		let all = loader.load_all().unwrap();

		// Assert
		assert_eq!(all.keys().map(String::as_str).collect::<Vec<_>>(), vec!["views/new-form.html"]);
		assert!(matches!(loader.load("views/link.html"), Err(ViewError::ViewNotFound(_))));
	}

	#[rstest]
	fn test_load_all_collects_nested_templates() {
		let first = TempDir::new().unwrap();
		let second = TempDir::new().unwrap();
		create_test_template(first.path(), "base.html", "first base").unwrap();
		create_test_template(first.path(), "views/members.html", "members").unwrap();
		create_test_template(second.path(), "base.html", "second base").unwrap();
		create_test_template(second.path(), "404.html", "not found").unwrap();
		let missing = first.path().join("does-not-exist");

		let loader = TemplateLoader::new([first.path().to_path_buf(), missing, second.path().to_path_buf()], true);
		let all = loader.load_all().unwrap();

		assert_eq!(
			all.keys().map(String::as_str).collect::<Vec<_>>(),
			vec!["404.html", "base.html", "views/members.html"]
		);
		assert_eq!(all["base.html"], "first base");
	}
}
