//! Tera-based view renderer
//!
//! Renders views with the Tera template engine, using the request's
//! attributes as the template context. Templates come either from raw
//! strings registered up front or from template directories on disk.
//!
//! Tera needs every template of an inheritance chain registered together,
//! so directory-backed renderers register the whole directory tree at once
//! and re-register it on [`TeraRenderer::reload`]. When template caching is
//! disabled every render reloads first, so edits show up immediately.
//!
//! # Examples
//!
//! ```
//! use frontdoor_http::Request;
//! use frontdoor_views::{TeraRenderer, ViewRenderer};
//!
//! let renderer = TeraRenderer::from_templates([
//!     ("base.html", "<main>{% block content %}{% endblock %}</main>"),
//!     ("views/hello.html", r#"{% extends "base.html" %}{% block content %}Hi {{ name }}{% endblock %}"#),
//! ])
//! .unwrap();
//!
//! let request = Request::builder().uri("/hello").build().unwrap();
//! request.set_attribute("name", "kim");
//!
//! let rendered = renderer.render("views/hello.html", &request).unwrap();
//! assert_eq!(rendered.body, "<main>Hi kim</main>");
//! ```

use crate::renderer::{Rendered, ViewRenderer};
use crate::{TemplateLoader, ViewError, ViewResult};
use frontdoor_conf::ViewSettings;
use frontdoor_http::Request;
use serde_json::Value;
use std::error::Error as _;
use std::path::Path;
use std::sync::RwLock;
use tera::{Context, Tera};

/// Tera renderer implementing [`ViewRenderer`]
pub struct TeraRenderer {
	engine: RwLock<Tera>,
	loader: Option<TemplateLoader>,
}

impl TeraRenderer {
	/// Renderer over raw `(name, source)` templates
	///
	/// # Errors
	///
	/// [`ViewError::Template`] if a template fails to parse or extends a
	/// template that is not part of the set.
	pub fn from_templates<I, N, C>(templates: I) -> ViewResult<Self>
	where
		I: IntoIterator<Item = (N, C)>,
		N: AsRef<str>,
		C: AsRef<str>,
	{
		let mut tera = Tera::default();
		tera.add_raw_templates(templates)
			.map_err(|e| template_error("<raw templates>", &e))?;

		Ok(Self {
			engine: RwLock::new(tera),
			loader: None,
		})
	}

	/// Renderer over every template below `loader`'s directories
	///
	/// # Errors
	///
	/// [`ViewError::Io`] if a directory cannot be read, [`ViewError::Template`]
	/// if a template fails to parse.
	pub fn from_loader(loader: TemplateLoader) -> ViewResult<Self> {
		let tera = build_engine(&loader)?;
		tracing::debug!(
			dirs = ?loader.dirs(),
			templates = tera.get_template_names().count(),
			"template directories registered"
		);

		Ok(Self {
			engine: RwLock::new(tera),
			loader: Some(loader),
		})
	}

	/// Renderer over every template below `dirs`, searched in order
	pub fn from_dirs<I, P>(dirs: I, use_cache: bool) -> ViewResult<Self>
	where
		I: IntoIterator<Item = P>,
		P: Into<std::path::PathBuf>,
	{
		Self::from_loader(TemplateLoader::new(dirs, use_cache))
	}

	/// Renderer over the template directories named in `settings`
	///
	/// Relative directories are resolved against `base_dir`.
	pub fn from_settings(settings: &ViewSettings, base_dir: &Path) -> ViewResult<Self> {
		Self::from_dirs(settings.resolve_template_dirs(base_dir), settings.cache_templates)
	}

	/// Whether a template with this name is registered
	pub fn has_template(&self, name: &str) -> bool {
		let name = name.trim_start_matches('/');
		let engine = self.engine.read().unwrap_or_else(|e| e.into_inner());
		engine.get_template_names().any(|registered| registered == name)
	}

	/// Sorted names of all registered templates
	pub fn template_names(&self) -> Vec<String> {
		let engine = self.engine.read().unwrap_or_else(|e| e.into_inner());
		let mut names: Vec<String> = engine.get_template_names().map(str::to_string).collect();
		names.sort();
		names
	}

	/// Re-read the template directories
	///
	/// A no-op for renderers built from raw templates. On error the
	/// previously registered templates stay in place.
	pub fn reload(&self) -> ViewResult<()> {
		let Some(loader) = &self.loader else {
			return Ok(());
		};
		loader.clear_cache();
		let tera = build_engine(loader)?;
		let mut engine = self.engine.write().unwrap_or_else(|e| e.into_inner());
		*engine = tera;
		Ok(())
	}
}

impl ViewRenderer for TeraRenderer {
	fn render(&self, path: &str, request: &Request) -> ViewResult<Rendered> {
		if self.loader.as_ref().is_some_and(|loader| !loader.uses_cache()) {
			self.reload()?;
		}

		let name = path.trim_start_matches('/');
		if !self.has_template(name) {
			tracing::warn!(view = path, "view template not found");
			return Err(ViewError::ViewNotFound(path.to_string()));
		}

		let context = Context::from_value(Value::Object(request.attributes().snapshot()))
			.map_err(|e| template_error(path, &e))?;

		let engine = self.engine.read().unwrap_or_else(|e| e.into_inner());
		let html = engine.render(name, &context).map_err(|e| {
			match io_source(&e) {
				Some(kind) => ViewError::Io(std::io::Error::new(kind, describe(&e))),
				None => template_error(path, &e),
			}
		})?;

		Ok(Rendered::html(html))
	}
}

fn build_engine(loader: &TemplateLoader) -> ViewResult<Tera> {
	let templates = loader.load_all()?;
	let mut tera = Tera::default();
	tera.add_raw_templates(templates.iter().map(|(name, source)| (name.as_str(), source.as_str())))
		.map_err(|e| template_error("<template directories>", &e))?;
	Ok(tera)
}

fn template_error(path: &str, error: &tera::Error) -> ViewError {
	ViewError::Template {
		path: path.to_string(),
		message: describe(error),
	}
}

/// Error message with its whole source chain; Tera's top-level message
/// rarely names the actual cause
fn describe(error: &tera::Error) -> String {
	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}

fn io_source(error: &tera::Error) -> Option<std::io::ErrorKind> {
	let mut source = error.source();
	while let Some(cause) = source {
		if let Some(io) = cause.downcast_ref::<std::io::Error>() {
			return Some(io.kind());
		}
		source = cause.source();
	}
	None
}
