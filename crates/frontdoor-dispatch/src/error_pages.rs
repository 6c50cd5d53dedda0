//! Error page rendering
//!
//! Error pages are ordinary views named after the status code (`404.html`,
//! `500.html`, ...) rendered through the same [`ViewRenderer`] as every
//! other view. When no such template exists, or it fails to render, a
//! built-in page is used instead.

use frontdoor_http::{Request, Response};
use frontdoor_views::ViewRenderer;
use frontdoor_views::renderer::HTML_CONTENT_TYPE;
use hyper::StatusCode;

/// Renders status-coded error pages
#[derive(Clone, Debug, Default)]
pub struct ErrorPages {
	prefix: String,
}

impl ErrorPages {
	pub fn new() -> Self {
		Self::default()
	}

	/// Look error templates up below `prefix`, e.g. `"errors/"` for
	/// `errors/404.html`
	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
		}
	}

	/// Template name used for `status`
	pub fn template_name(&self, status: StatusCode) -> String {
		format!("{}{}.html", self.prefix, status.as_u16())
	}

	/// Render the error page for `status`
	///
	/// The template sees `status_code`, `title` and `request_path`. It is
	/// rendered against a fresh request scope, so attributes a failed
	/// controller or view left behind never leak into the page.
	pub fn render(&self, status: StatusCode, request: &Request, renderer: &dyn ViewRenderer) -> Response {
		let template = self.template_name(status);
		let title = status.canonical_reason().unwrap_or("Error");

		let scope = Request::new(
			request.method.clone(),
			request.uri.clone(),
			request.version,
			request.headers.clone(),
			Default::default(),
		);
		scope.set_attribute("status_code", status.as_u16());
		scope.set_attribute("title", title);
		scope.set_attribute("request_path", request.path());

		let mut response = Response::new(status);
		match renderer.render(&template, &scope) {
			Ok(rendered) => {
				response.commit(&rendered.content_type, rendered.body);
			}
			Err(e) => {
				if !e.is_not_found() {
					tracing::warn!(template = %template, error = %e, "error page template failed, using built-in page");
				}
				response.commit(HTML_CONTENT_TYPE, default_page(status, request.path()));
			}
		}
		response
	}
}

fn default_page(status: StatusCode, path: &str) -> String {
	let code = status.as_u16();
	let (title, message) = match code {
		400 => ("Bad Request", "The request could not be understood by the server."),
		403 => ("Forbidden", "You don't have permission to access this resource."),
		404 => ("Not Found", "The requested page could not be found."),
		405 => ("Method Not Allowed", "The request method is not supported for this resource."),
		500 => ("Internal Server Error", "An error occurred while processing your request."),
		503 => ("Service Unavailable", "The server is currently unable to handle the request."),
		_ => ("Error", "An error occurred while processing your request."),
	};

	format!(
		"<!DOCTYPE html><html><head><title>{code} - {title}</title></head><body><h1>{title}</h1><p>{message}</p><p>Path: {path}</p></body></html>",
		path = escape_html(path),
	)
}

fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
