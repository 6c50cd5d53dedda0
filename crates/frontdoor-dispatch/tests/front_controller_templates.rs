//! Front controller over Tera templates
//!
//! Covers:
//! - A member-management flow (new form, save, list) end to end
//! - Custom 404 template and the built-in 500 page
//! - Serving one front controller from several threads

use frontdoor_dispatch::{ControllerError, ControllerResult, ErrorPages, FrontController, ModelView};
use frontdoor_http::Request;
use frontdoor_views::{TeraRenderer, ViewResolver};
use hyper::{Method, StatusCode};
use rstest::*;
use serde::Serialize;
use std::sync::Arc;
use std::thread;

#[derive(Serialize)]
struct Member {
	id: u64,
	username: String,
	age: u32,
}

fn save_member(request: &Request) -> ControllerResult {
	let body = String::from_utf8_lossy(&request.body).into_owned();
	let mut username = None;
	let mut age = None;
	for pair in body.split('&') {
		match pair.split_once('=') {
			Some(("username", value)) => username = Some(value.to_string()),
			Some(("age", value)) => {
				age = Some(
					value
						.parse::<u32>()
						.map_err(|e| ControllerError::Internal(format!("invalid age: {e}")))?,
				)
			}
			_ => {}
		}
	}
	let member = Member {
		id: 1,
		username: username.ok_or_else(|| ControllerError::Internal("missing username".to_string()))?,
		age: age.unwrap_or_default(),
	};
	ModelView::new("save-result").with_serialized("member", &member)
}

#[fixture]
fn front() -> FrontController {
	let renderer = TeraRenderer::from_templates([
		("base.html", "<html><body>{% block content %}{% endblock %}</body></html>"),
		(
			"views/new-form.html",
			r#"{% extends "base.html" %}{% block content %}<form action="save" method="post"></form>{% endblock %}"#,
		),
		(
			"views/save-result.html",
			r#"{% extends "base.html" %}{% block content %}id={{ member.id }} username={{ member.username }} age={{ member.age }}{% endblock %}"#,
		),
		(
			"views/members.html",
			"{% for m in members %}{{ m.username }};{% endfor %}",
		),
		("errors/404.html", "missing {{ request_path | safe }} ({{ status_code }})"),
	])
	.unwrap();

	FrontController::new(ViewResolver::default(), Arc::new(renderer))
		.with_error_pages(ErrorPages::with_prefix("errors/"))
		.forward("/servlet-mvc/members/new-form", "new-form")
		.route("/servlet-mvc/members/save", save_member)
		.route("/servlet-mvc/members", |_request: &Request| -> ControllerResult {
			Ok(ModelView::new("members").with(
				"members",
				serde_json::json!([{"username": "kim"}, {"username": "lee"}]),
			))
		})
		.forward("/servlet-mvc/members/edit", "edit-form")
}

fn get(path: &str) -> Request {
	Request::builder().uri(path).build().unwrap()
}

fn post(path: &str, body: &'static str) -> Request {
	Request::builder()
		.method(Method::POST)
		.uri(path)
		.header("content-type", "application/x-www-form-urlencoded")
		.body(body)
		.build()
		.unwrap()
}

#[rstest]
fn test_new_form(front: FrontController) {
	let response = front.handle(get("/servlet-mvc/members/new-form"));

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.content_type(), Some("text/html; charset=utf-8"));
	assert_eq!(
		response.body_text(),
		r#"<html><body><form action="save" method="post"></form></body></html>"#
	);
}

#[rstest]
fn test_save_renders_result(front: FrontController) {
	let response = front.handle(post("/servlet-mvc/members/save", "username=kim&age=20"));

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(
		response.body_text(),
		"<html><body>id=1 username=kim age=20</body></html>"
	);
}

#[rstest]
fn test_save_with_bad_input_is_500(front: FrontController) {
	let response = front.handle(post("/servlet-mvc/members/save", "username=kim&age=old"));

	assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
	assert!(response.body_text().contains("<h1>Internal Server Error</h1>"));
}

#[rstest]
fn test_members_list(front: FrontController) {
	let response = front.handle(get("/servlet-mvc/members"));

	assert_eq!(response.body_text(), "kim;lee;");
}

#[rstest]
#[case("/servlet-mvc/members/edit")]
#[case("/servlet-mvc/unknown")]
fn test_custom_404_template(front: FrontController, #[case] path: &str) {
	let response = front.handle(get(path));

	assert_eq!(response.status, StatusCode::NOT_FOUND);
	assert_eq!(response.body_text(), format!("missing {path} (404)"));
}

#[rstest]
fn test_shared_across_threads(front: FrontController) {
	let front = Arc::new(front);

	let handles: Vec<_> = (0..8)
		.map(|i| {
			let front = Arc::clone(&front);
			thread::spawn(move || {
				let body: &'static str = if i % 2 == 0 { "username=kim&age=20" } else { "username=lee&age=30" };
				front.handle(post("/servlet-mvc/members/save", body))
			})
		})
		.collect();

	for (i, handle) in handles.into_iter().enumerate() {
		let response = handle.join().unwrap();
		let expected = if i % 2 == 0 { "username=kim age=20" } else { "username=lee age=30" };
		assert_eq!(response.status, StatusCode::OK);
		assert!(response.body_text().contains(expected));
	}
}
