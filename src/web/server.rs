// © 2025 The Legal Docs Developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pages::app::App;
use super::pages::shell::shell;
use crate::config::ConfigData;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

pub async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let site_addr = config.web.bind_addr;
	let leptos_options = web_config.leptos_options;
	let routes = generate_route_list(App);

	let app = router(leptos_options, routes);

	tracing::info!(%site_addr, "Listening on http://{}", site_addr);
	let listener = TcpListener::bind(site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

fn router(leptos_options: LeptosOptions, routes: Vec<leptos_axum::AxumRouteListing>) -> Router {
	Router::new()
		.leptos_routes(&leptos_options, routes, {
			let leptos_options = leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback(file_and_error_handler)
		.with_state(leptos_options)
}

async fn file_and_error_handler(uri: Uri, State(options): State<LeptosOptions>, request: Request) -> Response {
	let response = get_static_file(uri, &options.site_root).await;
	let response = match response {
		Ok(response) => response,
		Err(error) => return error.into_response(),
	};

	if response.status() == StatusCode::OK {
		response
	} else {
		tracing::debug!(path = %request.uri().path(), "No static file; rendering application");
		let handler = render_app_to_stream(move || shell(options.clone()));
		handler(request).await.into_response()
	}
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
	let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	};

	match ServeDir::new(root).oneshot(request).await {
		Ok(response) => Ok(response.into_response()),
		Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn serves_files_from_site_root() {
		let site_root = tempfile::tempdir().unwrap();
		std::fs::write(site_root.path().join("favicon.ico"), b"icon").unwrap();

		let uri: Uri = "/favicon.ico".parse().unwrap();
		let response = get_static_file(uri, site_root.path().to_str().unwrap()).await.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn missing_static_file_is_not_ok() {
		let site_root = tempfile::tempdir().unwrap();

		let uri: Uri = "/pkg/missing.css".parse().unwrap();
		let response = get_static_file(uri, site_root.path().to_str().unwrap()).await.unwrap();
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}
}
