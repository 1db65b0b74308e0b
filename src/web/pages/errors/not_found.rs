// © 2025 The Legal Docs Developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
	#[cfg(feature = "ssr")]
	{
		use leptos_axum::ResponseOptions;
		if let Some(response) = use_context::<ResponseOptions>() {
			response.set_status(axum::http::StatusCode::NOT_FOUND);
		}
	}

	view! {
		<main id="not_found_page">
			<h1>"Page not found"</h1>
			<p>"There is no page at this address."</p>
			<a href="/">"Back to the document generator"</a>
		</main>
	}
}
