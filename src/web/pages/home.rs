// © 2025 The Legal Docs Developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::site::METADATA;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
	view! {
		<main id="home_page">
			<h1>{METADATA.title}</h1>
			<p>{METADATA.description}</p>
		</main>
	}
}
