// © 2025 The Legal Docs Developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::app::App;
use crate::web::site::{DOCUMENT_LANGUAGE, GLOBAL_STYLESHEET, METADATA, SITE_FONT};
use leptos::prelude::*;
use leptos_meta::MetaTags;

pub fn shell(options: LeptosOptions) -> impl IntoView {
	view! {
		<RootLayout options>
			<App />
		</RootLayout>
	}
}

/// The document every page is rendered into.
/// Sets the font, the global stylesheet and the site metadata; page content is placed in the body as given.
#[component]
pub fn RootLayout(options: LeptosOptions, children: Children) -> impl IntoView {
	view! {
		<!DOCTYPE html>
		<html lang=DOCUMENT_LANGUAGE>
			<head>
				<meta charset="utf-8" />
				<meta name="viewport" content="width=device-width, initial-scale=1" />
				<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="" />
				<link rel="stylesheet" href={SITE_FONT.stylesheet_href()} />
				<link rel="stylesheet" id="leptos" href=GLOBAL_STYLESHEET />
				<title>{METADATA.title}</title>
				<meta name="description" content={METADATA.description} />
				<HydrationScripts options />
				<MetaTags />
			</head>
			<body class={SITE_FONT.class_name}>
				{children()}
			</body>
		</html>
	}
}
