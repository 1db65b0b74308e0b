// © 2025 The Legal Docs Developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static site-wide values shared by every page: the document metadata and the web font.

pub const DOCUMENT_LANGUAGE: &str = "en";

/// Path of the global stylesheet compiled from `style/globals.scss` by cargo-leptos.
pub const GLOBAL_STYLESHEET: &str = "/pkg/legal-docs.css";

pub const METADATA: SiteMetadata = SiteMetadata {
	title: "Legal Document Generator",
	description: "AI-assisted legal document generation service",
};

pub const SITE_FONT: WebFont = WebFont {
	family: "Inter",
	subsets: &["latin"],
	class_name: "font-inter",
};

/// Metadata injected into the document head of every page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SiteMetadata {
	pub title: &'static str,
	pub description: &'static str,
}

/// A web font loaded from Google Fonts and applied through a CSS class.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WebFont {
	pub family: &'static str,
	pub subsets: &'static [&'static str],
	/// Class put on `<body>`; `style/globals.scss` maps it to the font family.
	pub class_name: &'static str,
}

impl WebFont {
	pub fn stylesheet_href(&self) -> String {
		let family = self.family.replace(' ', "+");
		let mut href = format!("https://fonts.googleapis.com/css?family={}", family);
		if !self.subsets.is_empty() {
			href.push_str("&subset=");
			href.push_str(&self.subsets.join(","));
		}
		href.push_str("&display=swap");
		href
	}
}
