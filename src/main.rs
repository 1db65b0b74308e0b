// © 2025 The Legal Docs Developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use legal_docs::config::parse_config;
	use legal_docs::logging::init_logging;
	use legal_docs::web::server::run_server;
	use std::sync::Arc;

	let config_path = std::env::args().nth(1).unwrap_or_else(|| String::from("config.kdl"));
	let config = parse_config(&config_path).await?;
	init_logging(config.log_filter.as_deref());

	tracing::info!(path = %config_path, "Loaded configuration");

	if let Err(error) = run_server(Arc::new(config)).await {
		tracing::error!(source = ?error, "Web server failed to run");
		return Err(error);
	}

	Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The client side is started through the `hydrate` entry point in the library.
}
