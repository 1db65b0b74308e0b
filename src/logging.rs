// © 2025 The Legal Docs Developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "legal_docs=info,info";

/// Sets up the global tracing subscriber.
/// `RUST_LOG` takes precedence over the filter from the configuration file.
pub fn init_logging(config_filter: Option<&str>) {
	let (filter, rejected_filter) = match EnvFilter::try_from_default_env() {
		Ok(filter) => (filter, None),
		Err(_) => config_or_default_filter(config_filter),
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_target(false).compact())
		.init();

	if let Some(error) = rejected_filter {
		tracing::warn!(%error, default = DEFAULT_FILTER, "Invalid log_filter in configuration; using the default");
	}
}

/// Falls back to the default filter when the configured one doesn't parse, handing back the parse error.
fn config_or_default_filter(config_filter: Option<&str>) -> (EnvFilter, Option<ParseError>) {
	match config_filter.map(EnvFilter::try_new) {
		Some(Ok(filter)) => (filter, None),
		Some(Err(error)) => (EnvFilter::new(DEFAULT_FILTER), Some(error)),
		None => (EnvFilter::new(DEFAULT_FILTER), None),
	}
}
