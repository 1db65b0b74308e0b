// © 2025 The Legal Docs Developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlValue};
use miette::{Diagnostic, IntoDiagnostic, Result};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_str(&config_file_contents)
}

pub fn parse_config_str(contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;
	Ok(ConfigData::from_document(&document)?)
}

#[derive(Debug, Diagnostic, Error, PartialEq)]
pub enum ConfigError {
	#[error("The configuration is missing the `{0}` node")]
	#[diagnostic(code(legal_docs::config::missing_node))]
	MissingNode(&'static str),
	#[error("The `{0}` setting must be a string")]
	#[diagnostic(code(legal_docs::config::not_a_string))]
	NotAString(&'static str),
	#[error("`{0}` is not a valid socket address")]
	#[diagnostic(
		code(legal_docs::config::bad_bind_addr),
		help("Use an address and port, such as \"127.0.0.1:3000\"")
	)]
	InvalidBindAddress(String),
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub log_filter: Option<String>,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: SocketAddr,
}

impl ConfigData {
	fn from_document(document: &KdlDocument) -> Result<Self, ConfigError> {
		let web_document = document
			.get("web")
			.and_then(|node| node.children())
			.ok_or(ConfigError::MissingNode("web"))?;
		let bind_addr = string_arg(web_document, "bind_addr")?.ok_or(ConfigError::MissingNode("bind_addr"))?;
		let bind_addr = bind_addr
			.parse()
			.map_err(|_| ConfigError::InvalidBindAddress(bind_addr.to_string()))?;

		let log_filter = string_arg(document, "log_filter")?.map(String::from);

		Ok(Self {
			web: WebConfig { bind_addr },
			log_filter,
		})
	}
}

fn string_arg<'a>(document: &'a KdlDocument, name: &'static str) -> Result<Option<&'a str>, ConfigError> {
	match document.get_arg(name) {
		Some(KdlValue::String(value)) => Ok(Some(value.as_str())),
		Some(_) => Err(ConfigError::NotAString(name)),
		None => Ok(None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn parses_full_config() {
		let config = parse_config_str(
			"web {\n\tbind_addr \"0.0.0.0:8080\"\n}\nlog_filter \"legal_docs=debug\"\n",
		)
		.unwrap();
		assert_eq!(config.web.bind_addr, "0.0.0.0:8080".parse().unwrap());
		assert_eq!(config.log_filter.as_deref(), Some("legal_docs=debug"));
	}

	#[test]
	fn log_filter_is_optional() {
		let config = parse_config_str("web {\n\tbind_addr \"127.0.0.1:3000\"\n}\n").unwrap();
		assert!(config.log_filter.is_none());
	}

	#[test]
	fn missing_web_node() {
		let document: KdlDocument = "log_filter \"info\"".parse().unwrap();
		let error = ConfigData::from_document(&document).unwrap_err();
		assert_eq!(error, ConfigError::MissingNode("web"));
	}

	#[test]
	fn missing_bind_addr() {
		let document: KdlDocument = "web {\n}\n".parse().unwrap();
		let error = ConfigData::from_document(&document).unwrap_err();
		assert_eq!(error, ConfigError::MissingNode("bind_addr"));
	}

	#[test]
	fn bind_addr_must_be_string() {
		let document: KdlDocument = "web {\n\tbind_addr 3000\n}\n".parse().unwrap();
		let error = ConfigData::from_document(&document).unwrap_err();
		assert_eq!(error, ConfigError::NotAString("bind_addr"));
	}

	#[test]
	fn bind_addr_must_be_socket_address() {
		let document: KdlDocument = "web {\n\tbind_addr \"localhost\"\n}\n".parse().unwrap();
		let error = ConfigData::from_document(&document).unwrap_err();
		assert_eq!(error, ConfigError::InvalidBindAddress(String::from("localhost")));
	}

	#[test]
	fn syntax_errors_are_reported() {
		assert!(parse_config_str("web {").is_err());
	}

	#[tokio::test]
	async fn reads_config_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "web {{\n\tbind_addr \"127.0.0.1:4000\"\n}}").unwrap();

		let path = file.path().to_str().unwrap();
		let config = parse_config(path).await.unwrap();
		assert_eq!(config.web.bind_addr.port(), 4000);
	}

	#[tokio::test]
	async fn missing_file_is_an_error() {
		let directory = tempfile::tempdir().unwrap();
		let path = directory.path().join("absent.kdl");
		assert!(parse_config(path.to_str().unwrap()).await.is_err());
	}
}
