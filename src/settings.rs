// Copyright 2025 Chainflip Labs GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

pub mod redact_endpoint_secret;

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::constants::{
	DEFAULT_ETH_HTTP_NODE_ENDPOINT, DEFAULT_SETTINGS_PATH, ETH_EXPECTED_CHAIN_ID,
	ETH_HTTP_NODE_ENDPOINT,
};
use redact_endpoint_secret::SecretUrl;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Eth {
	pub http_node_endpoint: SecretUrl,
	pub expected_chain_id: Option<u64>,
}

impl Default for Eth {
	fn default() -> Self {
		Self {
			http_node_endpoint: DEFAULT_ETH_HTTP_NODE_ENDPOINT.into(),
			expected_chain_id: None,
		}
	}
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
	pub eth: Eth,
}

#[derive(Parser, Debug, Clone, Default)]
#[clap(version, about = "Connects to an EVM JSON-RPC endpoint and reports its chain id.")]
pub struct ProbeOptions {
	#[clap(short = 'c', long = "config-path", help = "Path to a settings file.")]
	pub config_path: Option<String>,

	// Eth Settings
	#[clap(
		long = "eth.http_node_endpoint",
		env = ETH_HTTP_NODE_ENDPOINT,
		help = "The Ethereum node's HTTP JSON-RPC endpoint."
	)]
	pub eth_http_node_endpoint: Option<String>,
	#[clap(
		long = "eth.expected_chain_id",
		env = ETH_EXPECTED_CHAIN_ID,
		help = "Fail unless the endpoint reports this chain id."
	)]
	pub eth_expected_chain_id: Option<u64>,
}

impl Settings {
	/// Settings file first, then the environment, then command line options,
	/// overwriting anything that matches.
	pub fn new(opts: &ProbeOptions) -> Result<Self, ConfigError> {
		let file = match &opts.config_path {
			Some(path) => File::with_name(path),
			None => File::with_name(DEFAULT_SETTINGS_PATH).required(false),
		};

		let mut settings: Self = Config::builder()
			.add_source(file)
			.add_source(Environment::default().separator("__"))
			.build()?
			.try_deserialize()?;

		if let Some(opt) = &opts.eth_http_node_endpoint {
			settings.eth.http_node_endpoint = opt.clone().into()
		};
		if let Some(opt) = opts.eth_expected_chain_id {
			settings.eth.expected_chain_id = Some(opt)
		};

		settings.validate_settings()?;

		Ok(settings)
	}

	pub fn validate_settings(&self) -> Result<(), ConfigError> {
		validate_http_endpoint(&self.eth.http_node_endpoint)
			.map_err(|e| ConfigError::Message(e.to_string()))
	}
}

fn validate_http_endpoint(endpoint: &SecretUrl) -> anyhow::Result<()> {
	let url = Url::parse(endpoint.as_ref())
		.map_err(|e| anyhow::anyhow!("Invalid node endpoint {endpoint}: {e}"))?;
	match url.scheme() {
		"http" | "https" => Ok(()),
		scheme => Err(anyhow::anyhow!(
			"Invalid scheme `{scheme}` in node endpoint {endpoint}, expected http or https"
		)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn init_default_settings() {
		let settings = Settings::default();

		assert_eq!(
			settings.eth.http_node_endpoint.as_ref(),
			DEFAULT_ETH_HTTP_NODE_ENDPOINT
		);
		assert_eq!(settings.eth.expected_chain_id, None);
		assert!(settings.validate_settings().is_ok());
	}

	#[test]
	fn cmd_line_options_take_precedence() {
		let opts = ProbeOptions {
			eth_http_node_endpoint: Some("http://localhost:8545".to_owned()),
			eth_expected_chain_id: Some(5),
			..Default::default()
		};

		let settings = Settings::new(&opts).unwrap();

		assert_eq!(settings.eth.http_node_endpoint.as_ref(), "http://localhost:8545");
		assert_eq!(settings.eth.expected_chain_id, Some(5));
	}

	#[test]
	fn validation_rejects_non_http_endpoints() {
		for endpoint in ["ws://localhost:8546", "localhost:8545", "not a url"] {
			let opts = ProbeOptions {
				eth_http_node_endpoint: Some(endpoint.to_owned()),
				..Default::default()
			};
			assert!(Settings::new(&opts).is_err(), "expected `{endpoint}` to be rejected");
		}
	}
}
