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

use ethers::prelude::*;

use anyhow::{Context, Result};

use crate::{
	constants::ETH_HTTP_REQUEST_TIMEOUT,
	settings::{self, redact_endpoint_secret::SecretUrl},
};

#[cfg(test)]
use mockall::automock;

#[derive(Clone)]
pub struct EthRpcClient {
	provider: Provider<Http>,
	endpoint: SecretUrl,
}

impl EthRpcClient {
	pub fn new(eth_settings: &settings::Eth) -> Result<Self> {
		let endpoint = eth_settings.http_node_endpoint.clone();
		tracing::info!("Connecting to ETH node at {endpoint}");
		let provider = Provider::<Http>::try_from(endpoint.as_ref())
			.context("Failed to create HTTP provider for ETH node endpoint")?;
		Ok(Self { provider, endpoint })
	}
}

// We use a trait so we can inject a mock in the tests
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait EthRpcApi: Send + Sync {
	async fn chain_id(&self) -> Result<U256>;
}

#[async_trait::async_trait]
impl EthRpcApi for EthRpcClient {
	async fn chain_id(&self) -> Result<U256> {
		tokio::time::timeout(ETH_HTTP_REQUEST_TIMEOUT, self.provider.get_chainid())
			.await
			.context("HTTP client: chain_id request timeout")?
			// Provider errors embed the request url, access key included, so
			// they are scrubbed before they can reach a log line.
			.map_err(|e| {
				anyhow::anyhow!(
					"{}",
					self.endpoint.redact_in(&format!("{:#}", anyhow::Error::new(e)))
				)
			})
			.context("HTTP client: Failed to fetch ETH ChainId")
	}
}
