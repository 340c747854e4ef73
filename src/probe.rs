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

use std::fmt;

use crate::{
	eth::{network::EthNetwork, rpc::EthRpcApi},
	exit_status,
};

#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
	#[error("Failed to connect to the ETH node: {0:#}")]
	Connect(anyhow::Error),
	#[error("Failed to query the ETH node's chain id: {0:#}")]
	Query(anyhow::Error),
	#[error("ETH node reports chain id {reported}, expected {expected}")]
	ChainIdMismatch { reported: u64, expected: u64 },
}

impl ProbeError {
	pub fn exit_status(&self) -> u8 {
		match self {
			ProbeError::Connect(_) => exit_status::CONNECT_FAILED,
			ProbeError::Query(_) => exit_status::QUERY_FAILED,
			ProbeError::ChainIdMismatch { .. } => exit_status::CHAIN_ID_MISMATCH,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
	pub chain_id: u64,
	pub network: EthNetwork,
}

impl fmt::Display for ProbeReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Connected to {} - Chain ID: {}", self.network, self.chain_id)
	}
}

/// Issues exactly one chain id request against the node and names the network
/// it is serving. No retries: a failed request is a failed probe.
pub async fn probe<EthRpc: EthRpcApi>(
	eth_rpc: &EthRpc,
	expected_chain_id: Option<u64>,
) -> Result<ProbeReport, ProbeError> {
	let chain_id = eth_rpc.chain_id().await.map_err(ProbeError::Query)?;

	// Chain ids fit into a u64 on every real network. An endpoint reporting
	// otherwise is returning garbage.
	if chain_id.bits() > 64 {
		return Err(ProbeError::Query(anyhow::anyhow!(
			"ETH node reported an out of range chain id: {chain_id}"
		)));
	}
	let chain_id = chain_id.as_u64();

	if let Some(expected) = expected_chain_id {
		if chain_id != expected {
			return Err(ProbeError::ChainIdMismatch { reported: chain_id, expected });
		}
	}

	Ok(ProbeReport { chain_id, network: EthNetwork::from_chain_id(chain_id) })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::eth::rpc::MockEthRpcApi;
	use ethers::types::U256;

	#[tokio::test]
	async fn test_probe_goerli() {
		let mut eth_rpc = MockEthRpcApi::new();
		eth_rpc.expect_chain_id().once().returning(|| Ok(U256::from(5)));

		let report = probe(&eth_rpc, None).await.unwrap();

		assert_eq!(report, ProbeReport { chain_id: 5, network: EthNetwork::Goerli });
		assert_eq!(report.to_string(), "Connected to Goerli - Chain ID: 5");
	}

	#[tokio::test]
	async fn test_probe_unknown_network() {
		let mut eth_rpc = MockEthRpcApi::new();
		eth_rpc.expect_chain_id().once().returning(|| Ok(U256::from(1337)));

		let report = probe(&eth_rpc, None).await.unwrap();

		assert_eq!(report.network, EthNetwork::Unknown(1337));
		assert_eq!(report.to_string(), "Connected to Unknown - Chain ID: 1337");
	}

	#[tokio::test]
	async fn test_query_failure_is_surfaced() {
		let mut eth_rpc = MockEthRpcApi::new();
		eth_rpc
			.expect_chain_id()
			.once()
			.returning(|| Err(anyhow::anyhow!("connection refused")));

		let error = probe(&eth_rpc, None).await.unwrap_err();

		assert!(matches!(error, ProbeError::Query(_)));
		assert_eq!(error.exit_status(), exit_status::QUERY_FAILED);
	}

	#[tokio::test]
	async fn test_expected_chain_id_mismatch() {
		let mut eth_rpc = MockEthRpcApi::new();
		eth_rpc.expect_chain_id().once().returning(|| Ok(U256::from(1)));

		let error = probe(&eth_rpc, Some(5)).await.unwrap_err();

		assert!(
			matches!(error, ProbeError::ChainIdMismatch { reported: 1, expected: 5 }),
			"unexpected error: {error}"
		);
		assert_eq!(error.exit_status(), exit_status::CHAIN_ID_MISMATCH);
	}

	#[tokio::test]
	async fn test_expected_chain_id_match() {
		let mut eth_rpc = MockEthRpcApi::new();
		eth_rpc.expect_chain_id().once().returning(|| Ok(U256::from(5)));

		assert_eq!(probe(&eth_rpc, Some(5)).await.unwrap().chain_id, 5);
	}

	#[tokio::test]
	async fn test_out_of_range_chain_id_is_a_query_failure() {
		let mut eth_rpc = MockEthRpcApi::new();
		eth_rpc.expect_chain_id().once().returning(|| Ok(U256::MAX));

		assert!(matches!(probe(&eth_rpc, None).await.unwrap_err(), ProbeError::Query(_)));
	}
}
