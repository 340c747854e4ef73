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

/// Ethereum networks we can name from their chain id. Chain ids distinguish
/// networks to prevent cross-network transaction replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EthNetwork {
	Mainnet,
	Goerli,
	Sepolia,
	Holesky,
	Unknown(u64),
}

impl EthNetwork {
	pub fn from_chain_id(chain_id: u64) -> Self {
		match chain_id {
			1 => EthNetwork::Mainnet,
			5 => EthNetwork::Goerli,
			11155111 => EthNetwork::Sepolia,
			17000 => EthNetwork::Holesky,
			id => EthNetwork::Unknown(id),
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			EthNetwork::Mainnet => "Mainnet",
			EthNetwork::Goerli => "Goerli",
			EthNetwork::Sepolia => "Sepolia",
			EthNetwork::Holesky => "Holesky",
			EthNetwork::Unknown(_) => "Unknown",
		}
	}
}

impl fmt::Display for EthNetwork {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_networks() {
		assert_eq!(EthNetwork::from_chain_id(1), EthNetwork::Mainnet);
		assert_eq!(EthNetwork::from_chain_id(5), EthNetwork::Goerli);
		assert_eq!(EthNetwork::from_chain_id(11155111), EthNetwork::Sepolia);
		assert_eq!(EthNetwork::from_chain_id(17000), EthNetwork::Holesky);
	}

	#[test]
	fn test_unknown_network() {
		assert_eq!(EthNetwork::from_chain_id(137), EthNetwork::Unknown(137));
		assert_eq!(EthNetwork::from_chain_id(137).to_string(), "Unknown");
	}
}
