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

use std::time::Duration;

// ======= Eth Rpc Client =======

/// Duration before we timeout an HTTP request to the Ethereum node
pub const ETH_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint used when no settings file, environment variable or flag provides
/// one. The access key segment is deliberately absent and must come from
/// configuration.
pub const DEFAULT_ETH_HTTP_NODE_ENDPOINT: &str = "https://goerli.infura.io/v3/";

// ======= Settings environment variables =======

/// A HTTP node endpoint for Ethereum
pub const ETH_HTTP_NODE_ENDPOINT: &str = "ETH__HTTP_NODE_ENDPOINT";

/// Chain id the endpoint is expected to report
pub const ETH_EXPECTED_CHAIN_ID: &str = "ETH__EXPECTED_CHAIN_ID";

/// Settings file read when no `--config-path` is given
pub const DEFAULT_SETTINGS_PATH: &str = "config/Default";
