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

use assert_cmd::Command;
use predicates::prelude::*;

use chain_probe::exit_status;

const SECRET: &str = "ad0b336d7f2f4082b5a624e50d27df5c";

/// Stdout carries nothing but the report line, so a failed run leaves it
/// empty, and the access key never reaches the logs on stderr.
#[test]
fn failed_run_keeps_stdout_empty_and_stderr_free_of_secrets() {
	Command::cargo_bin("chain-probe")
		.unwrap()
		.args(["--eth.http_node_endpoint", &format!("http://127.0.0.1:9/v3/{SECRET}")])
		.env("RUST_LOG", "error")
		.env_remove("ETH__EXPECTED_CHAIN_ID")
		.assert()
		.code(i32::from(exit_status::QUERY_FAILED))
		.stdout("")
		.stderr(predicate::str::contains(SECRET).not());
}
