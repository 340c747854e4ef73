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

use std::process::ExitCode;

use clap::Parser;

use chain_probe::{
	eth::rpc::EthRpcClient,
	exit_status,
	probe::{probe, ProbeError, ProbeReport},
	settings::{ProbeOptions, Settings},
};

async fn run(settings: &Settings) -> Result<ProbeReport, ProbeError> {
	let eth_rpc = EthRpcClient::new(&settings.eth).map_err(ProbeError::Connect)?;
	probe(&eth_rpc, settings.eth.expected_chain_id).await
}

#[tokio::main]
async fn main() -> ExitCode {
	let opts = ProbeOptions::parse();
	// Logs go to stderr so stdout carries nothing but the report line.
	tracing_subscriber::FmtSubscriber::builder()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.try_init()
		.expect("setting default subscriber failed");

	let settings = match Settings::new(&opts) {
		Ok(settings) => settings,
		Err(e) => {
			tracing::error!("Failed to read settings: {e}");
			return ExitCode::from(exit_status::ERROR_READING_SETTINGS)
		},
	};

	match run(&settings).await {
		Ok(report) => {
			println!("{report}");
			ExitCode::from(exit_status::SUCCESS)
		},
		Err(e) => {
			tracing::error!("{e}");
			ExitCode::from(e.exit_status())
		},
	}
}
