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

use regex::Regex;
use serde::Deserialize;
use std::{fmt, sync::OnceLock};
use url::Url;

const MAX_SECRET_CHARS_REVEALED: usize = 3;
const MIN_SECRET_LEN: usize = 8;

/// A url that contains a secret (node providers embed access keys in the url
/// path). Both `Display` and `Debug` redact the secret, so the url can be
/// logged safely. Use `as_ref()` to get the full url for the transport.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretUrl(String);

impl SecretUrl {
	/// Replaces the url, and any secret tokens it contains, wherever they
	/// appear in `text`. Transport errors embed the request url, so their
	/// messages must be scrubbed with this before they can be logged.
	pub fn redact_in(&self, text: &str) -> String {
		let mut redacted = text.replace(&self.0, &redact_secret_endpoint(&self.0));
		for token in secret_tokens(&self.0) {
			redacted = redacted.replace(&token, &redact_token(&token));
		}
		redacted
	}
}

/// The parts of the endpoint that can carry an access key: long path
/// segments and the query string.
fn secret_tokens(endpoint: &str) -> Vec<String> {
	match Url::parse(endpoint) {
		Ok(url) if url.host_str().is_some() => url
			.path_segments()
			.into_iter()
			.flatten()
			.filter(|segment| segment.chars().count() >= MIN_SECRET_LEN)
			.map(String::from)
			.chain(url.query().map(String::from))
			.collect(),
		_ => secret_regex().find_iter(endpoint).map(|m| m.as_str().to_string()).collect(),
	}
}

impl AsRef<str> for SecretUrl {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<String> for SecretUrl {
	fn from(url: String) -> Self {
		Self(url)
	}
}

impl From<&str> for SecretUrl {
	fn from(url: &str) -> Self {
		Self(url.to_string())
	}
}

impl fmt::Display for SecretUrl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", redact_secret_endpoint(&self.0))
	}
}

impl fmt::Debug for SecretUrl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", redact_secret_endpoint(&self.0))
	}
}

fn secret_regex() -> &'static Regex {
	static SECRET_REGEX: OnceLock<Regex> = OnceLock::new();
	SECRET_REGEX.get_or_init(|| Regex::new(&format!("[0-9A-Za-z]{{{MIN_SECRET_LEN},}}")).unwrap())
}

/// Partially redacts the secret in the url. Path segments and query strings
/// can contain access keys, the scheme and host cannot.
pub fn redact_secret_endpoint(endpoint: &str) -> String {
	match Url::parse(endpoint) {
		Ok(url) if url.host_str().is_some() => {
			let mut redacted = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
			if let Some(port) = url.port() {
				redacted.push_str(&format!(":{port}"));
			}
			for segment in url.path_segments().into_iter().flatten().filter(|s| !s.is_empty()) {
				redacted.push('/');
				redacted.push_str(&redact_token(segment));
			}
			if url.query().is_some() {
				redacted.push_str("?<redacted>");
			}
			redacted
		},
		// If the endpoint is not a parseable url we cannot tell which part is
		// the secret, so redact anything that looks like a key.
		_ => secret_regex()
			.replace_all(endpoint, |caps: &regex::Captures| redact_token(&caps[0]))
			.to_string(),
	}
}

fn redact_token(token: &str) -> String {
	if token.chars().count() >= MIN_SECRET_LEN {
		format!("{}****", token.chars().take(MAX_SECRET_CHARS_REVEALED).collect::<String>())
	} else {
		token.to_string()
	}
}
