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

//! Exit statuses of the probe. Each failure mode gets its own status so
//! operators and scripts can tell them apart.

pub const SUCCESS: u8 = 0;
pub const ERROR_READING_SETTINGS: u8 = 2;
pub const CONNECT_FAILED: u8 = 3;
pub const QUERY_FAILED: u8 = 4;
pub const CHAIN_ID_MISMATCH: u8 = 5;
