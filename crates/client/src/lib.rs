/*
 * SPDX-FileCopyrightText: Copyright (c) 2022-2026 University of Chicago
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! HTTP client for the Doni hardware-inventory API.
//!
//! [`DoniClient`] exposes the raw REST endpoints keyed by UUID; the
//! [`resolver`] module maps user-supplied name-or-UUID identifiers onto
//! canonical UUIDs so mutating calls never guess between records that
//! happen to share a name.

pub mod client;
pub mod errors;
#[cfg(feature = "cli")]
pub mod output;
pub mod resolver;

pub use client::DoniClient;
pub use errors::{DoniCliError, DoniCliResult};
