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

/// DataConversionError enumerates errors that can occur when converting
/// user-supplied text into the data model.
#[derive(Debug, thiserror::Error)]
pub enum DataConversionError {
    #[error("Unable to parse date '{0}'")]
    InvalidDate(String),
    #[error("Interface spec {0} is not valid, expected NAME,MAC")]
    InvalidInterfaceSpec(String),
    #[error("Availability window spec {0} is not valid")]
    InvalidWindowSpec(String),
    #[error("MAC address {0} is not valid")]
    InvalidMacAddress(String),
    #[error("Property {0} is not valid, expected KEY=VALUE")]
    InvalidProperty(String),
}
