/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 University of Chicago
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

use std::pin::Pin;

use doni_client::output::OutputFormat;

use crate::api::ApiClient;

// RuntimeContext is handed to every subcommand dispatch handler. It is
// built once at startup from the parsed CLI options.
pub struct RuntimeContext {
    pub api_client: ApiClient,
    pub config: RuntimeConfig,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite>>,
}

// RuntimeConfig carries the global options that downstream command
// handlers need.
pub struct RuntimeConfig {
    pub format: OutputFormat,
}
