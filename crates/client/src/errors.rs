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

use model::DataConversionError;

#[derive(thiserror::Error, Debug)]
pub enum DoniCliError {
    #[error("Unable to connect to doni API: {0}")]
    ApiConnectFailed(String),

    /// The remote side answered with a non-2xx status. The body text is
    /// surfaced verbatim since it is usually the only useful diagnostic.
    #[error("The Doni API returned {status}: {body}")]
    RemoteError { status: u16, body: String },

    #[error("No resource exists with the name or ID '{0}'.")]
    NotFound(String),

    // The message text is a compatibility surface, scripts grep for it.
    #[error("More than one resource exists with the name or ID '{identifier}'.")]
    AmbiguousResource { identifier: String, count: usize },

    #[error("Generic Error: {0}")]
    GenericError(String),

    #[error("Error while handling json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error while handling yaml: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("I/O error. Does the file exist? {0}")]
    IOError(#[from] std::io::Error),

    #[error("HTTP transport error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error(transparent)]
    ConversionError(#[from] DataConversionError),

    /// For when you expected some values but the response was empty.
    /// If empty is acceptable don't use this.
    #[error("No results returned")]
    Empty,
}

pub type DoniCliResult<T> = Result<T, DoniCliError>;
