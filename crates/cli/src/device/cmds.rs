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

use std::pin::Pin;

use doni_client::DoniCliResult;
use doni_client::output::OutputFormat;

use super::args::{CreateDevice, SetDevice};
use crate::api::ApiClient;
use crate::async_writeln;
// Devices render exactly like any other hardware record.
use crate::hardware::cmds::write_record;

type Output = Pin<Box<dyn tokio::io::AsyncWrite>>;

pub async fn create(
    args: &CreateDevice,
    api_client: &ApiClient,
    output: &mut Output,
    format: OutputFormat,
) -> DoniCliResult<()> {
    let body = args.to_edit_request().build_create_body();
    if args.dry_run {
        async_writeln!(output, "{}", serde_json::to_string_pretty(&body)?)?;
        return Ok(());
    }

    let record = api_client.0.create(&body).await?;
    write_record(&record, output, format).await
}

pub async fn set(
    args: &SetDevice,
    api_client: &ApiClient,
    output: &mut Output,
    format: OutputFormat,
) -> DoniCliResult<()> {
    let patch = args.to_edit_request().synthesize();
    if patch.is_empty() {
        async_writeln!(output, "No updates to send.")?;
        return Ok(());
    }
    if args.dry_run {
        async_writeln!(output, "{}", serde_json::to_string_pretty(&patch)?)?;
        return Ok(());
    }

    let record = api_client
        .update_hardware(&args.name_or_uuid, &patch)
        .await?;
    write_record(&record, output, format).await
}
