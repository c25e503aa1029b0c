/*
 * SPDX-FileCopyrightText: Copyright (c) 2024-2026 University of Chicago
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
use doni_client::{DoniCliError, DoniCliResult};
use model::AvailabilityWindow;
use prettytable::{Cell, Row, Table};

use super::args::ShowAvailability;
use crate::api::ApiClient;
use crate::{async_write, async_writeln};

type Output = Pin<Box<dyn tokio::io::AsyncWrite>>;

pub async fn show(
    args: &ShowAvailability,
    api_client: &ApiClient,
    output: &mut Output,
    format: OutputFormat,
) -> DoniCliResult<()> {
    let windows = api_client.hardware_availability(&args.name_or_uuid).await?;

    match format {
        OutputFormat::Json => {
            async_writeln!(output, "{}", serde_json::to_string_pretty(&windows)?)?;
        }
        OutputFormat::Yaml => {
            async_write!(output, "{}", serde_yaml::to_string(&windows)?)?;
        }
        OutputFormat::Csv => {
            return Err(DoniCliError::GenericError(
                "CSV output is not supported for this command".to_string(),
            ));
        }
        OutputFormat::AsciiTable => {
            async_write!(output, "{}", windows_table(&windows))?;
        }
    }
    Ok(())
}

fn windows_table(windows: &[AvailabilityWindow]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("ID"),
        Cell::new("Start"),
        Cell::new("End"),
    ]));
    for window in windows {
        table.add_row(Row::new(vec![
            Cell::new(
                &window
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(&window.start.to_rfc3339()),
            Cell::new(&window.end.to_rfc3339()),
        ]));
    }
    table
}
