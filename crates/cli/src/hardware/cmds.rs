/*
 * SPDX-FileCopyrightText: Copyright (c) 2021-2026 University of Chicago
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
use model::HardwareRecord;
use prettytable::{Cell, Row, Table};

use super::args::{
    CreateHardware, DeleteHardware, ListHardware, SetHardware, ShowHardware, SyncHardware,
};
use crate::api::ApiClient;
use crate::{async_write, async_writeln};

type Output = Pin<Box<dyn tokio::io::AsyncWrite>>;

pub async fn list(
    args: &ListHardware,
    api_client: &ApiClient,
    output: &mut Output,
    format: OutputFormat,
) -> DoniCliResult<()> {
    let records = if args.all {
        api_client.0.export().await?
    } else {
        api_client.0.list().await?
    };
    write_records(&records, args.all, output, format).await
}

pub async fn export(
    api_client: &ApiClient,
    output: &mut Output,
    format: OutputFormat,
) -> DoniCliResult<()> {
    let records = api_client.0.export().await?;
    write_records(&records, true, output, format).await
}

pub async fn show(
    args: &ShowHardware,
    api_client: &ApiClient,
    output: &mut Output,
    format: OutputFormat,
) -> DoniCliResult<()> {
    let record = api_client.show_hardware(&args.name_or_uuid).await?;
    write_record(&record, output, format).await
}

pub async fn create(
    args: &CreateHardware,
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
    args: &SetHardware,
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

pub async fn delete(
    args: &DeleteHardware,
    api_client: &ApiClient,
    output: &mut Output,
) -> DoniCliResult<()> {
    api_client.delete_hardware(&args.name_or_uuid).await?;
    async_writeln!(output, "Deleted hardware '{}'.", args.name_or_uuid)?;
    Ok(())
}

pub async fn sync(
    args: &SyncHardware,
    api_client: &ApiClient,
    output: &mut Output,
) -> DoniCliResult<()> {
    api_client.sync_hardware(&args.name_or_uuid).await?;
    async_writeln!(output, "Requested sync for hardware '{}'.", args.name_or_uuid)?;
    Ok(())
}

async fn write_records(
    records: &[HardwareRecord],
    include_uuid: bool,
    output: &mut Output,
    format: OutputFormat,
) -> DoniCliResult<()> {
    match format {
        OutputFormat::Json => {
            async_writeln!(output, "{}", serde_json::to_string_pretty(records)?)?;
        }
        OutputFormat::Yaml => {
            async_write!(output, "{}", serde_yaml::to_string(records)?)?;
        }
        OutputFormat::Csv => {
            async_write!(output, "{}", records_csv(records, include_uuid)?)?;
        }
        OutputFormat::AsciiTable => {
            async_write!(output, "{}", records_table(records, include_uuid))?;
        }
    }
    Ok(())
}

pub(crate) async fn write_record(
    record: &HardwareRecord,
    output: &mut Output,
    format: OutputFormat,
) -> DoniCliResult<()> {
    match format {
        OutputFormat::Json => {
            async_writeln!(output, "{}", serde_json::to_string_pretty(record)?)?;
        }
        OutputFormat::Yaml => {
            async_write!(output, "{}", serde_yaml::to_string(record)?)?;
        }
        OutputFormat::Csv => {
            return Err(DoniCliError::GenericError(
                "CSV output is not supported for this command".to_string(),
            ));
        }
        OutputFormat::AsciiTable => {
            async_write!(output, "{}", record_table(record))?;
        }
    }
    Ok(())
}

// One row per record; worker states get one column per worker type seen
// anywhere in the listing, so rows stay comparable.
fn records_table(records: &[HardwareRecord], include_uuid: bool) -> Table {
    let mut worker_types: Vec<String> = records
        .iter()
        .flat_map(|r| r.workers.iter().map(|w| w.worker_type.clone()))
        .collect();
    worker_types.sort();
    worker_types.dedup();

    let mut titles = vec!["Name".to_string()];
    if include_uuid {
        titles.push("UUID".to_string());
    }
    titles.extend(["Project".to_string(), "Type".to_string(), "Properties".to_string()]);
    for worker_type in &worker_types {
        titles.push(format!("worker_{worker_type}"));
    }

    let mut table = Table::new();
    table.set_titles(Row::new(titles.iter().map(|t| Cell::new(t)).collect()));

    for record in records {
        let mut cells = vec![Cell::new(&record.name)];
        if include_uuid {
            cells.push(Cell::new(&record.uuid));
        }
        cells.push(Cell::new(record.project_id.as_deref().unwrap_or("-")));
        cells.push(Cell::new(&record.hardware_type));
        cells.push(Cell::new(&properties_summary(record)));
        for worker_type in &worker_types {
            let state = record
                .workers
                .iter()
                .find(|w| &w.worker_type == worker_type)
                .map(|w| w.state.to_string())
                .unwrap_or_else(|| "-".to_string());
            cells.push(Cell::new(&state));
        }
        table.add_row(Row::new(cells));
    }

    table
}

fn record_table(record: &HardwareRecord) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![Cell::new("Field"), Cell::new("Value")]));
    table.add_row(Row::new(vec![Cell::new("uuid"), Cell::new(&record.uuid)]));
    table.add_row(Row::new(vec![Cell::new("name"), Cell::new(&record.name)]));
    table.add_row(Row::new(vec![
        Cell::new("project_id"),
        Cell::new(record.project_id.as_deref().unwrap_or("-")),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("hardware_type"),
        Cell::new(&record.hardware_type),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("properties"),
        Cell::new(&properties_summary(record)),
    ]));
    for (worker_type, state, detail) in record.worker_state_columns() {
        table.add_row(Row::new(vec![
            Cell::new(&format!("worker_{worker_type}")),
            Cell::new(&state.to_string()),
        ]));
        if !detail.is_empty() {
            table.add_row(Row::new(vec![
                Cell::new(&format!("worker_{worker_type}_detail")),
                Cell::new(&detail),
            ]));
        }
    }
    table.add_row(Row::new(vec![
        Cell::new("created_at"),
        Cell::new(&record.created_at.map(|t| t.to_rfc3339()).unwrap_or_else(|| "-".to_string())),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("updated_at"),
        Cell::new(&record.updated_at.map(|t| t.to_rfc3339()).unwrap_or_else(|| "-".to_string())),
    ]));
    table
}

fn records_csv(records: &[HardwareRecord], include_uuid: bool) -> DoniCliResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["name"];
    if include_uuid {
        header.push("uuid");
    }
    header.extend(["project_id", "hardware_type", "properties", "workers"]);
    writer
        .write_record(&header)
        .map_err(|e| DoniCliError::GenericError(e.to_string()))?;

    for record in records {
        let workers = record
            .workers
            .iter()
            .map(|w| format!("{}:{}", w.worker_type, w.state))
            .collect::<Vec<_>>()
            .join(";");

        let mut row = vec![record.name.clone()];
        if include_uuid {
            row.push(record.uuid.clone());
        }
        row.extend([
            record.project_id.clone().unwrap_or_default(),
            record.hardware_type.clone(),
            serde_json::to_string(&record.properties)?,
            workers,
        ]);
        writer
            .write_record(&row)
            .map_err(|e| DoniCliError::GenericError(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DoniCliError::GenericError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DoniCliError::GenericError(e.to_string()))
}

fn properties_summary(record: &HardwareRecord) -> String {
    record
        .properties
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
