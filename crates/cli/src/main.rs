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

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::pin::Pin;

use color_eyre::eyre::bail;
use doni_client::DoniClient;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

mod api;
mod async_write;
mod availability;
mod cfg;
mod device;
mod generate_shell_complete;
mod hardware;

use api::ApiClient;
use cfg::cli_options::{CliCommand, CliOptions};
use cfg::dispatch::Dispatch;
use cfg::runtime::{RuntimeConfig, RuntimeContext};

/// Optional config file at $HOME/.config/doni_api_cli.json, consulted
/// after the command line flag and the environment variable.
#[derive(Debug, Deserialize)]
struct FileConfig {
    doni_api_url: Option<String>,
}

fn get_config_from_file() -> Option<FileConfig> {
    let home = env::var("HOME").ok()?;
    let file = Path::new(&home).join(".config/doni_api_cli.json");
    if !file.exists() {
        return None;
    }

    let file = File::open(file).ok()?;
    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("ignoring unparseable config file: {e}");
            None
        }
    }
}

fn get_doni_api_url(
    doni_api: Option<String>,
    file_config: Option<FileConfig>,
) -> color_eyre::Result<String> {
    // First from command line, second env var (both arrive through the
    // same clap option).
    if let Some(doni_api) = doni_api {
        return Ok(doni_api);
    }

    // Third config file.
    if let Some(file_config) = file_config
        && let Some(doni_api_url) = file_config.doni_api_url
    {
        return Ok(doni_api_url);
    }

    bail!(
        r#"Unknown DONI_API_URL. Set (will be read in same sequence.)
           1. --doni-api/-c flag or
           2. environment variable DONI_API_URL or
           3. add doni_api_url in $HOME/.config/doni_api_cli.json."#
    )
}

fn init_tracing(debug: u8) {
    let default_level = match debug {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = CliOptions::load();
    init_tracing(opts.debug);

    // Shell completion needs no API endpoint; handle it before the client
    // is constructed so it works on machines without any configuration.
    if let CliCommand::GenerateShellComplete(cmd) = &opts.commands {
        generate_shell_complete::cmds::generate(cmd.shell.clone())?;
        return Ok(());
    }

    let doni_api = get_doni_api_url(opts.doni_api, get_config_from_file())?;
    let api_client = ApiClient(DoniClient::new(&doni_api, opts.os_token)?);

    let output_file: Pin<Box<dyn tokio::io::AsyncWrite>> = match &opts.output {
        Some(path) => Box::pin(tokio::fs::File::create(path).await?),
        None => Box::pin(tokio::io::stdout()),
    };

    let ctx = RuntimeContext {
        api_client,
        config: RuntimeConfig {
            format: opts.format,
        },
        output_file,
    };

    match opts.commands {
        CliCommand::Hardware(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::Device(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::Availability(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::GenerateShellComplete(_) => unreachable!("handled above"),
    }

    Ok(())
}
