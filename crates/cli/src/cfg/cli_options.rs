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

use clap::Parser;
use doni_client::output::OutputFormat;

use crate::{availability, device, generate_shell_complete, hardware};

#[derive(Parser, Debug)]
#[clap(name = "doni-cli", version)]
pub struct CliOptions {
    #[clap(short = 'c', long, env = "DONI_API_URL")]
    #[clap(
        help = "Default to DONI_API_URL environment variable or $HOME/.config/doni_api_cli.json file."
    )]
    pub doni_api: Option<String>,

    #[clap(long, env = "OS_TOKEN", hide_env_values = true)]
    #[clap(
        help = "Pre-acquired token sent as X-Auth-Token. Default to OS_TOKEN environment variable."
    )]
    pub os_token: Option<String>,

    #[clap(short, long, value_enum, default_value = "ascii-table")]
    pub format: OutputFormat,

    #[clap(short, long, help = "Write command output to this file instead of stdout.")]
    pub output: Option<String>,

    #[clap(short, long, action = clap::ArgAction::Count)]
    #[clap(help = "Increase log verbosity. Repeat for trace output.")]
    pub debug: u8,

    #[clap(subcommand)]
    pub commands: CliCommand,
}

#[derive(Parser, Debug)]
pub enum CliCommand {
    #[clap(about = "Hardware inventory handling", subcommand, visible_alias = "hw")]
    Hardware(hardware::Cmd),
    #[clap(
        about = "Device flavored hardware handling",
        subcommand,
        visible_alias = "dev"
    )]
    Device(device::Cmd),
    #[clap(
        about = "Availability window handling",
        subcommand,
        visible_alias = "aw"
    )]
    Availability(availability::Cmd),
    #[clap(
        about = "Generate shell autocomplete. Source the output of this command: `source <(doni-cli generate-shell-complete bash)`"
    )]
    GenerateShellComplete(generate_shell_complete::Cmd),
}

impl CliOptions {
    pub fn load() -> Self {
        Self::parse()
    }
}
