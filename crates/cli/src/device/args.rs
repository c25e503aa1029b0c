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

use clap::Parser;
use model::patch::EditRequest;
use serde_json::{Value, json};

// Devices are hosts that run user workloads in containers. Balena is the
// only device flavor in the fleet today, so the type tag is fixed here
// rather than asked of the user.
pub const DEVICE_HARDWARE_TYPE: &str = "device.balena";

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Enroll a new device")]
    Create(CreateDevice),
    /// Partially update a device.
    ///
    /// Only the fields provided on the command line are touched; the
    /// request is translated into a JSON-Patch body, so everything else
    /// on the record stays as it is.
    #[clap(verbatim_doc_comment)]
    Set(SetDevice),
}

/// The property flags shared by create and set. Every one of these lands
/// under `/properties/<key>` on the record.
#[derive(Parser, Debug, Default)]
pub struct DeviceProperties {
    #[clap(long, help = "Balena machine name, e.g. jetson-nano")]
    pub machine_name: Option<String>,

    #[clap(long, help = "Contact e-mail of the device owner")]
    pub contact_email: Option<String>,

    #[clap(
        long,
        value_parser = parse_json_value,
        help = "Notification channels as a JSON value"
    )]
    pub channels: Option<Value>,

    #[clap(long, help = "Application credential id used by the device")]
    pub application_credential_id: Option<String>,

    #[clap(long, help = "Application credential secret used by the device")]
    pub application_credential_secret: Option<String>,

    #[clap(long, help = "Local egress policy, e.g. allow or deny")]
    pub local_egress: Option<String>,
}

impl DeviceProperties {
    fn push_onto(&self, edit: &mut EditRequest) {
        if let Some(machine_name) = &self.machine_name {
            edit.set_property("machine_name", json!(machine_name));
        }
        if let Some(contact_email) = &self.contact_email {
            edit.set_property("contact_email", json!(contact_email));
        }
        if let Some(channels) = &self.channels {
            edit.set_property("channels", channels.clone());
        }
        if let Some(id) = &self.application_credential_id {
            edit.set_property("application_credential_id", json!(id));
        }
        if let Some(secret) = &self.application_credential_secret {
            edit.set_property("application_credential_secret", json!(secret));
        }
        if let Some(local_egress) = &self.local_egress {
            edit.set_property("local_egress", json!(local_egress));
        }
    }
}

fn parse_json_value(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON: {e}"))
}

#[derive(Parser, Debug)]
pub struct CreateDevice {
    #[clap(
        long,
        help = "Name of the device. Best practice is to use a universally unique identifier, such as serial number or chassis ID, to aid in disambiguating systems."
    )]
    pub name: String,

    #[clap(flatten)]
    pub properties: DeviceProperties,

    #[clap(long, help = "Print the request body without sending it.")]
    pub dry_run: bool,
}

impl CreateDevice {
    pub fn to_edit_request(&self) -> EditRequest {
        let mut edit = EditRequest {
            name: Some(self.name.clone()),
            hardware_type: Some(DEVICE_HARDWARE_TYPE.to_string()),
            ..Default::default()
        };
        self.properties.push_onto(&mut edit);
        edit
    }
}

#[derive(Parser, Debug)]
pub struct SetDevice {
    #[clap(help = "Name or UUID of the device to update")]
    pub name_or_uuid: String,

    #[clap(long, help = "New name for the device")]
    pub name: Option<String>,

    #[clap(flatten)]
    pub properties: DeviceProperties,

    #[clap(long, help = "Print the patch without sending it.")]
    pub dry_run: bool,
}

impl SetDevice {
    pub fn to_edit_request(&self) -> EditRequest {
        let mut edit = EditRequest {
            name: self.name.clone(),
            ..Default::default()
        };
        self.properties.push_onto(&mut edit);
        edit
    }
}
