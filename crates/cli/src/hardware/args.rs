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

use std::str::FromStr;

use clap::Parser;
use model::errors::DataConversionError;
use model::patch::{EditRequest, InterfaceSpec, InterfaceUpdate, WindowSpec, WindowUpdate};
use serde_json::{Value, json};

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "List hardware in the inventory")]
    List(ListHardware),
    #[clap(about = "Export the public view of the whole inventory")]
    Export,
    #[clap(about = "Show one hardware item")]
    Show(ShowHardware),
    #[clap(about = "Enroll a new hardware item")]
    Create(CreateHardware),
    /// Partially update a hardware item.
    ///
    /// Only the fields provided on the command line are touched; the
    /// request is translated into a JSON-Patch body, so everything else
    /// on the record stays as it is. If no fields are provided, nothing
    /// is sent at all.
    #[clap(verbatim_doc_comment)]
    Set(SetHardware),
    #[clap(about = "Delete a hardware item")]
    Delete(DeleteHardware),
    #[clap(about = "Ask the service to re-run the sync workers for a hardware item")]
    Sync(SyncHardware),
}

#[derive(Parser, Debug)]
pub struct ListHardware {
    #[clap(
        long,
        help = "List hardware from all owners (the public export view), not just your own."
    )]
    pub all: bool,
}

#[derive(Parser, Debug)]
pub struct ShowHardware {
    #[clap(help = "Name or UUID of the hardware item")]
    pub name_or_uuid: String,
}

/// A `KEY=VALUE` property assignment. Values that parse as JSON keep
/// their type (numbers, booleans, objects); anything else is a string.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyArg {
    pub key: String,
    pub value: Value,
}

impl FromStr for PropertyArg {
    type Err = DataConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((key, raw)) = s.split_once('=') else {
            return Err(DataConversionError::InvalidProperty(s.to_string()));
        };
        if key.trim().is_empty() {
            return Err(DataConversionError::InvalidProperty(s.to_string()));
        }
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        Ok(Self {
            key: key.trim().to_string(),
            value,
        })
    }
}

#[derive(Parser, Debug)]
pub struct CreateHardware {
    #[clap(
        long,
        help = "Name of the hardware object. Best practice is to use a universally unique identifier, such as serial number or chassis ID, to aid in disambiguating systems."
    )]
    pub name: String,

    #[clap(long, default_value = "baremetal", help = "Hardware type to enroll as")]
    pub hardware_type: String,

    #[clap(long, help = "Management (BMC) address")]
    pub mgmt_addr: Option<String>,

    #[clap(long, help = "IPMI username")]
    pub ipmi_username: Option<String>,

    #[clap(long, help = "IPMI password")]
    pub ipmi_password: Option<String>,

    #[clap(long, help = "IPMI serial-over-LAN terminal port")]
    pub ipmi_terminal_port: Option<u16>,

    #[clap(
        long = "interface",
        value_name = "NAME,MAC",
        action = clap::ArgAction::Append,
        help = "A network interface on the machine. This option can be repeated."
    )]
    pub interfaces: Vec<InterfaceSpec>,

    #[clap(
        long = "property",
        value_name = "KEY=VALUE",
        action = clap::ArgAction::Append,
        help = "An extra free-form property. JSON values keep their type. This option can be repeated."
    )]
    pub properties: Vec<PropertyArg>,

    #[clap(long, help = "Print the request body without sending it.")]
    pub dry_run: bool,
}

impl CreateHardware {
    pub fn to_edit_request(&self) -> EditRequest {
        let mut edit = EditRequest {
            name: Some(self.name.clone()),
            hardware_type: Some(self.hardware_type.clone()),
            interface_add: self.interfaces.clone(),
            ..Default::default()
        };
        push_common_properties(
            &mut edit,
            &self.mgmt_addr,
            &self.ipmi_username,
            &self.ipmi_password,
            self.ipmi_terminal_port,
        );
        for property in &self.properties {
            edit.set_property(&property.key, property.value.clone());
        }
        edit
    }
}

#[derive(Parser, Debug)]
pub struct SetHardware {
    #[clap(help = "Name or UUID of the hardware item to update")]
    pub name_or_uuid: String,

    #[clap(long, help = "New name for the hardware item")]
    pub name: Option<String>,

    #[clap(long, help = "New hardware type")]
    pub hardware_type: Option<String>,

    #[clap(long, help = "Management (BMC) address")]
    pub mgmt_addr: Option<String>,

    #[clap(long, help = "IPMI username")]
    pub ipmi_username: Option<String>,

    #[clap(long, help = "IPMI password")]
    pub ipmi_password: Option<String>,

    #[clap(long, help = "IPMI serial-over-LAN terminal port")]
    pub ipmi_terminal_port: Option<u16>,

    #[clap(
        long = "property",
        value_name = "KEY=VALUE",
        action = clap::ArgAction::Append,
        help = "Set a free-form property. This option can be repeated."
    )]
    pub properties: Vec<PropertyArg>,

    #[clap(
        long,
        value_name = "NAME,MAC",
        action = clap::ArgAction::Append,
        help = "Append a new interface. This option can be repeated."
    )]
    pub add_interface: Vec<InterfaceSpec>,

    #[clap(
        long,
        value_name = "INDEX,NAME,MAC",
        action = clap::ArgAction::Append,
        help = "Replace the interface at INDEX. This option can be repeated."
    )]
    pub update_interface: Vec<InterfaceUpdate>,

    #[clap(
        long,
        value_name = "INDEX",
        action = clap::ArgAction::Append,
        help = "Remove the interface at INDEX. This option can be repeated."
    )]
    pub delete_interface: Vec<usize>,

    #[clap(
        long,
        value_name = "START,END",
        action = clap::ArgAction::Append,
        help = "Append an availability window. Times without a timezone are read in the local zone. This option can be repeated."
    )]
    pub add_window: Vec<WindowSpec>,

    #[clap(
        long,
        value_name = "ID,START,END",
        action = clap::ArgAction::Append,
        help = "Replace the availability window with the given id. This option can be repeated."
    )]
    pub update_window: Vec<WindowUpdate>,

    #[clap(
        long,
        value_name = "ID",
        action = clap::ArgAction::Append,
        help = "Remove the availability window with the given id. This option can be repeated."
    )]
    pub delete_window: Vec<i64>,

    #[clap(long, help = "Print the patch without sending it.")]
    pub dry_run: bool,
}

impl SetHardware {
    pub fn to_edit_request(&self) -> EditRequest {
        let mut edit = EditRequest {
            name: self.name.clone(),
            hardware_type: self.hardware_type.clone(),
            interface_add: self.add_interface.clone(),
            interface_update: self.update_interface.clone(),
            interface_delete: self.delete_interface.clone(),
            window_add: self.add_window.clone(),
            window_update: self.update_window.clone(),
            window_delete: self.delete_window.clone(),
            ..Default::default()
        };
        push_common_properties(
            &mut edit,
            &self.mgmt_addr,
            &self.ipmi_username,
            &self.ipmi_password,
            self.ipmi_terminal_port,
        );
        for property in &self.properties {
            edit.set_property(&property.key, property.value.clone());
        }
        edit
    }
}

// The well-known property flags map onto /properties/<key> paths in a
// fixed order; free-form --property values follow in the order given.
fn push_common_properties(
    edit: &mut EditRequest,
    mgmt_addr: &Option<String>,
    ipmi_username: &Option<String>,
    ipmi_password: &Option<String>,
    ipmi_terminal_port: Option<u16>,
) {
    if let Some(mgmt_addr) = mgmt_addr {
        edit.set_property("mgmt_addr", json!(mgmt_addr));
    }
    if let Some(ipmi_username) = ipmi_username {
        edit.set_property("ipmi_username", json!(ipmi_username));
    }
    if let Some(ipmi_password) = ipmi_password {
        edit.set_property("ipmi_password", json!(ipmi_password));
    }
    if let Some(ipmi_terminal_port) = ipmi_terminal_port {
        edit.set_property("ipmi_terminal_port", json!(ipmi_terminal_port));
    }
}

#[derive(Parser, Debug)]
pub struct DeleteHardware {
    #[clap(help = "Name or UUID of the hardware item to delete")]
    pub name_or_uuid: String,
}

#[derive(Parser, Debug)]
pub struct SyncHardware {
    #[clap(help = "Name or UUID of the hardware item to sync")]
    pub name_or_uuid: String,
}
