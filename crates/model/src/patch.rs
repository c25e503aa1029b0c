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

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};
use mac_address::MacAddress;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::errors::DataConversionError;

/// The subset of RFC 6902 operations the Doni API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
    Remove,
}

/// A single JSON-Patch operation. `value` is omitted from the wire body
/// entirely (not serialized as null) when absent; `remove` operations
/// never carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PatchOperation {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOp::Add,
            path: path.into(),
            value: Some(value),
        }
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            value: Some(value),
        }
    }

    // remove takes no value parameter; remove operations are value-less
    // on the wire.
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            value: None,
        }
    }
}

/// A network interface attached to a hardware record, as specified on the
/// command line with `NAME,MAC`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceSpec {
    pub name: String,
    pub mac_address: MacAddress,
}

impl FromStr for InterfaceSpec {
    type Err = DataConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, mac)) = s.split_once(',') else {
            return Err(DataConversionError::InvalidInterfaceSpec(s.to_string()));
        };
        if name.trim().is_empty() {
            return Err(DataConversionError::InvalidInterfaceSpec(s.to_string()));
        }
        let mac_address = mac
            .trim()
            .parse::<MacAddress>()
            .map_err(|_| DataConversionError::InvalidMacAddress(mac.trim().to_string()))?;
        Ok(Self {
            name: name.trim().to_string(),
            mac_address,
        })
    }
}

/// An interface replacement, `INDEX,NAME,MAC`. The index addresses the
/// position in the record's interface list and is stripped from the value
/// before it goes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceUpdate {
    pub index: usize,
    pub spec: InterfaceSpec,
}

impl FromStr for InterfaceUpdate {
    type Err = DataConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((index, spec)) = s.split_once(',') else {
            return Err(DataConversionError::InvalidInterfaceSpec(s.to_string()));
        };
        let index = index
            .trim()
            .parse::<usize>()
            .map_err(|_| DataConversionError::InvalidInterfaceSpec(s.to_string()))?;
        Ok(Self {
            index,
            spec: spec.parse()?,
        })
    }
}

/// One availability window, timezone-aware on both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl WindowSpec {
    fn to_value(&self) -> Value {
        json!({
            "start": self.start.to_rfc3339(),
            "end": self.end.to_rfc3339(),
        })
    }
}

impl FromStr for WindowSpec {
    type Err = DataConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((start, end)) = s.split_once(',') else {
            return Err(DataConversionError::InvalidWindowSpec(s.to_string()));
        };
        Ok(Self {
            start: parse_window_timestamp(start.trim())?,
            end: parse_window_timestamp(end.trim())?,
        })
    }
}

/// A window replacement, `ID,START,END`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowUpdate {
    pub index: i64,
    pub window: WindowSpec,
}

impl FromStr for WindowUpdate {
    type Err = DataConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((index, window)) = s.split_once(',') else {
            return Err(DataConversionError::InvalidWindowSpec(s.to_string()));
        };
        let index = index
            .trim()
            .parse::<i64>()
            .map_err(|_| DataConversionError::InvalidWindowSpec(s.to_string()))?;
        Ok(Self {
            index,
            window: window.parse()?,
        })
    }
}

/// Parse a textual timestamp. RFC 3339 input keeps its offset; zone-less
/// input is interpreted in the local system timezone.
pub fn parse_window_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, DataConversionError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts);
    }

    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| DataConversionError::InvalidDate(raw.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|ts| ts.fixed_offset())
        .ok_or_else(|| DataConversionError::InvalidDate(raw.to_string()))
}

/// The parsed, structured form of one requested mutation: scalar field
/// overrides, a property map, and the ordered interface/availability op
/// lists. Built once per invocation from CLI flags and consumed exactly
/// once by [`EditRequest::synthesize`] or [`EditRequest::build_create_body`].
#[derive(Debug, Clone, Default)]
pub struct EditRequest {
    pub name: Option<String>,
    pub hardware_type: Option<String>,
    /// Properties in insertion order. Order is observable: it is the order
    /// the patch operations are emitted in.
    pub properties: Vec<(String, Value)>,
    pub interface_add: Vec<InterfaceSpec>,
    pub interface_update: Vec<InterfaceUpdate>,
    pub interface_delete: Vec<usize>,
    pub window_add: Vec<WindowSpec>,
    pub window_update: Vec<WindowUpdate>,
    pub window_delete: Vec<i64>,
}

impl EditRequest {
    pub fn set_property(&mut self, key: impl Into<String>, value: Value) {
        self.properties.push((key.into(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.hardware_type.is_none()
            && self.properties.is_empty()
            && self.interface_add.is_empty()
            && self.interface_update.is_empty()
            && self.interface_delete.is_empty()
            && self.window_add.is_empty()
            && self.window_update.is_empty()
            && self.window_delete.is_empty()
    }

    /// Translate the edit into an ordered JSON-Patch operation list.
    ///
    /// The order is fixed: scalar fields, then properties in insertion
    /// order, then interface add/update/delete, then window
    /// add/update/delete. Callers replaying the same EditRequest get the
    /// same list, and an empty edit yields an empty list, which callers
    /// must treat as "nothing to send" rather than issuing a no-op PATCH.
    pub fn synthesize(&self) -> Vec<PatchOperation> {
        let mut ops = Vec::new();

        if let Some(name) = &self.name {
            ops.push(PatchOperation::add("/name", json!(name)));
        }
        if let Some(hardware_type) = &self.hardware_type {
            ops.push(PatchOperation::add("/hardware_type", json!(hardware_type)));
        }
        for (key, value) in &self.properties {
            ops.push(PatchOperation::add(format!("/properties/{key}"), value.clone()));
        }

        for iface in &self.interface_add {
            ops.push(PatchOperation::add("/interface/-", json!(iface)));
        }
        for update in &self.interface_update {
            ops.push(PatchOperation::replace(
                format!("/interface/{}", update.index),
                json!(update.spec),
            ));
        }
        for index in &self.interface_delete {
            ops.push(PatchOperation::remove(format!("/interface/{index}")));
        }

        for window in &self.window_add {
            ops.push(PatchOperation::add("/availability/-", window.to_value()));
        }
        for update in &self.window_update {
            ops.push(PatchOperation::replace(
                format!("/availability/{}", update.index),
                update.window.to_value(),
            ));
        }
        for index in &self.window_delete {
            ops.push(PatchOperation::remove(format!("/availability/{index}")));
        }

        ops
    }

    /// Assemble the JSON body for hardware enrollment. Required fields are
    /// enforced by the CLI parser before this is reached.
    pub fn build_create_body(&self) -> Value {
        let mut properties = Map::new();
        for (key, value) in &self.properties {
            properties.insert(key.clone(), value.clone());
        }
        if !self.interface_add.is_empty() {
            properties.insert("interfaces".to_string(), json!(self.interface_add));
        }

        json!({
            "name": self.name.clone().unwrap_or_default(),
            "hardware_type": self.hardware_type.clone().unwrap_or_default(),
            "properties": properties,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mac(s: &str) -> MacAddress {
        s.parse().unwrap()
    }

    #[test]
    fn empty_edit_synthesizes_nothing() {
        let edit = EditRequest::default();
        assert!(edit.is_empty());
        assert!(edit.synthesize().is_empty());
    }

    #[test]
    fn name_only_edit() {
        let edit = EditRequest {
            name: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(
            edit.synthesize(),
            vec![PatchOperation::add("/name", json!("x"))]
        );
    }

    #[test]
    fn scalar_fields_precede_properties_in_insertion_order() {
        let mut edit = EditRequest {
            name: Some("node-1".to_string()),
            hardware_type: Some("baremetal".to_string()),
            ..Default::default()
        };
        edit.set_property("mgmt_addr", json!("10.0.0.4"));
        edit.set_property("ipmi_username", json!("admin"));
        edit.set_property("ipmi_terminal_port", json!(30017));

        let ops = edit.synthesize();
        let paths: Vec<&str> = ops.iter().map(|op| op.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/name",
                "/hardware_type",
                "/properties/mgmt_addr",
                "/properties/ipmi_username",
                "/properties/ipmi_terminal_port",
            ]
        );
    }

    #[test]
    fn interface_add_appends() {
        let edit = EditRequest {
            interface_add: vec![InterfaceSpec {
                name: "eth0".to_string(),
                mac_address: mac("aa:bb:cc:dd:ee:ff"),
            }],
            ..Default::default()
        };
        let ops = edit.synthesize();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].op, PatchOp::Add);
        assert_eq!(ops[0].path, "/interface/-");
        assert_eq!(
            ops[0].value,
            Some(json!({"name": "eth0", "mac_address": "AA:BB:CC:DD:EE:FF"}))
        );
    }

    // The index addresses the patch path; it must not leak into the value.
    #[test]
    fn interface_update_strips_index_from_value() {
        let edit = EditRequest {
            interface_update: vec!["2,eth0,aa:bb:cc:dd:ee:ff".parse().unwrap()],
            ..Default::default()
        };
        let ops = edit.synthesize();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].op, PatchOp::Replace);
        assert_eq!(ops[0].path, "/interface/2");
        assert_eq!(
            ops[0].value,
            Some(json!({"name": "eth0", "mac_address": "AA:BB:CC:DD:EE:FF"}))
        );
    }

    #[test]
    fn removes_carry_no_value_key() {
        let edit = EditRequest {
            interface_delete: vec![1],
            window_delete: vec![3],
            ..Default::default()
        };
        let ops = edit.synthesize();
        assert_eq!(ops.len(), 2);
        for op in &ops {
            assert_eq!(op.op, PatchOp::Remove);
            assert!(op.value.is_none());
        }
        assert_eq!(ops[0].path, "/interface/1");
        assert_eq!(ops[1].path, "/availability/3");

        // Omitted entirely from the wire body, not serialized as null.
        let body = serde_json::to_value(&ops).unwrap();
        assert_eq!(
            body,
            json!([
                {"op": "remove", "path": "/interface/1"},
                {"op": "remove", "path": "/availability/3"},
            ])
        );
    }

    #[test]
    fn window_ops_are_ordered_add_update_delete() {
        let edit = EditRequest {
            window_add: vec!["2026-03-01T08:00:00+00:00,2026-03-08T08:00:00+00:00"
                .parse()
                .unwrap()],
            window_update: vec!["4,2026-04-01T00:00:00+00:00,2026-04-02T00:00:00+00:00"
                .parse()
                .unwrap()],
            window_delete: vec![7],
            ..Default::default()
        };
        let ops = edit.synthesize();
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].path, "/availability/-");
        assert_eq!(
            ops[0].value,
            Some(json!({
                "start": "2026-03-01T08:00:00+00:00",
                "end": "2026-03-08T08:00:00+00:00",
            }))
        );
        assert_eq!(ops[1].path, "/availability/4");
        // The id addresses the path only, never the value.
        assert_eq!(
            ops[1].value,
            Some(json!({
                "start": "2026-04-01T00:00:00+00:00",
                "end": "2026-04-02T00:00:00+00:00",
            }))
        );
        assert_eq!(ops[2], PatchOperation::remove("/availability/7"));
    }

    #[test]
    fn rfc3339_timestamps_keep_their_offset() {
        let ts = parse_window_timestamp("2026-08-07T10:30:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-08-07T10:30:00+02:00");
    }

    #[test]
    fn zoneless_timestamps_get_the_local_offset() {
        let ts = parse_window_timestamp("2026-08-07 10:30:00").unwrap();
        let expected = Local
            .with_ymd_and_hms(2026, 8, 7, 10, 30, 0)
            .unwrap()
            .fixed_offset();
        assert_eq!(ts, expected);
    }

    #[test]
    fn bare_dates_parse_as_midnight() {
        let ts = parse_window_timestamp("2026-08-07").unwrap();
        let expected = Local
            .with_ymd_and_hms(2026, 8, 7, 0, 0, 0)
            .unwrap()
            .fixed_offset();
        assert_eq!(ts, expected);
    }

    #[test]
    fn garbage_dates_fail_with_invalid_date() {
        let err = parse_window_timestamp("next tuesday").unwrap_err();
        assert!(matches!(err, DataConversionError::InvalidDate(raw) if raw == "next tuesday"));
    }

    #[test]
    fn interface_spec_parsing_rejects_bad_input() {
        assert!("eth0,aa:bb:cc:dd:ee:ff".parse::<InterfaceSpec>().is_ok());
        assert!("eth0".parse::<InterfaceSpec>().is_err());
        assert!("eth0,not-a-mac".parse::<InterfaceSpec>().is_err());
        assert!(",aa:bb:cc:dd:ee:ff".parse::<InterfaceSpec>().is_err());
    }

    #[test]
    fn create_body_nests_interfaces_under_properties() {
        let mut edit = EditRequest {
            name: Some("node-1".to_string()),
            hardware_type: Some("baremetal".to_string()),
            interface_add: vec![InterfaceSpec {
                name: "eno1".to_string(),
                mac_address: mac("00:11:22:33:44:55"),
            }],
            ..Default::default()
        };
        edit.set_property("mgmt_addr", json!("10.0.0.4"));

        assert_eq!(
            edit.build_create_body(),
            json!({
                "name": "node-1",
                "hardware_type": "baremetal",
                "properties": {
                    "mgmt_addr": "10.0.0.4",
                    "interfaces": [{"name": "eno1", "mac_address": "00:11:22:33:44:55"}],
                },
            })
        );
    }

    // A patch only ever mentions the fields present in the edit, so
    // applying it leaves everything else on the record untouched.
    #[test]
    fn patch_paths_cover_only_edited_fields() {
        let mut edit = EditRequest::default();
        edit.set_property("mgmt_addr", json!("10.0.0.9"));
        let ops = edit.synthesize();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].path, "/properties/mgmt_addr");
    }
}
