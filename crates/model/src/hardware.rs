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

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A hardware record as returned by the Doni API. The service owns the
/// record; the client only ever holds a request-scoped, read-only copy.
///
/// `name` is not guaranteed to be unique across the inventory, which is
/// why mutating commands go through identifier resolution first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareRecord {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub project_id: Option<String>,
    /// Open-ended type tag, e.g. "baremetal" or "device.balena". New types
    /// appear server-side without a client release, so this stays a String.
    pub hardware_type: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub workers: Vec<WorkerStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl HardwareRecord {
    /// Flatten per-worker state into (worker_type, state, detail) display
    /// columns. The list command appends one column pair per worker type.
    pub fn worker_state_columns(&self) -> Vec<(String, WorkerState, String)> {
        self.workers
            .iter()
            .map(|w| (w.worker_type.clone(), w.state, w.last_error().unwrap_or_default()))
            .collect()
    }
}

/// Status of one sync worker attached to a hardware record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerStatus {
    pub worker_type: String,
    pub state: WorkerState,
    #[serde(default)]
    pub state_details: Map<String, Value>,
}

impl WorkerStatus {
    pub fn last_error(&self) -> Option<String> {
        self.state_details
            .get("last_error")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerState {
    Pending,
    InProgress,
    Error,
    Steady,
}

impl std::fmt::Display for WorkerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorkerState::Pending => "PENDING",
            WorkerState::InProgress => "IN_PROGRESS",
            WorkerState::Error => "ERROR",
            WorkerState::Steady => "STEADY",
        };
        f.write_str(s)
    }
}

/// One availability window attached to a hardware record. `id` is assigned
/// by the service and is absent from freshly built windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_record_with_workers() {
        let raw = serde_json::json!({
            "uuid": "0a8e1b5e-0000-4c93-8a7e-3d1c2f9d7a11",
            "name": "rack-1",
            "project_id": "p1",
            "hardware_type": "baremetal",
            "properties": {"mgmt_addr": "10.0.0.4"},
            "workers": [
                {"worker_type": "blazar", "state": "STEADY", "state_details": {}},
                {"worker_type": "ironic", "state": "ERROR",
                 "state_details": {"last_error": "deploy failed"}},
            ],
        });
        let record: HardwareRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.workers.len(), 2);
        assert_eq!(record.workers[1].state, WorkerState::Error);

        let columns = record.worker_state_columns();
        assert_eq!(
            columns,
            vec![
                ("blazar".to_string(), WorkerState::Steady, String::new()),
                ("ironic".to_string(), WorkerState::Error, "deploy failed".to_string()),
            ]
        );
    }

    #[test]
    fn worker_state_round_trips_screaming_snake_case() {
        let state: WorkerState = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(state, WorkerState::InProgress);
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"IN_PROGRESS\"");
    }
}
