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

use model::{AvailabilityWindow, HardwareRecord, PatchOperation};
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::errors::{DoniCliError, DoniCliResult};
use crate::resolver;

/// Hardware list responses come wrapped in an envelope object.
#[derive(Debug, Deserialize)]
struct HardwareEnvelope {
    #[serde(default)]
    hardware: Vec<HardwareRecord>,
}

#[derive(Debug, Deserialize)]
struct AvailabilityEnvelope {
    #[serde(default)]
    availability: Vec<AvailabilityWindow>,
}

/// Client for the Doni REST API.
///
/// All mutating endpoints are keyed by UUID; use [`DoniClient::resolve`]
/// first when holding a user-supplied name-or-UUID identifier. The client
/// is stateless between calls and holds no session, an optional
/// pre-acquired token is passed through as `X-Auth-Token`.
#[derive(Clone)]
pub struct DoniClient {
    http: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl DoniClient {
    pub fn new(endpoint: &str, auth_token: Option<String>) -> DoniCliResult<Self> {
        let parsed = Url::parse(endpoint)
            .map_err(|e| DoniCliError::ApiConnectFailed(format!("invalid endpoint {endpoint}: {e}")))?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: parsed.as_str().trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.endpoint, path);
        let builder = self.http.request(method, url);
        match &self.auth_token {
            Some(token) => builder.header("X-Auth-Token", token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> DoniCliResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), body, "doni API request failed");
        Err(DoniCliError::RemoteError {
            status: status.as_u16(),
            body,
        })
    }

    /// `GET /v1/hardware/`, records owned by the caller's project.
    pub async fn list(&self) -> DoniCliResult<Vec<HardwareRecord>> {
        tracing::debug!("listing hardware");
        let response = self.send(self.request(Method::GET, "/v1/hardware/")).await?;
        let envelope: HardwareEnvelope = response.json().await?;
        Ok(envelope.hardware)
    }

    /// `GET /v1/hardware/export/`, the public view across all owners.
    pub async fn export(&self) -> DoniCliResult<Vec<HardwareRecord>> {
        tracing::debug!("exporting hardware");
        let response = self
            .send(self.request(Method::GET, "/v1/hardware/export/"))
            .await?;
        let envelope: HardwareEnvelope = response.json().await?;
        Ok(envelope.hardware)
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> DoniCliResult<HardwareRecord> {
        tracing::debug!(uuid, "fetching hardware");
        let response = self
            .send(self.request(Method::GET, &format!("/v1/hardware/{uuid}/")))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn get_availability(&self, uuid: &str) -> DoniCliResult<Vec<AvailabilityWindow>> {
        tracing::debug!(uuid, "fetching availability windows");
        let response = self
            .send(self.request(Method::GET, &format!("/v1/hardware/{uuid}/availability")))
            .await?;
        let envelope: AvailabilityEnvelope = response.json().await?;
        Ok(envelope.availability)
    }

    /// Enroll a new hardware record.
    pub async fn create(&self, body: &Value) -> DoniCliResult<HardwareRecord> {
        tracing::debug!("creating hardware");
        let response = self
            .send(self.request(Method::POST, "/v1/hardware/").json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// Apply a JSON-Patch operation list to an existing record. Callers
    /// are expected to skip the call entirely for an empty list.
    pub async fn update(&self, uuid: &str, patch: &[PatchOperation]) -> DoniCliResult<HardwareRecord> {
        tracing::debug!(uuid, ops = patch.len(), "patching hardware");
        let response = self
            .send(
                self.request(Method::PATCH, &format!("/v1/hardware/{uuid}/"))
                    .json(&patch),
            )
            .await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, uuid: &str) -> DoniCliResult<()> {
        tracing::debug!(uuid, "deleting hardware");
        self.send(self.request(Method::DELETE, &format!("/v1/hardware/{uuid}/")))
            .await?;
        Ok(())
    }

    /// Ask the service to re-run its sync workers for one record.
    pub async fn sync(&self, uuid: &str) -> DoniCliResult<()> {
        tracing::debug!(uuid, "requesting hardware sync");
        self.send(self.request(Method::POST, &format!("/v1/hardware/{uuid}/sync")))
            .await?;
        Ok(())
    }

    /// Resolve a name-or-UUID identifier to a canonical UUID, listing the
    /// inventory at most once.
    pub async fn resolve(&self, identifier: &str) -> DoniCliResult<String> {
        resolver::resolve_identifier(identifier, || self.list()).await
    }
}

#[cfg(test)]
mod tests {
    use model::EditRequest;
    use serde_json::json;

    use super::*;

    const UUID_A: &str = "9c2e3bd8-33a2-4dcc-a6b1-2a23e1a06d6f";
    const UUID_B: &str = "4f1be0a5-7f88-4c2a-a6fd-9a9f9c1d4d10";

    fn record_json(uuid: &str, name: &str) -> Value {
        json!({
            "uuid": uuid,
            "name": name,
            "hardware_type": "baremetal",
            "properties": {},
            "workers": [],
        })
    }

    fn hardware_body(records: &[Value]) -> String {
        json!({ "hardware": records }).to_string()
    }

    #[tokio::test]
    async fn list_unwraps_the_hardware_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/hardware/")
            .with_status(200)
            .with_body(hardware_body(&[record_json(UUID_A, "rack-1")]))
            .create_async()
            .await;

        let client = DoniClient::new(&server.url(), None).unwrap();
        let records = client.list().await.unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].uuid, UUID_A);
        assert_eq!(records[0].name, "rack-1");
    }

    #[tokio::test]
    async fn auth_token_is_passed_through_as_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/hardware/")
            .match_header("x-auth-token", "sekrit")
            .with_status(200)
            .with_body(hardware_body(&[]))
            .create_async()
            .await;

        let client = DoniClient::new(&server.url(), Some("sekrit".to_string())).unwrap();
        client.list().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_2xx_responses_surface_the_raw_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", format!("/v1/hardware/{UUID_A}/").as_str())
            .with_status(404)
            .with_body("Hardware 9c2e3bd8 could not be found.")
            .create_async()
            .await;

        let client = DoniClient::new(&server.url(), None).unwrap();
        let err = client.get_by_uuid(UUID_A).await.unwrap_err();

        match err {
            DoniCliError::RemoteError { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "Hardware 9c2e3bd8 could not be found.");
            }
            other => panic!("expected RemoteError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_sends_the_synthesized_patch_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", format!("/v1/hardware/{UUID_A}/").as_str())
            .match_body(mockito::Matcher::Json(json!([
                {"op": "add", "path": "/name", "value": "renamed"},
                {"op": "remove", "path": "/interface/1"},
            ])))
            .with_status(200)
            .with_body(record_json(UUID_A, "renamed").to_string())
            .create_async()
            .await;

        let edit = EditRequest {
            name: Some("renamed".to_string()),
            interface_delete: vec![1],
            ..Default::default()
        };

        let client = DoniClient::new(&server.url(), None).unwrap();
        let updated = client.update(UUID_A, &edit.synthesize()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(updated.name, "renamed");
    }

    #[tokio::test]
    async fn resolve_by_name_lists_once_and_returns_the_uuid() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/hardware/")
            .with_status(200)
            .with_body(hardware_body(&[
                record_json(UUID_A, "rack-1"),
                record_json(UUID_B, "rack-2"),
            ]))
            .expect(1)
            .create_async()
            .await;

        let client = DoniClient::new(&server.url(), None).unwrap();
        let resolved = client.resolve("rack-2").await.unwrap();

        mock.assert_async().await;
        assert_eq!(resolved, UUID_B);
    }

    #[tokio::test]
    async fn resolve_with_uuid_makes_no_network_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/hardware/")
            .expect(0)
            .create_async()
            .await;

        let client = DoniClient::new(&server.url(), None).unwrap();
        let resolved = client.resolve(UUID_A).await.unwrap();

        mock.assert_async().await;
        assert_eq!(resolved, UUID_A);
    }

    #[tokio::test]
    async fn resolve_duplicate_names_is_ambiguous() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/hardware/")
            .with_status(200)
            .with_body(hardware_body(&[
                record_json(UUID_A, "rack-1"),
                record_json(UUID_B, "rack-1"),
            ]))
            .create_async()
            .await;

        let client = DoniClient::new(&server.url(), None).unwrap();
        let err = client.resolve("rack-1").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "More than one resource exists with the name or ID 'rack-1'."
        );
    }

    #[test]
    fn endpoint_trailing_slash_is_normalized() {
        let client = DoniClient::new("http://inventory.example.org:8001/", None).unwrap();
        assert_eq!(client.endpoint(), "http://inventory.example.org:8001");

        assert!(DoniClient::new("not a url", None).is_err());
    }
}
