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

use doni_client::{DoniClient, DoniCliResult};
use model::{AvailabilityWindow, HardwareRecord, PatchOperation};

/// [`ApiClient`] is a thin wrapper around [`DoniClient`] adding the
/// identifier-resolving variants of the mutating calls.
///
/// Callers can use `.0` to reach the raw UUID-keyed endpoints directly.
/// The methods here exist because every mutating command accepts a
/// name-or-UUID, and resolution must happen exactly once, before the
/// mutating request, never inside it.
pub struct ApiClient(pub DoniClient);

impl ApiClient {
    pub async fn show_hardware(&self, identifier: &str) -> DoniCliResult<HardwareRecord> {
        let uuid = self.0.resolve(identifier).await?;
        self.0.get_by_uuid(&uuid).await
    }

    pub async fn update_hardware(
        &self,
        identifier: &str,
        patch: &[PatchOperation],
    ) -> DoniCliResult<HardwareRecord> {
        let uuid = self.0.resolve(identifier).await?;
        self.0.update(&uuid, patch).await
    }

    pub async fn delete_hardware(&self, identifier: &str) -> DoniCliResult<()> {
        let uuid = self.0.resolve(identifier).await?;
        self.0.delete(&uuid).await
    }

    pub async fn sync_hardware(&self, identifier: &str) -> DoniCliResult<()> {
        let uuid = self.0.resolve(identifier).await?;
        self.0.sync(&uuid).await
    }

    pub async fn hardware_availability(
        &self,
        identifier: &str,
    ) -> DoniCliResult<Vec<AvailabilityWindow>> {
        let uuid = self.0.resolve(identifier).await?;
        self.0.get_availability(&uuid).await
    }
}

#[cfg(test)]
mod tests {
    use doni_client::DoniCliError;
    use model::{EditRequest, PatchOperation};
    use serde_json::json;

    use super::*;

    const UUID_A: &str = "9c2e3bd8-33a2-4dcc-a6b1-2a23e1a06d6f";
    const UUID_B: &str = "4f1be0a5-7f88-4c2a-a6fd-9a9f9c1d4d10";

    fn duplicate_rack_body() -> String {
        json!({
            "hardware": [
                {"uuid": UUID_A, "name": "rack-1", "hardware_type": "baremetal"},
                {"uuid": UUID_B, "name": "rack-1", "hardware_type": "baremetal"},
            ]
        })
        .to_string()
    }

    fn client_for(server: &mockito::Server) -> ApiClient {
        ApiClient(DoniClient::new(&server.url(), None).unwrap())
    }

    // Two records share the name "rack-1"; update, delete and sync must
    // all refuse to pick one and must never reach the mutating endpoint.
    #[tokio::test]
    async fn ambiguous_name_blocks_every_mutating_command() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/hardware/")
            .with_status(200)
            .with_body(duplicate_rack_body())
            .expect(3)
            .create_async()
            .await;
        let patch_mock = server
            .mock("PATCH", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let delete_mock = server
            .mock("DELETE", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let sync_mock = server
            .mock("POST", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let api = client_for(&server);
        let patch = vec![PatchOperation::add("/name", json!("renamed"))];

        for err in [
            api.update_hardware("rack-1", &patch).await.unwrap_err(),
            api.delete_hardware("rack-1").await.unwrap_err(),
            api.sync_hardware("rack-1").await.unwrap_err(),
        ] {
            assert!(matches!(
                &err,
                DoniCliError::AmbiguousResource { identifier, count: 2 } if identifier == "rack-1"
            ));
            assert_eq!(
                err.to_string(),
                "More than one resource exists with the name or ID 'rack-1'."
            );
        }

        patch_mock.assert_async().await;
        delete_mock.assert_async().await;
        sync_mock.assert_async().await;
    }

    // Addressing one of the duplicates by UUID bypasses the listing and
    // hits exactly the endpoint for that UUID.
    #[tokio::test]
    async fn uuid_identifier_mutates_exactly_one_record() {
        let mut server = mockito::Server::new_async().await;
        let list_mock = server
            .mock("GET", "/v1/hardware/")
            .expect(0)
            .create_async()
            .await;
        let patch_mock = server
            .mock("PATCH", format!("/v1/hardware/{UUID_A}/").as_str())
            .match_body(mockito::Matcher::Json(json!([
                {"op": "add", "path": "/name", "value": "rack-1-a"},
            ])))
            .with_status(200)
            .with_body(
                json!({"uuid": UUID_A, "name": "rack-1-a", "hardware_type": "baremetal"})
                    .to_string(),
            )
            .expect(1)
            .create_async()
            .await;
        let delete_mock = server
            .mock("DELETE", format!("/v1/hardware/{UUID_A}/").as_str())
            .with_status(204)
            .expect(1)
            .create_async()
            .await;
        let sync_mock = server
            .mock("POST", format!("/v1/hardware/{UUID_A}/sync").as_str())
            .with_status(202)
            .expect(1)
            .create_async()
            .await;

        let api = client_for(&server);

        let edit = EditRequest {
            name: Some("rack-1-a".to_string()),
            ..Default::default()
        };
        let updated = api.update_hardware(UUID_A, &edit.synthesize()).await.unwrap();
        assert_eq!(updated.name, "rack-1-a");

        api.delete_hardware(UUID_A).await.unwrap();
        api.sync_hardware(UUID_A).await.unwrap();

        list_mock.assert_async().await;
        patch_mock.assert_async().await;
        delete_mock.assert_async().await;
        sync_mock.assert_async().await;
    }

    #[tokio::test]
    async fn show_resolves_names_before_fetching() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/hardware/")
            .with_status(200)
            .with_body(
                json!({"hardware": [
                    {"uuid": UUID_A, "name": "rack-1", "hardware_type": "baremetal"},
                ]})
                .to_string(),
            )
            .create_async()
            .await;
        let get_mock = server
            .mock("GET", format!("/v1/hardware/{UUID_A}/").as_str())
            .with_status(200)
            .with_body(
                json!({"uuid": UUID_A, "name": "rack-1", "hardware_type": "baremetal"})
                    .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let api = client_for(&server);
        let record = api.show_hardware("rack-1").await.unwrap();

        get_mock.assert_async().await;
        assert_eq!(record.uuid, UUID_A);
    }
}
