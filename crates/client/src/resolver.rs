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

use std::future::Future;

use model::HardwareRecord;

use crate::errors::{DoniCliError, DoniCliResult};

/// True if the identifier already is a canonical UUID, in which case no
/// listing round-trip is needed.
pub fn is_uuid(identifier: &str) -> bool {
    uuid::Uuid::parse_str(identifier).is_ok()
}

/// Map a user-supplied name-or-UUID onto the canonical record UUID.
///
/// Doni allows several records to share a name, so by-name lookup must
/// either find exactly one match or fail loudly; silently picking the
/// first match would mutate an arbitrary record. `lister` is called at
/// most once, and only when the identifier is not already a UUID.
pub async fn resolve_identifier<L, Fut>(identifier: &str, lister: L) -> DoniCliResult<String>
where
    L: FnOnce() -> Fut,
    Fut: Future<Output = DoniCliResult<Vec<HardwareRecord>>>,
{
    if is_uuid(identifier) {
        return Ok(identifier.to_string());
    }

    let records = lister().await?;
    let matches: Vec<&HardwareRecord> = records.iter().filter(|r| r.name == identifier).collect();

    match matches.as_slice() {
        [] => Err(DoniCliError::NotFound(identifier.to_string())),
        [record] => Ok(record.uuid.clone()),
        several => {
            tracing::debug!(
                identifier,
                count = several.len(),
                "identifier matches multiple records"
            );
            Err(DoniCliError::AmbiguousResource {
                identifier: identifier.to_string(),
                count: several.len(),
            })
        }
    }
}
