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

//! Data model for the Doni hardware inventory and the client-side patch
//! construction logic. Everything in here is pure data conversion; the
//! HTTP plumbing lives in `doni-client`.

pub mod errors;
pub mod hardware;
pub mod patch;

pub use errors::DataConversionError;
pub use hardware::{AvailabilityWindow, HardwareRecord, WorkerState, WorkerStatus};
pub use patch::{EditRequest, InterfaceSpec, PatchOp, PatchOperation, WindowSpec};
