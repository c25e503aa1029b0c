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

pub mod args;
pub mod cmds;


use doni_client::DoniCliResult;
pub use args::Cmd;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for Cmd {
    async fn dispatch(self, mut ctx: RuntimeContext) -> DoniCliResult<()> {
        match self {
            Cmd::Create(args) => {
                cmds::create(
                    &args,
                    &ctx.api_client,
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
            Cmd::Set(args) => {
                cmds::set(
                    &args,
                    &ctx.api_client,
                    &mut ctx.output_file,
                    ctx.config.format,
                )
                .await
            }
        }
    }
}
