/*
 * SPDX-FileCopyrightText: Copyright (c) 2024-2026 University of Chicago
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

use clap::{CommandFactory, Parser};

use super::args::*;

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_show ensures show parses with an identifier.
#[test]
fn parse_show() {
    let cmd = Cmd::try_parse_from(["availability", "show", "rack-1"]).expect("should parse show");

    match cmd {
        Cmd::Show(args) => assert_eq!(args.name_or_uuid, "rack-1"),
    }
}

// parse_show_missing_identifier_fails ensures show requires an
// identifier.
#[test]
fn parse_show_missing_identifier_fails() {
    assert!(Cmd::try_parse_from(["availability", "show"]).is_err());
}
