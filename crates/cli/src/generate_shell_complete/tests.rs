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

// parse_shells ensures each supported shell parses.
#[test]
fn parse_shells() {
    for (name, expected) in [
        ("bash", Shell::Bash),
        ("fish", Shell::Fish),
        ("zsh", Shell::Zsh),
    ] {
        let cmd = Cmd::try_parse_from(["generate-shell-complete", name])
            .unwrap_or_else(|e| panic!("should parse {name}: {e}"));
        assert_eq!(cmd.shell, expected);
    }
}

// parse_unknown_shell_fails ensures unsupported shells are rejected.
#[test]
fn parse_unknown_shell_fails() {
    assert!(Cmd::try_parse_from(["generate-shell-complete", "powershell"]).is_err());
}
