/*
 * Copyright 2026 the proc-probes developers
 *
 * This file is part of proc-probes.
 *
 * proc-probes is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * proc-probes is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with proc-probes. If not, see <https://www.gnu.org/licenses/>.
 */

//! The probe suites, plus helpers to locate and run the probe binaries.

use probes::{
	test_assert,
	util::{ProbeError, ProbeResult},
};
use std::{
	env,
	process::{Command, Output},
};

pub mod bootstrap;
pub mod duplication;
pub mod input;

/// Returns a command for the probe binary with name `name`, expected next to the runner's own
/// executable.
pub fn probe_command(name: &str) -> Result<Command, ProbeError> {
	let exe = env::current_exe()?;
	let dir = exe
		.parent()
		.ok_or_else(|| ProbeError(format!("cannot locate the `{name}` binary")))?;
	Ok(Command::new(dir.join(name)))
}

/// Runs `cmd` to completion and returns its captured output, failing on a nonzero exit status.
pub fn capture(cmd: &mut Command) -> Result<Output, ProbeError> {
	let output = cmd.output()?;
	if !output.status.success() {
		return Err(ProbeError(format!(
			"command failed (status: {status:?}): {cmd:?}",
			status = output.status.code(),
		)));
	}
	Ok(output)
}

/// Checks the shape of the report header for a present environment vector: the fixed prefix
/// followed by exactly eight uppercase hexadecimal digits.
pub fn check_environ_header(line: &str) -> ProbeResult {
	let Some(token) = line.strip_prefix("environ = 0x") else {
		return Err(ProbeError(format!("malformed environ header: `{line}`")));
	};
	test_assert!(token.len() == 8);
	test_assert!(token
		.chars()
		.all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
	Ok(())
}
