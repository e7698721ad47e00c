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

//! Bounded input checks, driving the `user-input` binary.

use crate::suites;
use probes::{
	config::SuiteConfig,
	log, test_assert, test_assert_eq,
	util::{ProbeError, ProbeResult},
};
use std::{io::Write, process::Stdio};

fn run_with_input(input: Option<&[u8]>) -> Result<String, ProbeError> {
	let mut cmd = suites::probe_command("user-input")?;
	cmd.stdout(Stdio::piped());
	match input {
		Some(_) => cmd.stdin(Stdio::piped()),
		None => cmd.stdin(Stdio::null()),
	};
	let mut child = cmd.spawn()?;
	if let Some(data) = input {
		let mut stdin = child
			.stdin
			.take()
			.ok_or_else(|| ProbeError("missing stdin handle".to_string()))?;
		// A single write, closed afterwards
		stdin.write_all(data)?;
	}
	let output = child.wait_with_output()?;
	if !output.status.success() {
		return Err(ProbeError(format!(
			"user-input failed (status: {status:?})",
			status = output.status.code(),
		)));
	}
	Ok(String::from_utf8(output.stdout)?)
}

pub fn truncation(_config: &SuiteConfig) -> ProbeResult {
	log!("Feed five bytes into a two-byte capacity");
	let text = run_with_input(Some(b"hello"))?;
	test_assert_eq!(text, "Enter something:\n> nread: 2\n\"he\"\n");
	Ok(())
}

pub fn empty(_config: &SuiteConfig) -> ProbeResult {
	log!("Close the input immediately");
	let text = run_with_input(None)?;
	test_assert!(text.ends_with("nread: 0\n\"\"\n"));
	Ok(())
}
