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

//! Bootstrap vector reporting checks, driving the `arg-env` binary.

use crate::suites;
use probes::{
	config::SuiteConfig,
	log, test_assert, test_assert_eq,
	util::{ProbeError, ProbeResult},
};
use std::{
	io::{BufRead, BufReader},
	process::Stdio,
};

pub fn report(config: &SuiteConfig) -> ProbeResult {
	let mut cmd = suites::probe_command("arg-env")?;
	cmd.args(["first", "two words", ""]);
	let has_flag = !config.report.emit_terminator_line;
	if has_flag {
		cmd.arg("--no-terminator");
	}
	// A controlled environment; the entries reach the process in sorted order
	cmd.env_clear();
	cmd.env("AAA", "1");
	cmd.env("BBB", "2");
	log!("Run arg-env");
	let output = suites::capture(&mut cmd)?;
	let text = String::from_utf8(output.stdout)?;
	let mut lines = text.lines();
	log!("Check argument section");
	let argc = 4 + usize::from(has_flag);
	let argc_line = format!("argc = {argc}");
	test_assert_eq!(lines.next(), Some(argc_line.as_str()));
	let argv0 = lines.next().unwrap_or("");
	test_assert!(argv0.starts_with("argv[0] = "));
	test_assert!(argv0.ends_with("arg-env"));
	test_assert_eq!(lines.next(), Some("argv[1] = first"));
	test_assert_eq!(lines.next(), Some("argv[2] = two words"));
	test_assert_eq!(lines.next(), Some("argv[3] = "));
	if has_flag {
		test_assert_eq!(lines.next(), Some("argv[4] = --no-terminator"));
	} else {
		let term = format!("argv[{argc}] = NULL");
		test_assert_eq!(lines.next(), Some(term.as_str()));
	}
	log!("Check environment section");
	suites::check_environ_header(lines.next().unwrap_or(""))?;
	test_assert_eq!(lines.next(), Some("environ[0] = AAA=1"));
	test_assert_eq!(lines.next(), Some("environ[1] = BBB=2"));
	test_assert_eq!(lines.next(), Some("environ[2] = NULL"));
	test_assert_eq!(lines.next(), None);
	Ok(())
}

pub fn terminator(_config: &SuiteConfig) -> ProbeResult {
	let mut cmd = suites::probe_command("arg-env")?;
	cmd.env_clear();
	let output = suites::capture(&mut cmd)?;
	let text = String::from_utf8(output.stdout)?;
	test_assert!(text.lines().any(|l| l == "argv[1] = NULL"));
	Ok(())
}

pub fn no_terminator(_config: &SuiteConfig) -> ProbeResult {
	let mut cmd = suites::probe_command("arg-env")?;
	cmd.arg("--no-terminator");
	cmd.env_clear();
	let output = suites::capture(&mut cmd)?;
	let text = String::from_utf8(output.stdout)?;
	let lines: Vec<&str> = text.lines().collect();
	test_assert_eq!(lines.first().copied(), Some("argc = 2"));
	test_assert_eq!(lines.get(2).copied(), Some("argv[1] = --no-terminator"));
	// Straight from the last argument to the environment section
	test_assert!(!lines.iter().any(|l| l.starts_with("argv[2]")));
	Ok(())
}

pub fn scrubbed_environment(_config: &SuiteConfig) -> ProbeResult {
	let mut cmd = suites::probe_command("arg-env")?;
	cmd.env_clear();
	let output = suites::capture(&mut cmd)?;
	let text = String::from_utf8(output.stdout)?;
	let lines: Vec<&str> = text.lines().collect();
	test_assert_eq!(lines.len(), 5);
	test_assert_eq!(lines[0], "argc = 1");
	test_assert_eq!(lines[2], "argv[1] = NULL");
	suites::check_environ_header(lines[3])?;
	test_assert_eq!(lines[4], "environ[0] = NULL");
	Ok(())
}

pub fn resident(_config: &SuiteConfig) -> ProbeResult {
	let mut cmd = suites::probe_command("arg-env")?;
	cmd.arg("--block");
	cmd.env_clear();
	cmd.stdout(Stdio::piped());
	log!("Spawn resident arg-env");
	let mut child = cmd.spawn()?;
	let stdout = child
		.stdout
		.take()
		.ok_or_else(|| ProbeError("missing stdout handle".to_string()))?;
	let mut reader = BufReader::new(stdout);
	// The environment terminator is the report's last line; reaching it proves the report was
	// flushed even though the process never returns
	loop {
		let mut line = String::new();
		let n = reader.read_line(&mut line)?;
		if n == 0 {
			child.kill()?;
			child.wait()?;
			return Err(ProbeError("report ended before the terminator".to_string()));
		}
		if line.trim_end() == "environ[0] = NULL" {
			break;
		}
	}
	log!("Terminate it externally");
	let resident = child.try_wait()?.is_none();
	if resident {
		child.kill()?;
	}
	child.wait()?;
	test_assert!(resident);
	Ok(())
}
