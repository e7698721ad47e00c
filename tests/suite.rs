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

//! End-to-end checks of the probe binaries and the suite runner.

use std::{
	env, fs,
	io::Write,
	process::{Command, Stdio},
};

fn stdout_of(cmd: &mut Command) -> String {
	let output = cmd.output().unwrap();
	assert!(output.status.success(), "{cmd:?} failed");
	String::from_utf8(output.stdout).unwrap()
}

#[test]
fn arg_env_scrubbed() {
	let text = stdout_of(Command::new(env!("CARGO_BIN_EXE_arg-env")).env_clear());
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines.len(), 5);
	assert_eq!(lines[0], "argc = 1");
	assert!(lines[1].starts_with("argv[0] = "));
	assert_eq!(lines[2], "argv[1] = NULL");
	assert!(lines[3].starts_with("environ = 0x"));
	assert_eq!(lines[3].len(), "environ = 0x".len() + 8);
	assert_eq!(lines[4], "environ[0] = NULL");
}

#[test]
fn arg_env_entries() {
	let text = stdout_of(
		Command::new(env!("CARGO_BIN_EXE_arg-env"))
			.args(["alpha", "", "two words"])
			.env_clear()
			.env("AAA", "1"),
	);
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines[0], "argc = 4");
	assert_eq!(lines[2], "argv[1] = alpha");
	assert_eq!(lines[3], "argv[2] = ");
	assert_eq!(lines[4], "argv[3] = two words");
	assert_eq!(lines[5], "argv[4] = NULL");
	assert_eq!(lines[7], "environ[0] = AAA=1");
	assert_eq!(lines[8], "environ[1] = NULL");
}

#[test]
fn arg_env_no_terminator() {
	let text = stdout_of(
		Command::new(env!("CARGO_BIN_EXE_arg-env"))
			.arg("--no-terminator")
			.env_clear(),
	);
	assert!(!text.lines().any(|l| l.contains("argv[2]")));
	assert_eq!(text.lines().next(), Some("argc = 2"));
}

#[test]
fn fork_two_processes() {
	let text = stdout_of(&mut Command::new(env!("CARGO_BIN_EXE_fork")));
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines.len(), 4, "unexpected output: {text:?}");
	assert_eq!(lines.iter().filter(|l| **l == "Child").count(), 1);
	assert_eq!(lines.iter().filter(|l| **l == "Parent").count(), 1);
	let pids: Vec<i32> = lines
		.iter()
		.filter_map(|l| l.strip_prefix("PID: "))
		.map(|pid| pid.parse().unwrap())
		.collect();
	assert_eq!(pids.len(), 2);
	assert_ne!(pids[0], pids[1]);
}

#[test]
fn user_input_truncation() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_user-input"))
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.spawn()
		.unwrap();
	child.stdin.take().unwrap().write_all(b"hello").unwrap();
	let output = child.wait_with_output().unwrap();
	assert!(output.status.success());
	assert_eq!(
		String::from_utf8(output.stdout).unwrap(),
		"Enter something:\n> nread: 2\n\"he\"\n"
	);
}

#[test]
fn runner_all_suites() {
	let text = stdout_of(&mut Command::new(env!("CARGO_BIN_EXE_proc-probes")));
	assert!(text.contains("[START]"));
	assert!(text.contains("[SUITE] bootstrap"));
	assert!(text.contains("[SUITE] duplication"));
	assert!(text.contains("[SUITE] input"));
	assert!(!text.contains("[KO]"), "runner reported failures:\n{text}");
	assert!(text.contains("[SUCCESS] 9/9"));
	assert!(text.contains("[END]"));
}

#[test]
fn runner_with_config() {
	let path = env::temp_dir().join("proc-probes-runner-config.json");
	fs::write(
		&path,
		r#"{ "suites": ["bootstrap"], "report": { "emit_terminator_line": false } }"#,
	)
	.unwrap();
	let text = stdout_of(Command::new(env!("CARGO_BIN_EXE_proc-probes")).arg(&path));
	assert!(text.contains("[SUITE] bootstrap"));
	assert!(!text.contains("[SUITE] duplication"));
	assert!(!text.contains("[KO]"), "runner reported failures:\n{text}");
	assert!(text.contains("[SUCCESS] 5/5"));
}
