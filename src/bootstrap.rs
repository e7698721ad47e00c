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

//! Bootstrap state inspection.
//!
//! A process receives its argument and environment vectors from the platform at creation and
//! never mutates them. The inspector renders both to a sink as a deterministic, ordered report:
//! rendering the same vectors twice yields byte-identical text.

use serde::Deserialize;
use std::{
	io::{self, Write},
	thread,
};

/// Rendering policy for bootstrap reports.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct ReportPolicy {
	/// Whether a final `argv[argc] = NULL` terminator line is emitted after the last real
	/// argument.
	pub emit_terminator_line: bool,
	/// Whether the reporting program stays resident (blocked forever) after the report instead
	/// of returning.
	pub block_after_report: bool,
}

impl Default for ReportPolicy {
	fn default() -> Self {
		Self {
			emit_terminator_line: true,
			block_after_report: false,
		}
	}
}

/// Renders the argument vector `args` to `out`: the count, then one line per entry in index
/// order, then the terminator line when `policy` requests it.
pub fn report_arguments<W: Write>(
	out: &mut W,
	args: &[String],
	policy: &ReportPolicy,
) -> io::Result<()> {
	writeln!(out, "argc = {}", args.len())?;
	for (i, arg) in args.iter().enumerate() {
		writeln!(out, "argv[{i}] = {arg}")?;
	}
	if policy.emit_terminator_line {
		writeln!(out, "argv[{}] = NULL", args.len())?;
	}
	Ok(())
}

/// Renders the environment vector `env` to `out`.
///
/// The platform does not guarantee the vector exists at all: `None` produces a single
/// `environ = NULL` line. A present vector produces a header carrying an opaque numeric token,
/// one line per entry in index order, then a terminator line whose index equals the entry count.
pub fn report_environment<W: Write>(out: &mut W, env: Option<&[String]>) -> io::Result<()> {
	let Some(env) = env else {
		return writeln!(out, "environ = NULL");
	};
	writeln!(out, "environ = 0x{:08X}", env_token(env))?;
	for (i, entry) in env.iter().enumerate() {
		writeln!(out, "environ[{i}] = {entry}")?;
	}
	writeln!(out, "environ[{}] = NULL", env.len())
}

/// Returns the opaque token identifying `env` in the report header.
///
/// This is the vector's address truncated to 32 bits. It is a diagnostic artifact only: stable
/// while the vector lives, different across runs, and not part of any contract.
fn env_token(env: &[String]) -> u32 {
	env.as_ptr() as usize as u32
}

/// Suspends the calling thread forever, simulating a resident diagnostic process.
///
/// Only external termination of the process leaves this state. `park` may return spuriously,
/// hence the loop.
pub fn block_forever() -> ! {
	loop {
		thread::park();
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn strings(src: &[&str]) -> Vec<String> {
		src.iter().map(|s| (*s).to_string()).collect()
	}

	fn render(args: &[String], env: Option<&[String]>, policy: &ReportPolicy) -> String {
		let mut out = Vec::new();
		report_arguments(&mut out, args, policy).unwrap();
		report_environment(&mut out, env).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn arguments0() {
		// A zero-length vector is abnormal but must be tolerated
		let mut out = Vec::new();
		report_arguments(&mut out, &[], &ReportPolicy::default()).unwrap();
		assert_eq!(out, b"argc = 0\nargv[0] = NULL\n");
	}

	#[test]
	fn arguments1() {
		let args = strings(&["prog", "first", "", "two words"]);
		let mut out = Vec::new();
		report_arguments(&mut out, &args, &ReportPolicy::default()).unwrap();
		let text = String::from_utf8(out).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(
			lines,
			[
				"argc = 4",
				"argv[0] = prog",
				"argv[1] = first",
				"argv[2] = ",
				"argv[3] = two words",
				"argv[4] = NULL",
			]
		);
	}

	#[test]
	fn arguments2() {
		let args = strings(&["prog"]);
		let policy = ReportPolicy {
			emit_terminator_line: false,
			..Default::default()
		};
		let mut out = Vec::new();
		report_arguments(&mut out, &args, &policy).unwrap();
		assert_eq!(out, b"argc = 1\nargv[0] = prog\n");
	}

	#[test]
	fn environment0() {
		let mut out = Vec::new();
		report_environment(&mut out, None).unwrap();
		assert_eq!(out, b"environ = NULL\n");
	}

	#[test]
	fn environment1() {
		let env = strings(&["PATH=/bin", "TERM=dumb"]);
		let mut out = Vec::new();
		report_environment(&mut out, Some(&env)).unwrap();
		let text = String::from_utf8(out).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), env.len() + 2);
		let header = lines[0].strip_prefix("environ = 0x").unwrap();
		assert_eq!(header.len(), 8);
		assert!(header.chars().all(|c| c.is_ascii_hexdigit()));
		assert_eq!(lines[1], "environ[0] = PATH=/bin");
		assert_eq!(lines[2], "environ[1] = TERM=dumb");
		assert_eq!(lines[3], "environ[2] = NULL");
	}

	#[test]
	fn environment2() {
		// Present but empty: still a header and a terminator
		let env: Vec<String> = Vec::new();
		let mut out = Vec::new();
		report_environment(&mut out, Some(&env)).unwrap();
		let text = String::from_utf8(out).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 2);
		assert!(lines[0].starts_with("environ = 0x"));
		assert_eq!(lines[1], "environ[0] = NULL");
	}

	#[test]
	fn scenario0() {
		// ArgumentVector = ["prog"], EnvironmentVector absent
		let args = strings(&["prog"]);
		let text = render(&args, None, &ReportPolicy::default());
		assert_eq!(text, "argc = 1\nargv[0] = prog\nargv[1] = NULL\nenviron = NULL\n");
	}

	#[test]
	fn idempotence0() {
		let args = strings(&["prog", "a"]);
		let env = strings(&["A=1"]);
		let policy = ReportPolicy::default();
		let first = render(&args, Some(&env), &policy);
		let second = render(&args, Some(&env), &policy);
		assert_eq!(first, second);
	}
}
