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

//! `arg-env` reports the process's own bootstrap vectors.
//!
//! The flags `--no-terminator` and `--block` adjust the report policy. Flags are ordinary
//! argument-vector entries and show up in the report like anything else the program was invoked
//! with.

use probes::bootstrap::{self, ReportPolicy};
use std::{
	env,
	io::{self, Write},
	process::exit,
};

fn report(args: &[String], environ: &[String], policy: &ReportPolicy) -> io::Result<()> {
	let mut out = io::stdout().lock();
	bootstrap::report_arguments(&mut out, args, policy)?;
	bootstrap::report_environment(&mut out, Some(environ))?;
	// The sink may be fully buffered (e.g. a pipe): flush before blocking or returning
	out.flush()
}

fn main() {
	let args: Vec<String> = env::args_os()
		.map(|arg| arg.to_string_lossy().into_owned())
		.collect();
	let mut policy = ReportPolicy::default();
	for arg in args.iter().skip(1) {
		match arg.as_str() {
			"--no-terminator" => policy.emit_terminator_line = false,
			"--block" => policy.block_after_report = true,
			// Anything else is just an argument to report
			_ => {}
		}
	}
	// The platform hands every process an environment vector, possibly empty. The absent case
	// exists only below the library API
	let environ: Vec<String> = env::vars_os()
		.map(|(key, value)| {
			format!("{}={}", key.to_string_lossy(), value.to_string_lossy())
		})
		.collect();
	if let Err(err) = report(&args, &environ, &policy) {
		eprintln!("report: {err}");
		exit(1);
	}
	if policy.block_after_report {
		bootstrap::block_forever();
	}
}
