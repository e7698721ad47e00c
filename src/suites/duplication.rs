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

//! Process duplication checks, driving the `fork` binary.

use crate::suites;
use probes::{
	config::SuiteConfig,
	log, test_assert, test_assert_eq,
	util::ProbeResult,
};

/// Runs the `fork` binary once and checks its merged output: two role lines, two identifier
/// lines, distinct identifiers, in any relative order.
fn check_once() -> ProbeResult {
	let output = suites::capture(&mut suites::probe_command("fork")?)?;
	let text = String::from_utf8(output.stdout)?;
	let lines: Vec<&str> = text.lines().collect();
	test_assert_eq!(lines.len(), 4);
	let children = lines.iter().filter(|l| **l == "Child").count();
	let parents = lines.iter().filter(|l| **l == "Parent").count();
	test_assert_eq!(children, 1);
	test_assert_eq!(parents, 1);
	let pids = lines
		.iter()
		.filter_map(|l| l.strip_prefix("PID: "))
		.map(str::parse::<i32>)
		.collect::<Result<Vec<_>, _>>()?;
	test_assert_eq!(pids.len(), 2);
	test_assert!(pids[0] != pids[1]);
	Ok(())
}

pub fn branches(_config: &SuiteConfig) -> ProbeResult {
	log!("Run fork");
	check_once()
}

pub fn interleaving(_config: &SuiteConfig) -> ProbeResult {
	// The two processes are scheduled independently; repeat to sample several interleavings
	log!("Run fork repeatedly");
	for _ in 0..16 {
		check_once()?;
	}
	Ok(())
}
