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

//! `proc-probes` drives the diagnostic probe binaries and verifies their observable behavior.
//!
//! An optional first argument names a JSON configuration file selecting the suites to run and
//! the report policy to drive the bootstrap inspector with.

use probes::{config::SuiteConfig, util::ProbeResult};
use std::{env, process::exit};

mod suites;

struct TestSuite {
	name: &'static str,
	desc: &'static str,
	tests: &'static [Test],
}

struct Test {
	name: &'static str,
	desc: &'static str,
	start: fn(&SuiteConfig) -> ProbeResult,
}

/// The list of tests to perform.
const TESTS: &[TestSuite] = &[
	TestSuite {
		name: "bootstrap",
		desc: "Bootstrap vector reporting",
		tests: &[
			Test {
				name: "report",
				desc: "Report a controlled argument and environment vector",
				start: suites::bootstrap::report,
			},
			Test {
				name: "terminator",
				desc: "The terminator line is emitted by default",
				start: suites::bootstrap::terminator,
			},
			Test {
				name: "no-terminator",
				desc: "The terminator line can be disabled",
				start: suites::bootstrap::no_terminator,
			},
			Test {
				name: "scrubbed-environment",
				desc: "An emptied environment is reported as present with zero entries",
				start: suites::bootstrap::scrubbed_environment,
			},
			Test {
				name: "resident",
				desc: "The report is flushed before the program blocks forever",
				start: suites::bootstrap::resident,
			},
		],
	},
	TestSuite {
		name: "duplication",
		desc: "Process duplication semantics",
		tests: &[
			Test {
				name: "branches",
				desc: "One duplication, two processes, two roles, distinct identifiers",
				start: suites::duplication::branches,
			},
			Test {
				name: "interleaving",
				desc: "Lines stay intact whichever way the two processes interleave",
				start: suites::duplication::interleaving,
			},
		],
	},
	TestSuite {
		name: "input",
		desc: "Bounded terminal input handling",
		tests: &[
			Test {
				name: "truncation",
				desc: "Input longer than the capacity is truncated, not overrun",
				start: suites::input::truncation,
			},
			Test {
				name: "empty",
				desc: "End of input is reported as zero bytes read",
				start: suites::input::empty,
			},
		],
	},
];

fn main() {
	let config = match env::args().nth(1) {
		Some(path) => match SuiteConfig::load(&path) {
			Ok(config) => config,
			Err(err) => {
				eprintln!("config: {err}");
				exit(1);
			}
		},
		None => SuiteConfig::default(),
	};
	// Start marker
	println!();
	println!("[START]");
	let mut success = 0;
	let mut total = 0;
	for suite in TESTS {
		if !config.suite_enabled(suite.name) {
			continue;
		}
		println!("[SUITE] {}", suite.name);
		println!("[DESC] {}", suite.desc);
		for test in suite.tests {
			total += 1;
			println!("[TEST] {}", test.name);
			println!("[DESC] {}", test.desc);
			let res = (test.start)(&config);
			match res {
				Ok(_) => {
					success += 1;
					println!("[OK]")
				}
				Err(err) => println!("[KO] {}", err.0),
			}
		}
	}
	println!("[SUCCESS] {success}/{total}");
	// End marker
	println!("[END]");
	if success < total {
		exit(1);
	}
}
