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

//! `fork` duplicates itself once and lets both resulting processes report their role and
//! identifier.
//!
//! Output goes through raw writes on the standard output descriptor, never through the buffered
//! stream: after the duplication the two processes share no coordination, and anything left in a
//! buffer on one side would never be flushed by the other.

use probes::duplication;
use std::process::exit;

fn main() {
	if let Err(err) = duplication::probe(libc::STDOUT_FILENO) {
		eprintln!("fork: {err}");
		exit(1);
	}
	// Both processes fall out of the probe independently; neither waits for the other
}
