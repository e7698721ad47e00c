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

//! `user-input` reads a bounded amount of input from the terminal and echoes it back.

use probes::input;
use std::{
	io::{self, Write},
	process::exit,
};

/// Maximum number of bytes a single prompt accepts. Longer input is truncated, not an error.
const INPUT_CAPACITY: usize = 2;

fn run() -> io::Result<Vec<u8>> {
	let mut out = io::stdout().lock();
	writeln!(out, "Enter something:")?;
	write!(out, "> ")?;
	// The prompt has no newline, flush so it is visible before the blocking read
	out.flush()?;
	input::read_bounded(libc::STDIN_FILENO, INPUT_CAPACITY)
}

fn main() {
	match run() {
		Ok(buf) => {
			println!("nread: {}", buf.len());
			println!("\"{}\"", String::from_utf8_lossy(&buf));
		}
		Err(err) => {
			eprintln!("read: {err}");
			exit(1);
		}
	}
}
