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

//! Utility features shared by the probes and the suite runner.

use std::{
	error::Error,
	ffi::{c_int, c_void},
	io,
};

pub struct ProbeError(pub String);

impl<E: Error> From<E> for ProbeError {
	fn from(err: E) -> Self {
		ProbeError(err.to_string())
	}
}

/// Result of a probe check.
pub type ProbeResult = Result<(), ProbeError>;

/// Probe assertion.
#[macro_export]
macro_rules! test_assert {
	($predicate:expr) => {{
		let pred = ($predicate);
		if !pred {
			return Err($crate::util::ProbeError(format!(
				"Assertion failed: {}",
				stringify!($predicate)
			)));
		}
	}};
}

/// Probe assertion with comparison.
#[macro_export]
macro_rules! test_assert_eq {
	($a:expr, $b:expr) => {{
		let a = ($a);
		let b = ($b);
		if a != b {
			return Err($crate::util::ProbeError(format!(
				"Assertion failed\n\tleft: `{:?}`\n\tright: `{:?}`",
				a, b
			)));
		}
	}};
}

/// Prints a log.
#[macro_export]
macro_rules! log {
	($($arg:tt)*) => {{
		println!("[LOG] {}", format_args!($($arg)*));
	}};
}

/// Writes `line`, with a trailing newline appended, to the file descriptor `fd` as a single
/// `write(2)` call.
///
/// A single call is required so that the line cannot be torn apart by another process writing to
/// the same descriptor. A short write is reported as an error rather than retried.
pub fn write_line(fd: c_int, line: &str) -> io::Result<()> {
	let mut buf = Vec::with_capacity(line.len() + 1);
	buf.extend_from_slice(line.as_bytes());
	buf.push(b'\n');
	let res = unsafe { libc::write(fd, buf.as_ptr() as *const c_void, buf.len()) };
	if res < 0 {
		Err(io::Error::last_os_error())
	} else if (res as usize) < buf.len() {
		Err(io::Error::new(io::ErrorKind::WriteZero, "partial line write"))
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use std::{fs::File, io::Read, os::fd::FromRawFd};

	fn pipe() -> (c_int, c_int) {
		let mut fds = [0; 2];
		let res = unsafe { libc::pipe(fds.as_mut_ptr()) };
		assert!(res >= 0);
		(fds[0], fds[1])
	}

	#[test]
	fn write_line0() {
		let (rd, wr) = pipe();
		write_line(wr, "PID: 42").unwrap();
		unsafe {
			libc::close(wr);
		}
		let mut out = String::new();
		let mut rd = unsafe { File::from_raw_fd(rd) };
		rd.read_to_string(&mut out).unwrap();
		assert_eq!(out, "PID: 42\n");
	}

	#[test]
	fn write_line1() {
		let res = write_line(-1, "nope");
		assert!(res.is_err());
	}
}
