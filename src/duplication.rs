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

//! Process duplication probing.
//!
//! The probe calls the platform's duplication primitive exactly once. On success the calling
//! process's continuation runs twice, once in each of two processes, and the two continuations
//! observe different discriminants. The two processes are scheduled independently: no ordering
//! between their output is guaranteed, and none is assumed.

use crate::util::write_line;
use libc::pid_t;
use std::{ffi::c_int, io};

/// Outcome of a successful process duplication, as observed by one of the two resulting
/// processes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Fork {
	/// This process is the newly created one.
	Child,
	/// This process is the original one; the field is the identifier of the new process.
	Parent(pid_t),
}

/// Duplicates the calling process.
///
/// A failure of the primitive is surfaced as an error in the single original process; it never
/// falls through into either branch.
pub fn fork() -> io::Result<Fork> {
	let res = unsafe { libc::fork() };
	if res < 0 {
		Err(io::Error::last_os_error())
	} else if res == 0 {
		Ok(Fork::Child)
	} else {
		Ok(Fork::Parent(res))
	}
}

/// Returns the identifier of the calling process.
pub fn getpid() -> pid_t {
	unsafe { libc::getpid() }
}

/// Runs the duplication probe, writing to the file descriptor `fd`.
///
/// Each of the two processes writes its role label and then its own identifier. Every line is a
/// single unbuffered `write(2)`, so the unsynchronized interleaving of the two processes can mix
/// line order but never corrupt a line. Returns the branch the calling process took, so both
/// processes return from this function independently.
pub fn probe(fd: c_int) -> io::Result<Fork> {
	let res = fork()?;
	let label = match res {
		Fork::Child => "Child",
		Fork::Parent(_) => "Parent",
	};
	write_line(fd, label)?;
	write_line(fd, &format!("PID: {}", getpid()))?;
	Ok(res)
}
