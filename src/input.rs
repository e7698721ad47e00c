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

//! Bounded terminal input handling.

use std::{
	ffi::{c_int, c_void},
	io,
};

/// Performs a single blocking `read(2)` of at most `cap` bytes from the file descriptor `fd`.
///
/// The buffer is heap-allocated and truncated to the byte count actually read, so input longer
/// than `cap` is saturated at the capacity rather than overrunning anything.
pub fn read_bounded(fd: c_int, cap: usize) -> io::Result<Vec<u8>> {
	let mut buf = vec![0u8; cap];
	let res = unsafe { libc::read(fd, buf.as_mut_ptr() as *mut c_void, buf.len()) };
	if res < 0 {
		Err(io::Error::last_os_error())
	} else {
		buf.truncate(res as usize);
		Ok(buf)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn pipe() -> (c_int, c_int) {
		let mut fds = [0; 2];
		let res = unsafe { libc::pipe(fds.as_mut_ptr()) };
		assert!(res >= 0);
		(fds[0], fds[1])
	}

	fn feed(fd: c_int, data: &[u8]) {
		let res = unsafe { libc::write(fd, data.as_ptr() as *const c_void, data.len()) };
		assert_eq!(res, data.len() as isize);
		unsafe {
			libc::close(fd);
		}
	}

	#[test]
	fn read_bounded0() {
		// Input longer than the capacity is truncated
		let (rd, wr) = pipe();
		feed(wr, b"hello");
		assert_eq!(read_bounded(rd, 2).unwrap(), b"he");
	}

	#[test]
	fn read_bounded1() {
		// End of input yields an empty buffer
		let (rd, wr) = pipe();
		feed(wr, b"");
		assert_eq!(read_bounded(rd, 2).unwrap(), b"");
	}

	#[test]
	fn read_bounded2() {
		let (rd, wr) = pipe();
		feed(wr, b"a");
		assert_eq!(read_bounded(rd, 16).unwrap(), b"a");
	}

	#[test]
	fn read_bounded3() {
		assert!(read_bounded(-1, 2).is_err());
	}
}
