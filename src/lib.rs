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

//! `proc-probes` is a collection of minimal diagnostic userland programs probing the
//! process-creation primitives of the underlying system.
//!
//! The probes cover:
//! - the layout of the bootstrap vectors (arguments and environment) handed to a process at
//!   creation ([`bootstrap`]);
//! - the divergent continuations produced by process duplication ([`duplication`]);
//! - bounded terminal input handling ([`input`]).
//!
//! Each probe exists both as a reusable routine in this library and as a standalone binary. The
//! `proc-probes` binary drives the standalone probes and verifies their observable behavior.

pub mod bootstrap;
pub mod config;
pub mod duplication;
pub mod input;
pub mod util;
