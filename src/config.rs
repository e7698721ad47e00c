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

//! Suite runner configuration, parsed from an optional JSON file.

use crate::bootstrap::ReportPolicy;
use serde::Deserialize;
use std::{fs, io, path::Path};

/// Configuration of a suite run. Every field has a default, so an empty document is a valid
/// configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
	/// Names of the suites to run. `None` runs every suite.
	pub suites: Option<Vec<String>>,
	/// Report policy the bootstrap suite drives the inspector with.
	pub report: ReportPolicy,
}

impl SuiteConfig {
	/// Loads the configuration from the file at `path`.
	pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
		let content = fs::read_to_string(path)?;
		Self::parse(&content)
	}

	/// Parses the configuration from `content`.
	pub fn parse(content: &str) -> io::Result<Self> {
		serde_json::from_str(content).map_err(io::Error::from)
	}

	/// Tells whether the suite with name `name` is selected by this configuration.
	pub fn suite_enabled(&self, name: &str) -> bool {
		match &self.suites {
			Some(names) => names.iter().any(|n| n == name),
			None => true,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn config0() {
		let config = SuiteConfig::parse("{}").unwrap();
		assert!(config.suites.is_none());
		assert!(config.report.emit_terminator_line);
		assert!(!config.report.block_after_report);
		assert!(config.suite_enabled("bootstrap"));
		assert!(config.suite_enabled("duplication"));
	}

	#[test]
	fn config1() {
		let config = SuiteConfig::parse(
			r#"{
				"suites": ["bootstrap"],
				"report": { "emit_terminator_line": false }
			}"#,
		)
		.unwrap();
		assert!(config.suite_enabled("bootstrap"));
		assert!(!config.suite_enabled("duplication"));
		assert!(!config.report.emit_terminator_line);
		assert!(!config.report.block_after_report);
	}

	#[test]
	fn config2() {
		assert!(SuiteConfig::parse("not json").is_err());
	}
}
