// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Soft restrictions hide driver functionality from the application,
//! e.g. to check that a program still works on hardware lacking an extension.

use std::{collections::HashSet, num::ParseIntError};

use thiserror::Error;


pub const HIDDEN_EXTENSIONS_VAR: &str = "GL_EXTENSIONS_HIDDEN";
pub const MAX_TEXTURE_UNITS_VAR: &str = "GL_EXTENSIONS_MAX_TEXTURE_UNITS";

pub trait SoftRestrictions {
	/// Whether an extension the driver supports may be shown to the application.
	///
	/// Only called for extensions the driver actually supports.
	fn allows_extension(&self, _name: &str) -> bool {
		true
	}

	/// Lower the number of texture units exposed by the context.
	///
	/// `count` is the number the driver supports. Results outside
	/// `1..=count` are clamped by the caller.
	fn restrict_texture_unit_count(&self, count: u32) -> u32 {
		count
	}
}

/// Exposes everything the driver supports.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRestrictions;

impl SoftRestrictions for NoRestrictions {}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestrictionConfig {
	pub hidden_extensions: HashSet<String>,
	pub max_texture_units: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("{var} must be a positive integer, got {value:?}")]
	InvalidCount {
		var: &'static str,
		value: String,
		#[source]
		source: ParseIntError,
	},
	#[error("{var} must be at least 1")]
	ZeroCount { var: &'static str },
}

impl RestrictionConfig {
	/// Read restrictions from `GL_EXTENSIONS_HIDDEN` and `GL_EXTENSIONS_MAX_TEXTURE_UNITS`.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Read restrictions through `lookup`, which maps a variable name to its value.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let hidden_extensions = lookup(HIDDEN_EXTENSIONS_VAR)
			.map(|list| {
				list.split(|c: char| c == ',' || c.is_whitespace())
					.filter(|name| !name.is_empty())
					.map(str::to_owned)
					.collect()
			})
			.unwrap_or_default();

		let max_texture_units = match lookup(MAX_TEXTURE_UNITS_VAR) {
			Some(value) => {
				let count = value.trim().parse::<u32>().map_err(|source| {
					ConfigError::InvalidCount {
						var: MAX_TEXTURE_UNITS_VAR,
						value: value.clone(),
						source,
					}
				})?;

				if count == 0 {
					return Err(ConfigError::ZeroCount {
						var: MAX_TEXTURE_UNITS_VAR,
					})
				}

				Some(count)
			},
			None => None,
		};

		Ok(Self {
			hidden_extensions,
			max_texture_units,
		})
	}

	pub fn hide(mut self, name: impl Into<String>) -> Self {
		self.hidden_extensions.insert(name.into());
		self
	}
}

impl SoftRestrictions for RestrictionConfig {
	fn allows_extension(&self, name: &str) -> bool {
		!self.hidden_extensions.contains(name)
	}

	fn restrict_texture_unit_count(&self, count: u32) -> u32 {
		match self.max_texture_units {
			Some(max) => u32::min(max, count),
			None => count,
		}
	}
}
