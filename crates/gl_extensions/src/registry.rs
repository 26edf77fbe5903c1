// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{collections::HashSet, fmt, rc::Rc};

use log::Level;
use thiserror::Error;

use crate::restrictions::SoftRestrictions;


/// Extensions reported by the driver, filtered through soft restrictions.
///
/// The set is fixed at construction. After a context reset, build a new registry.
pub struct ExtensionRegistry {
	names: HashSet<String>,
	restrictions: Rc<dyn SoftRestrictions>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidExtensionName {
	#[error("extension name is empty")]
	Empty,
	#[error("extension name {0:?} contains whitespace or NUL")]
	Malformed(String),
}

/// Check that `name` could be reported by a driver.
pub fn validate_name(name: &str) -> Result<(), InvalidExtensionName> {
	if name.is_empty() {
		Err(InvalidExtensionName::Empty)
	} else if name.chars().any(|c| c.is_whitespace() || c == '\0') {
		Err(InvalidExtensionName::Malformed(name.to_owned()))
	} else {
		Ok(())
	}
}

/// Split a space separated `GL_EXTENSIONS` string into extension names.
pub(crate) fn split_extension_string(extensions: &str) -> impl Iterator<Item = &str> {
	extensions.split_whitespace()
}

impl ExtensionRegistry {
	pub fn new<I>(names: I, restrictions: Rc<dyn SoftRestrictions>) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self {
			names: names.into_iter().map(Into::into).collect(),
			restrictions,
		}
	}

	/// Build a registry from a space separated `GL_EXTENSIONS` string,
	/// as returned by `glGetString` on OpenGL ES 2 and legacy contexts.
	pub fn from_extension_string(extensions: &str, restrictions: Rc<dyn SoftRestrictions>) -> Self {
		Self::new(split_extension_string(extensions), restrictions)
	}

	/// Check if the driver reports `name`, ignoring soft restrictions.
	pub fn supported(&self, name: &str) -> Result<bool, InvalidExtensionName> {
		if name.is_empty() {
			return Err(InvalidExtensionName::Empty)
		}

		Ok(self.names.contains(name))
	}

	/// Check if `name` is supported and not hidden by soft restrictions.
	///
	/// The restriction policy is only consulted for supported extensions.
	pub fn visible(&self, name: &str) -> Result<bool, InvalidExtensionName> {
		let debug = log::log_enabled!(Level::Debug);

		if !self.supported(name)? {
			if debug {
				log::debug!("extension {name} not supported");
			}
			return Ok(false)
		}

		if debug {
			log::debug!("extension {name} is supported");
		}

		if !self.restrictions.allows_extension(name) {
			if debug {
				log::debug!("extension {name} hidden by soft restriction");
			}
			return Ok(false)
		}

		Ok(true)
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.names.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Reported extension names in sorted order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		let mut names = self.names.iter().map(String::as_str).collect::<Vec<_>>();
		names.sort_unstable();
		names.into_iter()
	}
}

impl fmt::Debug for ExtensionRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ExtensionRegistry")
			.field("names", &self.names().collect::<Vec<_>>())
			.finish_non_exhaustive()
	}
}
