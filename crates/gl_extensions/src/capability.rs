// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use thiserror::Error;

use crate::{
	registry::{self, ExtensionRegistry, InvalidExtensionName},
	state::GlState,
};


/// Result of probing for an optional feature.
///
/// `Absent` is the expected outcome on drivers lacking the feature, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability<T> {
	Present(T),
	Absent,
}

/// A family of extensions providing the same optional feature.
///
/// Implementors are capability objects, exposing only operations that are
/// valid once one of [`ALIASES`](Self::ALIASES) was found visible.
pub trait ExtensionFamily<'s>: Sized {
	/// Name used in diagnostics.
	const NAME: &'static str;
	/// Extensions providing the feature, in probe order.
	///
	/// Aliases are treated as interchangeable; the first visible one wins.
	const ALIASES: &'static [&'static str];

	/// Construct the capability object. Only called by [`probe`].
	fn bind(state: &'s GlState, alias: &'static str) -> Self;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
	#[error("extension family {family:?} declares no aliases")]
	NoAliases { family: &'static str },
	#[error("extension family {family:?} declares an invalid alias")]
	InvalidAlias {
		family: &'static str,
		#[source]
		source: InvalidExtensionName,
	},
}

/// Every family failure from one probe of a context.
#[derive(Debug, Error)]
#[error("{} extension families could not be probed", .failures.len())]
pub struct ProbeError {
	pub failures: Vec<CapabilityError>,
}

/// Non-empty ordered list of valid extension names.
#[derive(Debug, Clone, Copy)]
pub struct AliasList<'a> {
	aliases: &'a [&'a str],
}

impl<T> Capability<T> {
	#[inline]
	pub fn is_present(&self) -> bool {
		matches!(self, Self::Present(_))
	}

	#[inline]
	pub fn as_option(&self) -> Option<&T> {
		match self {
			Self::Present(capability) => Some(capability),
			Self::Absent => None,
		}
	}

	#[inline]
	pub fn into_option(self) -> Option<T> {
		match self {
			Self::Present(capability) => Some(capability),
			Self::Absent => None,
		}
	}
}

impl<T> From<Capability<T>> for Option<T> {
	fn from(capability: Capability<T>) -> Self {
		capability.into_option()
	}
}

impl<'a> AliasList<'a> {
	pub fn new(family: &'static str, aliases: &'a [&'a str]) -> Result<Self, CapabilityError> {
		if aliases.is_empty() {
			return Err(CapabilityError::NoAliases { family })
		}

		for alias in aliases {
			registry::validate_name(alias)
				.map_err(|source| CapabilityError::InvalidAlias { family, source })?;
		}

		Ok(Self { aliases })
	}

	/// Find the first visible alias, without querying any alias after it.
	pub fn first_visible(
		&self,
		registry: &ExtensionRegistry,
	) -> Result<Option<&'a str>, InvalidExtensionName> {
		for alias in self.aliases {
			if registry.visible(alias)? {
				return Ok(Some(*alias))
			}
		}

		Ok(None)
	}

	#[inline]
	pub fn as_slice(&self) -> &'a [&'a str] {
		self.aliases
	}
}

/// Probe `registry` for extension family `F`, binding it to `state` when available.
///
/// Malformed alias lists are reported before the registry is queried.
pub fn probe<'s, F: ExtensionFamily<'s>>(
	state: &'s GlState,
	registry: &ExtensionRegistry,
) -> Result<Capability<F>, CapabilityError> {
	let aliases = AliasList::new(F::NAME, F::ALIASES)?;

	let alias = aliases
		.first_visible(registry)
		.map_err(|source| CapabilityError::InvalidAlias {
			family: F::NAME,
			source,
		})?;

	Ok(match alias {
		Some(alias) => {
			log::debug!("{} available through {alias}", F::NAME);
			Capability::Present(F::bind(state, alias))
		},
		None => {
			log::debug!("{} not available", F::NAME);
			Capability::Absent
		},
	})
}

/// Like [`probe`], but records a failure in `failures` instead of returning it,
/// so the remaining families can still be probed.
pub(crate) fn probe_or_record<'s, F: ExtensionFamily<'s>>(
	state: &'s GlState,
	registry: &ExtensionRegistry,
	failures: &mut Vec<CapabilityError>,
) -> Capability<F> {
	match probe::<F>(state, registry) {
		Ok(capability) => capability,
		Err(e) => {
			log::error!("{e}");
			failures.push(e);
			Capability::Absent
		},
	}
}
