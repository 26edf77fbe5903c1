// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::rc::Rc;

use crate::{
	capability::{probe_or_record, Capability, CapabilityError, ProbeError},
	driver::{Driver, DriverError, GlDriver},
	ext::{ExtDepthCubeTexture, ExtDepthTexture, ExtPackedDepthStencil},
	registry::ExtensionRegistry,
	restrictions::SoftRestrictions,
	state::GlState,
	texture::TextureUnit,
};

#[cfg(test)]
mod test;

/// Driver state and extensions of one GL context.
///
/// Everything here is queried once. After a context reset, create a new `GlContext`.
#[derive(Debug)]
pub struct GlContext {
	state: GlState,
	extensions: ExtensionRegistry,
}

/// Optional features available on a [`GlContext`].
///
/// Features hidden by soft restrictions are absent, the same as features
/// the driver lacks. Use [`GlContext::extensions`] to tell them apart.
///
/// Families that failed to probe are absent and listed in [`failures`](Self::failures).
#[derive(Debug)]
pub struct GlCapabilities<'s> {
	depth_cube_texture: Capability<ExtDepthCubeTexture<'s>>,
	depth_texture: Capability<ExtDepthTexture<'s>>,
	packed_depth_stencil: Capability<ExtPackedDepthStencil<'s>>,
	failures: Vec<CapabilityError>,
}

impl GlContext {
	pub fn new(
		driver: Box<dyn Driver>,
		restrictions: Rc<dyn SoftRestrictions>,
	) -> Result<Self, DriverError> {
		let names = driver.extensions()?;
		log::debug!("driver reports {} extensions", names.len());

		let state = GlState::new(driver, &*restrictions)?;

		Ok(Self {
			state,
			extensions: ExtensionRegistry::new(names, restrictions),
		})
	}

	/// Create a context for the current OpenGL context.
	///
	/// # SAFETY
	/// * must be called from GL thread, after loading GL functions
	/// * the returned context must only be used while the same GL context is current
	pub unsafe fn from_current(restrictions: Rc<dyn SoftRestrictions>) -> Result<Self, DriverError> {
		Self::new(Box::new(GlDriver::new()), restrictions)
	}

	#[inline]
	pub fn extensions(&self) -> &ExtensionRegistry {
		&self.extensions
	}

	#[inline]
	pub fn state(&self) -> &GlState {
		&self.state
	}

	#[inline]
	pub fn texture_units(&self) -> &[TextureUnit] {
		self.state.texture_units()
	}

	/// Probe every extension family.
	pub fn capabilities(&self) -> GlCapabilities<'_> {
		GlCapabilities::probe(&self.state, &self.extensions)
	}
}

impl<'s> GlCapabilities<'s> {
	/// Probe every extension family, binding present capabilities to `state`.
	///
	/// A family failing to probe does not stop the others, and does not
	/// affect the capabilities found for them.
	pub fn probe(state: &'s GlState, registry: &ExtensionRegistry) -> Self {
		let mut failures = Vec::new();

		Self {
			depth_cube_texture: probe_or_record(state, registry, &mut failures),
			depth_texture: probe_or_record(state, registry, &mut failures),
			packed_depth_stencil: probe_or_record(state, registry, &mut failures),
			failures,
		}
	}

	/// Families that could not be probed, in probe order.
	#[inline]
	pub fn failures(&self) -> &[CapabilityError] {
		&self.failures
	}

	/// Fail if any family could not be probed.
	pub fn check(&self) -> Result<(), ProbeError> {
		if self.failures.is_empty() {
			Ok(())
		} else {
			Err(ProbeError {
				failures: self.failures.clone(),
			})
		}
	}

	#[inline]
	pub fn depth_cube_texture(&self) -> Option<&ExtDepthCubeTexture<'s>> {
		self.depth_cube_texture.as_option()
	}

	#[inline]
	pub fn depth_texture(&self) -> Option<&ExtDepthTexture<'s>> {
		self.depth_texture.as_option()
	}

	#[inline]
	pub fn packed_depth_stencil(&self) -> Option<&ExtPackedDepthStencil<'s>> {
		self.packed_depth_stencil.as_option()
	}
}
