// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Capability objects for each supported extension family.
//!
//! Alias order is a compatibility decision: where several vendors expose the
//! same functionality under different names, the aliases are listed with the
//! one to prefer first.

use std::fmt;

use crate::{capability::ExtensionFamily, driver::DriverError, state::GlState, texture::DepthFormat};

pub mod depth_cube_texture;
pub mod depth_texture;
pub mod packed_depth_stencil;


macro_rules! extension_families {
	($($(#[$doc:meta])* $name:ident($family:literal): [$($alias:literal),+ $(,)?];)*) => {
		paste::paste! {
			$(
				$(#[$doc])*
				#[derive(Clone, Copy)]
				pub struct [<Ext $name>]<'s> {
					state: &'s GlState,
					alias: &'static str,
				}

				impl<'s> [<Ext $name>]<'s> {
					/// Extension name this capability was found through.
					#[inline]
					pub fn alias(&self) -> &'static str {
						self.alias
					}
				}

				impl<'s> ExtensionFamily<'s> for [<Ext $name>]<'s> {
					const NAME: &'static str = $family;
					const ALIASES: &'static [&'static str] = &[$($alias),+];

					fn bind(state: &'s GlState, alias: &'static str) -> Self {
						Self { state, alias }
					}
				}

				impl fmt::Debug for [<Ext $name>]<'_> {
					fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
						f.debug_struct(stringify!([<Ext $name>]))
							.field("alias", &self.alias)
							.finish_non_exhaustive()
					}
				}
			)*
		}
	};
}

extension_families! {
	/// Depth textures usable as cube maps, e.g. for omnidirectional shadow maps.
	DepthCubeTexture("depth cube texture"): ["GL_OES_depth_texture_cube_map"];

	/// Two dimensional depth textures.
	DepthTexture("depth texture"): ["GL_OES_depth_texture", "GL_ARB_depth_texture"];

	/// Combined 24 bit depth and 8 bit stencil storage.
	PackedDepthStencil("packed depth stencil"): [
		"GL_OES_packed_depth_stencil",
		"GL_EXT_packed_depth_stencil",
	];
}

fn check_format(
	format: DepthFormat,
	allowed: &[DepthFormat],
	usage: &'static str,
) -> Result<(), DriverError> {
	if allowed.contains(&format) {
		Ok(())
	} else {
		Err(DriverError::UnsupportedFormat { format, usage })
	}
}
