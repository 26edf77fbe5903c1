// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl::types::{GLenum, GLuint};
use log::Level;

use crate::restrictions::SoftRestrictions;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFormat {
	Depth16,
	Depth24,
	Depth24Stencil8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureWrap {
	ClampToEdge,
	Repeat,
	MirroredRepeat,
}

/// Minification and magnification filter.
/// Depth textures allocated here have no mipmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
	Nearest,
	Linear,
}

/// Texture unit exposed by the context, after soft restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureUnit(u32);

/// Cube map texture allocated through an extension.
///
/// # NOTES
/// The texture object is not deleted when this is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureCube {
	pub name: GLuint,
	pub size: u32,
	pub format: DepthFormat,
}

/// 2D texture allocated through an extension.
///
/// # NOTES
/// The texture object is not deleted when this is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture2D {
	pub name: GLuint,
	pub width: u32,
	pub height: u32,
	pub format: DepthFormat,
}

/// # NOTES
/// The renderbuffer object is not deleted when this is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderbuffer {
	pub name: GLuint,
	pub width: u32,
	pub height: u32,
	pub format: DepthFormat,
}

/// GL enums used to specify image storage for a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlFormat {
	pub internal_format: GLenum,
	pub format: GLenum,
	pub ty: GLenum,
}

impl DepthFormat {
	pub fn gl_format(&self) -> GlFormat {
		let (internal_format, format, ty) = match self {
			Self::Depth16 => (gl::DEPTH_COMPONENT16, gl::DEPTH_COMPONENT, gl::UNSIGNED_SHORT),
			Self::Depth24 => (gl::DEPTH_COMPONENT24, gl::DEPTH_COMPONENT, gl::UNSIGNED_INT),
			Self::Depth24Stencil8 => (gl::DEPTH24_STENCIL8, gl::DEPTH_STENCIL, gl::UNSIGNED_INT_24_8),
		};

		GlFormat {
			internal_format,
			format,
			ty,
		}
	}
}

impl TextureWrap {
	#[inline]
	pub fn gl_enum(&self) -> GLenum {
		match self {
			Self::ClampToEdge => gl::CLAMP_TO_EDGE,
			Self::Repeat => gl::REPEAT,
			Self::MirroredRepeat => gl::MIRRORED_REPEAT,
		}
	}
}

impl TextureFilter {
	#[inline]
	pub fn gl_enum(&self) -> GLenum {
		match self {
			Self::Nearest => gl::NEAREST,
			Self::Linear => gl::LINEAR,
		}
	}
}

impl TextureUnit {
	#[inline]
	pub fn index(&self) -> u32 {
		self.0
	}

	/// Value passed to `glActiveTexture`.
	#[inline]
	pub fn gl_enum(&self) -> GLenum {
		gl::TEXTURE0 + self.0
	}
}

/// Texture units exposed for a driver supporting `supported` units.
///
/// At least one unit is always exposed, and never more than the driver supports.
pub fn texture_units(supported: u32, restrictions: &dyn SoftRestrictions) -> Vec<TextureUnit> {
	let debug = log::log_enabled!(Level::Debug);

	if debug {
		log::debug!("implementation supports {supported} texture units");
	}

	let count = u32::max(1, u32::min(restrictions.restrict_texture_unit_count(supported), supported));
	if count < supported && debug {
		log::debug!("implementation exposes {count} texture units after soft restrictions");
	}

	(0..count).map(TextureUnit).collect()
}
