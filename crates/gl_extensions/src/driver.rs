// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{
	ffi::{c_char, CStr},
	marker::PhantomData,
	ptr,
};

use gl::types::{GLenum, GLint, GLsizei, GLuint};
use thiserror::Error;

use crate::{
	registry::split_extension_string,
	texture::{DepthFormat, Renderbuffer, Texture2D, TextureCube, TextureFilter, TextureWrap},
};

#[cfg(test)]
pub(crate) mod fake;

/// Native calls made on behalf of the context and its capability objects.
///
/// Capability objects only call the allocation functions after the matching
/// extension was found visible, and return errors from them unchanged.
pub trait Driver {
	/// Extension names reported by the driver.
	fn extensions(&self) -> Result<Vec<String>, DriverError>;
	/// Number of texture image units usable from fragment shaders.
	fn max_texture_units(&self) -> Result<u32, DriverError>;
	fn allocate_texture_cube(
		&self,
		size: u32,
		format: DepthFormat,
		wrap: TextureWrap,
		filter: TextureFilter,
	) -> Result<TextureCube, DriverError>;
	fn allocate_texture_2d(
		&self,
		width: u32,
		height: u32,
		format: DepthFormat,
		wrap: TextureWrap,
		filter: TextureFilter,
	) -> Result<Texture2D, DriverError>;
	fn allocate_renderbuffer(
		&self,
		width: u32,
		height: u32,
		format: DepthFormat,
	) -> Result<Renderbuffer, DriverError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DriverError {
	#[error("{call} failed with GL error 0x{code:04X}")]
	Gl { call: &'static str, code: GLenum },
	#[error("OpenGL driver returned an invalid string from {0}")]
	InvalidString(&'static str),
	#[error("{format:?} cannot be used for {usage}")]
	UnsupportedFormat {
		format: DepthFormat,
		usage: &'static str,
	},
}

/// Use the indexed extension query if it is available, else split the single
/// extension string.
fn query_extensions(
	indexed: impl FnOnce() -> Result<Option<Vec<String>>, DriverError>,
	single: impl FnOnce() -> Result<String, DriverError>,
) -> Result<Vec<String>, DriverError> {
	match indexed()? {
		Some(extensions) => Ok(extensions),
		None => Ok(split_extension_string(&single()?).map(str::to_owned).collect()),
	}
}

/// Driver calling into the current OpenGL context through the `gl` crate.
pub struct GlDriver {
	// GL contexts are bound to a thread
	_not_send: PhantomData<*const ()>,
}

impl GlDriver {
	/// # SAFETY
	/// * must be called from GL thread, after loading GL functions
	/// * the driver must only be used while the same context is current
	pub unsafe fn new() -> Self {
		Self {
			_not_send: PhantomData,
		}
	}

	/// # SAFETY
	/// * must be called from GL thread
	unsafe fn check_error(call: &'static str) -> Result<(), DriverError> {
		match gl::GetError() {
			gl::NO_ERROR => Ok(()),
			code => Err(DriverError::Gl { call, code }),
		}
	}

	/// # SAFETY
	/// * must be called from GL thread
	/// * `string` must be null or point to a null terminated string
	unsafe fn read_string(string: *const u8, call: &'static str) -> Result<String, DriverError> {
		if string.is_null() {
			Self::check_error(call)?;
			return Err(DriverError::InvalidString(call))
		}

		CStr::from_ptr(string as *const c_char)
			.to_str()
			.map(str::to_owned)
			.map_err(|_| DriverError::InvalidString(call))
	}

	/// # SAFETY
	/// * must be called from GL thread
	/// * a texture must be bound to `target`
	unsafe fn set_sampling(target: GLenum, wrap: TextureWrap, filter: TextureFilter) {
		let wrap = wrap.gl_enum() as GLint;
		let filter = filter.gl_enum() as GLint;

		gl::TexParameteri(target, gl::TEXTURE_WRAP_S, wrap);
		gl::TexParameteri(target, gl::TEXTURE_WRAP_T, wrap);
		gl::TexParameteri(target, gl::TEXTURE_MIN_FILTER, filter);
		gl::TexParameteri(target, gl::TEXTURE_MAG_FILTER, filter);
	}

	/// Run `specify` with a new texture bound to `target`, deleting the texture if GL reports an error.
	///
	/// # SAFETY
	/// * must be called from GL thread
	unsafe fn with_new_texture(
		target: GLenum,
		call: &'static str,
		specify: impl FnOnce(),
	) -> Result<GLuint, DriverError> {
		let mut texture = 0;
		gl::GenTextures(1, &mut texture);
		gl::BindTexture(target, texture);

		specify();

		gl::BindTexture(target, 0);

		match Self::check_error(call) {
			Ok(()) => Ok(texture),
			Err(e) => {
				gl::DeleteTextures(1, &texture);
				Err(e)
			},
		}
	}
}

impl Driver for GlDriver {
	fn extensions(&self) -> Result<Vec<String>, DriverError> {
		// Core profiles only support the indexed query, OpenGL ES 2 only supports
		// the single string. Loaders may export glGetStringi on contexts rejecting
		// GL_NUM_EXTENSIONS, so its presence is not trusted either.
		let indexed = || unsafe {
			if !gl::GetStringi::is_loaded() {
				return Ok(None)
			}

			let mut extension_count = 0;
			gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut extension_count);
			if let Err(e) = Self::check_error("glGetIntegerv(GL_NUM_EXTENSIONS)") {
				log::debug!("{e}, falling back to glGetString(GL_EXTENSIONS)");
				return Ok(None)
			}

			(0..extension_count.max(0) as GLuint)
				.map(|i| Self::read_string(gl::GetStringi(gl::EXTENSIONS, i), "glGetStringi"))
				.collect::<Result<Vec<_>, _>>()
				.map(Some)
		};

		let single = || unsafe { Self::read_string(gl::GetString(gl::EXTENSIONS), "glGetString") };

		query_extensions(indexed, single)
	}

	fn max_texture_units(&self) -> Result<u32, DriverError> {
		let mut units = 0;
		unsafe {
			gl::GetIntegerv(gl::MAX_TEXTURE_IMAGE_UNITS, &mut units);
			Self::check_error("glGetIntegerv(GL_MAX_TEXTURE_IMAGE_UNITS)")?;
		}

		Ok(units.max(0) as u32)
	}

	fn allocate_texture_cube(
		&self,
		size: u32,
		format: DepthFormat,
		wrap: TextureWrap,
		filter: TextureFilter,
	) -> Result<TextureCube, DriverError> {
		let gl_format = format.gl_format();

		let name = unsafe {
			Self::with_new_texture(gl::TEXTURE_CUBE_MAP, "glTexImage2D(GL_TEXTURE_CUBE_MAP)", || {
				Self::set_sampling(gl::TEXTURE_CUBE_MAP, wrap, filter);
				gl::TexParameteri(gl::TEXTURE_CUBE_MAP, gl::TEXTURE_WRAP_R, wrap.gl_enum() as GLint);

				for face in 0..6 {
					gl::TexImage2D(
						gl::TEXTURE_CUBE_MAP_POSITIVE_X + face,
						0,
						gl_format.internal_format as GLint,
						size as GLsizei,
						size as GLsizei,
						0,
						gl_format.format,
						gl_format.ty,
						ptr::null(),
					);
				}
			})?
		};

		Ok(TextureCube { name, size, format })
	}

	fn allocate_texture_2d(
		&self,
		width: u32,
		height: u32,
		format: DepthFormat,
		wrap: TextureWrap,
		filter: TextureFilter,
	) -> Result<Texture2D, DriverError> {
		let gl_format = format.gl_format();

		let name = unsafe {
			Self::with_new_texture(gl::TEXTURE_2D, "glTexImage2D(GL_TEXTURE_2D)", || {
				Self::set_sampling(gl::TEXTURE_2D, wrap, filter);
				gl::TexImage2D(
					gl::TEXTURE_2D,
					0,
					gl_format.internal_format as GLint,
					width as GLsizei,
					height as GLsizei,
					0,
					gl_format.format,
					gl_format.ty,
					ptr::null(),
				);
			})?
		};

		Ok(Texture2D {
			name,
			width,
			height,
			format,
		})
	}

	fn allocate_renderbuffer(
		&self,
		width: u32,
		height: u32,
		format: DepthFormat,
	) -> Result<Renderbuffer, DriverError> {
		let mut name = 0;

		unsafe {
			gl::GenRenderbuffers(1, &mut name);
			gl::BindRenderbuffer(gl::RENDERBUFFER, name);
			gl::RenderbufferStorage(
				gl::RENDERBUFFER,
				format.gl_format().internal_format,
				width as GLsizei,
				height as GLsizei,
			);
			gl::BindRenderbuffer(gl::RENDERBUFFER, 0);

			if let Err(e) = Self::check_error("glRenderbufferStorage") {
				gl::DeleteRenderbuffers(1, &name);
				return Err(e)
			}
		}

		Ok(Renderbuffer {
			name,
			width,
			height,
			format,
		})
	}
}
