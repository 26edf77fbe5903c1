use std::{cell::RefCell, rc::Rc};

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	TextureCube {
		size: u32,
		format: DepthFormat,
		wrap: TextureWrap,
		filter: TextureFilter,
	},
	Texture2D {
		width: u32,
		height: u32,
		format: DepthFormat,
		wrap: TextureWrap,
		filter: TextureFilter,
	},
	Renderbuffer {
		width: u32,
		height: u32,
		format: DepthFormat,
	},
}

/// Driver recording allocations instead of calling GL.
#[derive(Default)]
pub struct FakeDriver {
	pub extensions: Vec<String>,
	pub max_texture_units: u32,
	/// Returned by every call instead of succeeding.
	pub error: Option<DriverError>,
	pub calls: Rc<RefCell<Vec<Call>>>,
}

impl FakeDriver {
	pub fn with_extensions(extensions: &[&str]) -> Self {
		Self {
			extensions: extensions.iter().map(|e| e.to_string()).collect(),
			max_texture_units: 8,
			..Default::default()
		}
	}

	fn record(&self, call: Call) -> Result<GLuint, DriverError> {
		if let Some(e) = &self.error {
			return Err(e.clone())
		}

		let mut calls = self.calls.borrow_mut();
		calls.push(call);
		Ok(calls.len() as GLuint)
	}
}

impl Driver for FakeDriver {
	fn extensions(&self) -> Result<Vec<String>, DriverError> {
		match &self.error {
			Some(e) => Err(e.clone()),
			None => Ok(self.extensions.clone()),
		}
	}

	fn max_texture_units(&self) -> Result<u32, DriverError> {
		Ok(self.max_texture_units)
	}

	fn allocate_texture_cube(
		&self,
		size: u32,
		format: DepthFormat,
		wrap: TextureWrap,
		filter: TextureFilter,
	) -> Result<TextureCube, DriverError> {
		let name = self.record(Call::TextureCube {
			size,
			format,
			wrap,
			filter,
		})?;

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
		let name = self.record(Call::Texture2D {
			width,
			height,
			format,
			wrap,
			filter,
		})?;

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
		let name = self.record(Call::Renderbuffer {
			width,
			height,
			format,
		})?;

		Ok(Renderbuffer {
			name,
			width,
			height,
			format,
		})
	}
}
