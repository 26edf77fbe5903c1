// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use super::{check_format, ExtDepthCubeTexture};
use crate::{
	driver::DriverError,
	texture::{DepthFormat, TextureCube, TextureFilter, TextureWrap},
};

impl ExtDepthCubeTexture<'_> {
	pub const FORMATS: &'static [DepthFormat] = &[DepthFormat::Depth16, DepthFormat::Depth24];

	/// Allocate a depth cube texture with `size` by `size` faces.
	pub fn allocate(
		&self,
		size: u32,
		format: DepthFormat,
		wrap: TextureWrap,
		filter: TextureFilter,
	) -> Result<TextureCube, DriverError> {
		check_format(format, Self::FORMATS, "depth cube textures")?;
		self.state.driver().allocate_texture_cube(size, format, wrap, filter)
	}
}
