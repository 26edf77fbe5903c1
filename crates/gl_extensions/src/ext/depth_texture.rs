// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use super::{check_format, ExtDepthTexture};
use crate::{
	driver::DriverError,
	texture::{DepthFormat, Texture2D, TextureFilter, TextureWrap},
};

impl ExtDepthTexture<'_> {
	pub const FORMATS: &'static [DepthFormat] = &[DepthFormat::Depth16, DepthFormat::Depth24];

	pub fn allocate(
		&self,
		width: u32,
		height: u32,
		format: DepthFormat,
		wrap: TextureWrap,
		filter: TextureFilter,
	) -> Result<Texture2D, DriverError> {
		check_format(format, Self::FORMATS, "depth textures")?;
		self.state.driver().allocate_texture_2d(width, height, format, wrap, filter)
	}
}
