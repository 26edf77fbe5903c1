// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use super::ExtPackedDepthStencil;
use crate::{
	driver::DriverError,
	texture::{DepthFormat, Renderbuffer, Texture2D, TextureFilter, TextureWrap},
};

impl ExtPackedDepthStencil<'_> {
	/// Allocate a renderbuffer usable as combined depth and stencil attachment.
	pub fn allocate_renderbuffer(&self, width: u32, height: u32) -> Result<Renderbuffer, DriverError> {
		self.state
			.driver()
			.allocate_renderbuffer(width, height, DepthFormat::Depth24Stencil8)
	}

	/// Allocate a 2D texture with packed depth and stencil.
	///
	/// Sampling the texture returns depth values.
	pub fn allocate_texture(
		&self,
		width: u32,
		height: u32,
		wrap: TextureWrap,
		filter: TextureFilter,
	) -> Result<Texture2D, DriverError> {
		self.state.driver().allocate_texture_2d(
			width,
			height,
			DepthFormat::Depth24Stencil8,
			wrap,
			filter,
		)
	}
}
