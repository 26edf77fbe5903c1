// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::fmt;

use crate::{
	driver::{Driver, DriverError},
	restrictions::SoftRestrictions,
	texture::{self, TextureUnit},
};

/// GPU state shared by a context and the capability objects borrowing it.
pub struct GlState {
	driver: Box<dyn Driver>,
	texture_units: Vec<TextureUnit>,
}

impl GlState {
	/// Query the driver limits cached in the state, applying soft restrictions to them.
	pub fn new(
		driver: Box<dyn Driver>,
		restrictions: &dyn SoftRestrictions,
	) -> Result<Self, DriverError> {
		let texture_units = texture::texture_units(driver.max_texture_units()?, restrictions);

		Ok(Self {
			driver,
			texture_units,
		})
	}

	#[inline]
	pub fn driver(&self) -> &dyn Driver {
		&*self.driver
	}

	#[inline]
	pub fn texture_units(&self) -> &[TextureUnit] {
		&self.texture_units
	}
}

impl fmt::Debug for GlState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GlState")
			.field("texture_units", &self.texture_units.len())
			.finish_non_exhaustive()
	}
}
