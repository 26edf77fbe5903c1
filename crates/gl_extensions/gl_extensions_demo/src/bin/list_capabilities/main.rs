// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Print the optional features available on this machine.
//!
//! Try `GL_EXTENSIONS_HIDDEN=GL_ARB_depth_texture RUST_LOG=debug` to see
//! soft restrictions at work.

use std::error::Error;

use gl_extensions::{
	ext::{ExtDepthCubeTexture, ExtDepthTexture, ExtPackedDepthStencil},
	ExtensionFamily,
};

fn report(family: &str, alias: Option<&str>) {
	match alias {
		Some(alias) => println!("{family:<24} present ({alias})"),
		None => println!("{family:<24} absent"),
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	gl_extensions_demo::with_context((3, 3), |context| -> Result<(), Box<dyn Error>> {
		println!(
			"{} extensions reported, {} texture units exposed",
			context.extensions().len(),
			context.texture_units().len()
		);

		let capabilities = context.capabilities();
		for failure in capabilities.failures() {
			log::warn!("{failure}");
		}

		report(
			ExtDepthCubeTexture::NAME,
			capabilities.depth_cube_texture().map(|e| e.alias()),
		);
		report(ExtDepthTexture::NAME, capabilities.depth_texture().map(|e| e.alias()));
		report(
			ExtPackedDepthStencil::NAME,
			capabilities.packed_depth_stencil().map(|e| e.alias()),
		);

		for name in context.extensions().names() {
			let visible = context.extensions().visible(name)?;
			println!("  {name}{}", if visible { "" } else { " (hidden)" });
		}

		Ok(())
	})?
}
