// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{error::Error, rc::Rc};

use gl_extensions::{GlContext, RestrictionConfig};
use glfw::{Context, OpenGlProfileHint, WindowHint};

/// Run `f` with a [`GlContext`] for a hidden window's OpenGL context.
///
/// Soft restrictions are read from the environment.
pub fn with_context<R>(
	version: (u32, u32),
	f: impl FnOnce(&GlContext) -> R,
) -> Result<R, Box<dyn Error>> {
	env_logger::init();

	let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS).map_err(|e| format!("{e:?}"))?;
	glfw.window_hint(WindowHint::ContextVersion(version.0, version.1));
	glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
	glfw.window_hint(WindowHint::Visible(false));

	let (mut window, _events) = glfw
		.create_window(64, 64, "gl_extensions", glfw::WindowMode::Windowed)
		.ok_or("could not create window")?;

	window.make_current();
	gl::load_with(|p| window.get_proc_address(p));

	let restrictions = RestrictionConfig::from_env()?;
	log::debug!("soft restrictions: {restrictions:?}");

	let context = unsafe { GlContext::from_current(Rc::new(restrictions))? };
	Ok(f(&context))
}
