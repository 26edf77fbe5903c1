use log::LevelFilter;

use super::*;
use crate::{
	capability::ExtensionFamily,
	driver::fake::FakeDriver,
	registry::InvalidExtensionName,
	restrictions::{NoRestrictions, RestrictionConfig},
	test_log,
	texture::{DepthFormat, TextureFilter, TextureWrap},
};

const CUBE: &str = "GL_OES_depth_texture_cube_map";

/// Family whose alias list can never be probed.
#[derive(Debug)]
struct Misdeclared;

impl<'s> ExtensionFamily<'s> for Misdeclared {
	const NAME: &'static str = "misdeclared";
	const ALIASES: &'static [&'static str] = &["GL EXT_packed_depth_stencil"];

	fn bind(_state: &'s GlState, _alias: &'static str) -> Self {
		Misdeclared
	}
}

fn context(extensions: &[&str], restrictions: Rc<dyn SoftRestrictions>) -> GlContext {
	GlContext::new(Box::new(FakeDriver::with_extensions(extensions)), restrictions).unwrap()
}

#[test]
fn test_depth_cube_texture_present() {
	let context = context(&[CUBE], Rc::new(NoRestrictions));
	let capabilities = context.capabilities();

	let cube = capabilities.depth_cube_texture().unwrap();
	assert_eq!(cube.alias(), CUBE);
	assert!(capabilities.depth_texture().is_none());
	assert!(capabilities.packed_depth_stencil().is_none());

	let texture = cube
		.allocate(128, DepthFormat::Depth16, TextureWrap::ClampToEdge, TextureFilter::Linear)
		.unwrap();
	assert_eq!(texture.size, 128);
}

#[test]
fn test_no_extensions() {
	let context = context(&[], Rc::new(NoRestrictions));
	let capabilities = context.capabilities();

	assert!(context.extensions().is_empty());
	assert!(capabilities.depth_cube_texture().is_none());
	assert!(capabilities.depth_texture().is_none());
	assert!(capabilities.packed_depth_stencil().is_none());
}

#[test]
fn test_restricted_depth_cube_texture() {
	let context = context(&[CUBE], Rc::new(RestrictionConfig::default().hide(CUBE)));

	test_log::capture(LevelFilter::Debug);

	let capabilities = context.capabilities();
	assert!(capabilities.depth_cube_texture().is_none());

	let cube_lines = test_log::take()
		.into_iter()
		.filter(|line| line.contains(CUBE))
		.collect::<Vec<_>>();
	assert!(cube_lines.contains(&format!("extension {CUBE} hidden by soft restriction")));
	assert!(cube_lines.iter().all(|line| !line.contains("not supported")));

	// the application can still tell the two cases apart
	assert_eq!(context.extensions().supported(CUBE), Ok(true));
	assert_eq!(context.extensions().visible(CUBE), Ok(false));
}

#[test]
fn test_all_families() {
	let context = context(
		&[
			CUBE,
			"GL_OES_depth_texture",
			"GL_EXT_packed_depth_stencil",
			"GL_OES_packed_depth_stencil",
		],
		Rc::new(NoRestrictions),
	);
	let capabilities = context.capabilities();

	assert_eq!(capabilities.depth_cube_texture().map(|e| e.alias()), Some(CUBE));
	assert_eq!(capabilities.depth_texture().map(|e| e.alias()), Some("GL_OES_depth_texture"));
	assert_eq!(
		capabilities.packed_depth_stencil().map(|e| e.alias()),
		Some("GL_OES_packed_depth_stencil")
	);
}

#[test]
fn test_reprobing_gives_fresh_results() {
	let context = context(&[CUBE], Rc::new(NoRestrictions));

	let first = context.capabilities();
	let second = context.capabilities();

	assert_eq!(
		first.depth_cube_texture().map(|e| e.alias()),
		second.depth_cube_texture().map(|e| e.alias())
	);
}

#[test]
fn test_texture_units_are_restricted() {
	let driver = FakeDriver {
		max_texture_units: 16,
		..FakeDriver::with_extensions(&[])
	};
	let restrictions = RestrictionConfig {
		max_texture_units: Some(3),
		..Default::default()
	};

	let context = GlContext::new(Box::new(driver), Rc::new(restrictions)).unwrap();

	assert_eq!(context.texture_units().len(), 3);
	assert_eq!(context.state().texture_units()[2].index(), 2);
}

#[test]
fn test_driver_failure_aborts_context() {
	let error = DriverError::InvalidString("glGetStringi");
	let driver = FakeDriver {
		error: Some(error.clone()),
		..Default::default()
	};

	assert_eq!(GlContext::new(Box::new(driver), Rc::new(NoRestrictions)).unwrap_err(), error);
}

#[test]
fn test_capabilities_without_failures() {
	let context = context(&[CUBE], Rc::new(NoRestrictions));
	let capabilities = context.capabilities();

	assert!(capabilities.failures().is_empty());
	assert!(capabilities.check().is_ok());
}

#[test]
fn test_failed_family_keeps_sibling_capabilities() {
	let context = context(&[CUBE, "GL_EXT_packed_depth_stencil"], Rc::new(NoRestrictions));
	let (state, registry) = (context.state(), context.extensions());
	let mut failures = Vec::new();

	test_log::capture(LevelFilter::Error);

	let misdeclared = probe_or_record::<Misdeclared>(state, registry, &mut failures);
	let capabilities = GlCapabilities {
		depth_cube_texture: probe_or_record(state, registry, &mut failures),
		depth_texture: probe_or_record(state, registry, &mut failures),
		packed_depth_stencil: Capability::Absent,
		failures,
	};

	assert!(!misdeclared.is_present());
	assert_eq!(capabilities.depth_cube_texture().map(|e| e.alias()), Some(CUBE));
	assert!(capabilities.depth_texture().is_none());

	let failure = CapabilityError::InvalidAlias {
		family: "misdeclared",
		source: InvalidExtensionName::Malformed("GL EXT_packed_depth_stencil".to_owned()),
	};
	assert_eq!(capabilities.failures(), &[failure.clone()]);
	assert_eq!(capabilities.check().unwrap_err().failures, vec![failure]);
	assert_eq!(test_log::take().len(), 1);

	// the capability found next to the failure is still usable
	let cube = capabilities.depth_cube_texture().unwrap();
	assert!(cube
		.allocate(32, DepthFormat::Depth16, TextureWrap::ClampToEdge, TextureFilter::Nearest)
		.is_ok());
}
