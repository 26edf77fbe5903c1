// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Negotiation of optional OpenGL features.
//!
//! The driver reports a set of extension names. [`ExtensionRegistry`] decides
//! which of them are visible to the application after soft restrictions, and
//! each extension family in [`ext`] turns a visible alias into a narrow,
//! typed capability object. [`GlContext`] ties both together.

pub mod capability;
pub mod context;
pub mod driver;
pub mod ext;
pub mod registry;
pub mod restrictions;
pub mod state;
pub mod texture;

#[cfg(test)]
mod test_log;

pub use capability::{Capability, CapabilityError, ExtensionFamily, ProbeError};
pub use context::{GlCapabilities, GlContext};
pub use driver::{Driver, DriverError, GlDriver};
pub use registry::{ExtensionRegistry, InvalidExtensionName};
pub use restrictions::{NoRestrictions, RestrictionConfig, SoftRestrictions};
pub use state::GlState;
