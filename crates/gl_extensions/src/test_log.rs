// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Logger capturing records per test thread.

use std::{
	cell::{Cell, RefCell},
	sync::Once,
};

use log::{LevelFilter, Log, Metadata, Record};

thread_local! {
	static LEVEL: Cell<LevelFilter> = Cell::new(LevelFilter::Off);
	static RECORDS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

impl Log for CaptureLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= LEVEL.with(|level| level.get())
	}

	fn log(&self, record: &Record) {
		if self.enabled(record.metadata()) {
			RECORDS.with(|records| records.borrow_mut().push(record.args().to_string()));
		}
	}

	fn flush(&self) {}
}

/// Start capturing records up to `level` on the current thread,
/// discarding anything captured before.
pub fn capture(level: LevelFilter) {
	INIT.call_once(|| {
		log::set_logger(&LOGGER).unwrap();
		log::set_max_level(LevelFilter::Trace);
	});

	LEVEL.with(|l| l.set(level));
	RECORDS.with(|records| records.borrow_mut().clear());
}

/// Take every record captured on the current thread so far.
pub fn take() -> Vec<String> {
	RECORDS.with(|records| std::mem::take(&mut *records.borrow_mut()))
}
