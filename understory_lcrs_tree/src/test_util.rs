// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by unit tests.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// Counts `DEBUG` events emitted by this crate.
struct DebugEventCounter {
    count: Arc<AtomicUsize>,
}

impl Subscriber for DebugEventCounter {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let meta = event.metadata();
        if *meta.level() == Level::DEBUG && meta.target().starts_with(env!("CARGO_CRATE_NAME")) {
            self.count.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// Run `f` and return how many `DEBUG` events this crate emitted meanwhile.
pub(crate) fn count_debug_events(f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = DebugEventCounter {
        count: Arc::clone(&count),
    };
    tracing::subscriber::with_default(counter, f);
    count.load(Ordering::Relaxed)
}
