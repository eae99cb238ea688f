//! Thread-local switch controlling whether operations are recorded into the graph.
//!
//! The flag defaults to `true`. It is only ever changed through [`RecordingGuard`],
//! which restores the previous value when dropped, so an early return or a panic
//! cannot leave recording disabled. Nested guards restore in LIFO order.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static RECORDING: Cell<bool> = const { Cell::new(true) };
}

/// Returns `true` if operations invoked on this thread are recorded.
pub fn is_recording() -> bool {
    RECORDING.with(|flag| flag.get())
}

/// Scoped override of the recording flag.
///
/// ```
/// use tracegrad_core::autograd::{is_recording, RecordingGuard};
///
/// {
///     let _guard = RecordingGuard::new(false);
///     assert!(!is_recording());
/// }
/// assert!(is_recording());
/// ```
#[must_use = "recording is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct RecordingGuard {
    previous: bool,
    // The guard restores a thread-local; it must be dropped on the thread that made it.
    _not_send: PhantomData<*const ()>,
}

impl RecordingGuard {
    /// Sets the recording flag to `enabled` until the guard is dropped.
    pub fn new(enabled: bool) -> Self {
        let previous = RECORDING.with(|flag| flag.replace(enabled));
        if previous != enabled {
            log::trace!("graph recording {}", if enabled { "enabled" } else { "disabled" });
        }
        RecordingGuard {
            previous,
            _not_send: PhantomData,
        }
    }

    /// The value that will be restored on drop.
    pub fn previous(&self) -> bool {
        self.previous
    }
}

impl Drop for RecordingGuard {
    fn drop(&mut self) {
        RECORDING.with(|flag| flag.set(self.previous));
    }
}

/// Disables recording until the returned guard is dropped (inference mode).
pub fn no_grad() -> RecordingGuard {
    RecordingGuard::new(false)
}

/// Runs `f` with the recording flag set to `enabled`, then restores it.
pub fn with_recording<R>(enabled: bool, f: impl FnOnce() -> R) -> R {
    let _guard = RecordingGuard::new(enabled);
    f()
}
