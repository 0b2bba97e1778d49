use crate::constants::{PROGRESS_CHUNK, YIELD_INTERVAL};
use crate::error::{PyxError, PyxResult};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::thread;

/// Shared cancellation flag for an in-flight mint. Clones observe the
/// same flag, so a controller thread can cancel a mint running elsewhere.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<Mutex<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if let Ok(mut flag) = self.flag.lock() {
            *flag = true;
        }
    }

    // A poisoned flag means the controlling thread panicked; read it as cancelled
    pub fn is_cancelled(&self) -> bool {
        self.flag.lock().map(|flag| *flag).unwrap_or(true)
    }
}

/// Progress sink and cancellation checkpoint for the two T-iteration
/// phases of a mint.
///
/// Percentages are monotonically non-decreasing, 0 at the start of the
/// first phase and 100 after `finish`. The callback cannot alter control
/// flow: cancellation travels through the token, and a panicking callback
/// is caught and treated as a cancellation request.
pub struct Monitor<'a> {
    callback: Option<&'a mut dyn FnMut(u8)>,
    cancel: Option<&'a CancelToken>,
    phase_start: u8,
    phase_end: u8,
    last_reported: Option<u8>,
}

impl<'a> Monitor<'a> {
    pub fn new(callback: Option<&'a mut dyn FnMut(u8)>, cancel: Option<&'a CancelToken>) -> Self {
        Monitor {
            callback,
            cancel,
            phase_start: 0,
            phase_end: 0,
            last_reported: None,
        }
    }

    // Enter a phase spanning [start, end] percent and report its start
    pub fn begin_phase(&mut self, start: u8, end: u8) -> PyxResult<()> {
        self.phase_start = start;
        self.phase_end = end;
        self.report(start)
    }

    /// Per-iteration checkpoint with 1-based `done`. Cheap except at chunk
    /// boundaries, where cancellation is checked, progress is reported, and
    /// the thread may yield to the host scheduler.
    pub fn step(&mut self, done: u64, total: u64) -> PyxResult<()> {
        if done % PROGRESS_CHUNK != 0 && done != total {
            return Ok(());
        }
        if let Some(token) = self.cancel {
            if token.is_cancelled() {
                return Err(PyxError::Cancelled);
            }
        }
        let span = (self.phase_end - self.phase_start) as u128;
        let percent = self.phase_start + (span * done as u128 / total as u128) as u8;
        self.report(percent)?;
        if done % YIELD_INTERVAL == 0 {
            thread::yield_now();
        }
        Ok(())
    }

    // Terminal report for a successful mint
    pub fn finish(&mut self) -> PyxResult<()> {
        self.report(100)
    }

    fn report(&mut self, percent: u8) -> PyxResult<()> {
        if self.last_reported.map_or(false, |last| percent <= last) {
            return Ok(());
        }
        self.last_reported = Some(percent);
        if let Some(callback) = self.callback.as_mut() {
            // A panicking callback counts as a cancellation request
            if catch_unwind(AssertUnwindSafe(|| callback(percent))).is_err() {
                return Err(PyxError::Cancelled);
            }
        }
        Ok(())
    }
}
