//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Display-refresh callbacks (`requestAnimationFrame` on web, manual pumping natively)
//! - Keyboard events
//! - The start/stop toggle control

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Identifies one outstanding display-refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Source of "next display refresh" callbacks
///
/// The scheduler asks for at most one frame at a time and cancels it on stop.
/// A cancelled request must never be delivered.
pub trait FrameRequester {
    /// Ask for one callback at the next refresh. `None` if the platform refused.
    fn request(&mut self) -> Option<FrameHandle>;

    fn cancel(&mut self, handle: FrameHandle);
}

/// Frame source driven by the caller
///
/// Headless runs and tests pull due frames with [`ManualFrames::take_due`]
/// and hand them to the scheduler together with a timestamp of their choice.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next_id: i32,
    pending: Vec<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests not yet delivered or cancelled, oldest first
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Pop the oldest pending request
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    pub fn requested_count(&self) -> u64 {
        self.requested
    }

    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameRequester for ManualFrames {
    fn request(&mut self) -> Option<FrameHandle> {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.requested += 1;
        self.pending.push(handle);
        Some(handle)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}
