/// Collapses bursts of scroll events into one recomputation per animation
/// frame. At most one frame request is outstanding at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
    coalesced: u32,
}

impl FrameGate {
    /// Returns true when the caller must schedule a frame; false when one is
    /// already pending and this request folds into it.
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.coalesced += 1;
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Called at the start of the scheduled frame. Returns the number of
    /// requests that were folded into it.
    pub fn begin_frame(&mut self) -> u32 {
        self.pending = false;
        std::mem::take(&mut self.coalesced)
    }

    /// Scheduling failed; let the next request try again.
    pub fn cancel(&mut self) {
        self.pending = false;
        self.coalesced = 0;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
