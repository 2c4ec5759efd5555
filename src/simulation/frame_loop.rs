//! Cancellable repeating frame task
//!
//! Every frame request the host schedules carries a `FrameToken`. Only the
//! token of the single pending request is honored, and once the loop is
//! cancelled no token is honored and none is issued again. A stale callback
//! that still fires after cancellation therefore does nothing.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoopState {
    Idle,
    Running,
    Cancelled,
}

#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    pending: Option<FrameToken>,
    issued: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            pending: None,
            issued: 0,
        }
    }

    /// Start the loop and issue the first request. No-op unless idle.
    pub fn start(&mut self) -> Option<FrameToken> {
        if self.state != LoopState::Idle {
            return None;
        }
        self.state = LoopState::Running;
        Some(self.issue())
    }

    /// Consume `token` if it is the pending request of a running loop
    pub fn begin(&mut self, token: FrameToken) -> bool {
        if self.state == LoopState::Running && self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Issue the request for the following frame
    pub fn reschedule(&mut self) -> Option<FrameToken> {
        if self.state == LoopState::Running && self.pending.is_none() {
            Some(self.issue())
        } else {
            None
        }
    }

    /// Stop for good. Returns the outstanding request so the host can cancel it.
    pub fn cancel(&mut self) -> Option<FrameToken> {
        self.state = LoopState::Cancelled;
        self.pending.take()
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == LoopState::Cancelled
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    fn issue(&mut self) -> FrameToken {
        self.issued += 1;
        let token = FrameToken(self.issued);
        self.pending = Some(token);
        token
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
