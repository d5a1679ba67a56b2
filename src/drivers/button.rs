//! Polled button debouncer with press-edge detection.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up.  The input adapter samples
//! the level once per control tick and feeds it here together with the
//! monotonic time.  A press is reported exactly once, on the tick the
//! level has been stable for the debounce window; holding the button
//! produces no further presses until it has been stably released.
//!
//! The control-cycle transition treats its mode flag as "toggle now", so
//! this edge is what keeps a held button from flipping the mode every
//! cycle.

/// Internal state machine for debounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    Released,
    PressPending { since_ms: u32 },
    Held,
    ReleasePending { since_ms: u32 },
}

pub struct Debouncer {
    debounce_ms: u32,
    state: DebounceState,
}

impl Debouncer {
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            state: DebounceState::Released,
        }
    }

    /// Feed one sample.  Returns `true` on the tick a press is confirmed.
    pub fn tick(&mut self, pressed: bool, now_ms: u32) -> bool {
        match self.state {
            DebounceState::Released => {
                if pressed {
                    self.state = DebounceState::PressPending { since_ms: now_ms };
                    return self.confirm_press(now_ms, now_ms);
                }
                false
            }

            DebounceState::PressPending { since_ms } => {
                if !pressed {
                    // Bounce: never stable long enough.
                    self.state = DebounceState::Released;
                    return false;
                }
                self.confirm_press(since_ms, now_ms)
            }

            DebounceState::Held => {
                if !pressed {
                    self.state = DebounceState::ReleasePending { since_ms: now_ms };
                    self.confirm_release(now_ms, now_ms);
                }
                false
            }

            DebounceState::ReleasePending { since_ms } => {
                if pressed {
                    self.state = DebounceState::Held;
                } else {
                    self.confirm_release(since_ms, now_ms);
                }
                false
            }
        }
    }

    /// True while a confirmed press has not been stably released.
    pub fn is_held(&self) -> bool {
        matches!(
            self.state,
            DebounceState::Held | DebounceState::ReleasePending { .. }
        )
    }

    fn confirm_press(&mut self, since_ms: u32, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(since_ms) >= self.debounce_ms {
            self.state = DebounceState::Held;
            return true;
        }
        false
    }

    fn confirm_release(&mut self, since_ms: u32, now_ms: u32) {
        if now_ms.wrapping_sub(since_ms) >= self.debounce_ms {
            self.state = DebounceState::Released;
        }
    }
}
