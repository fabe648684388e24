use std::fmt;

/// Registration of a repeating one-second tick.
///
/// Cancelling must deregister the tick. Cancelling more than once has no effect.
pub trait TickHandle {
    fn cancel(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Ticked { remaining: u32 },
    Finished,
    Ignored,
}

/// Countdown for the rest between two sets.
///
/// The timer is the single owner of its tick registration. The registration is cancelled when
/// the timer is paused, reset, finished or dropped.
pub struct RestTimer<H: TickHandle> {
    initial: u32,
    remaining: u32,
    state: TimerState,
    tick: Option<H>,
}

impl<H: TickHandle> RestTimer<H> {
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            initial: seconds,
            remaining: seconds,
            state: TimerState::Stopped,
            tick: None,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == TimerState::Finished
    }

    /// Start counting down, driven by the tick registered with `tick`.
    ///
    /// A previously held registration is cancelled first. If no time is left, the timer
    /// finishes immediately and `tick` is cancelled right away.
    pub fn start(&mut self, tick: H) {
        self.cancel_tick();
        self.tick = Some(tick);
        if self.remaining == 0 {
            self.finish();
        } else {
            self.state = TimerState::Running;
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TimerEvent {
        if self.state != TimerState::Running {
            return TimerEvent::Ignored;
        }
        if self.remaining <= 1 {
            self.finish();
            TimerEvent::Finished
        } else {
            self.remaining -= 1;
            TimerEvent::Ticked {
                remaining: self.remaining,
            }
        }
    }

    pub fn pause(&mut self) {
        self.cancel_tick();
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
        }
    }

    pub fn reset(&mut self) {
        self.cancel_tick();
        self.remaining = self.initial;
        self.state = TimerState::Stopped;
    }

    /// Add (or with a negative `seconds` remove) time without changing whether the timer runs.
    ///
    /// The remaining time never drops below zero. A finished timer becomes stopped again.
    pub fn add_time(&mut self, seconds: i32) {
        self.remaining = self.remaining.saturating_add_signed(seconds);
        if self.state == TimerState::Finished {
            self.state = TimerState::Stopped;
        }
    }

    fn finish(&mut self) {
        self.cancel_tick();
        self.remaining = 0;
        self.state = TimerState::Finished;
    }

    fn cancel_tick(&mut self) {
        if let Some(mut tick) = self.tick.take() {
            tick.cancel();
        }
    }
}

impl<H: TickHandle> Drop for RestTimer<H> {
    fn drop(&mut self) {
        self.cancel_tick();
    }
}

impl<H: TickHandle> fmt::Display for RestTimer<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
