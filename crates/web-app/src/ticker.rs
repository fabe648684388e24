use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::{Interval, Timeout};
use liftlog_domain::{RestTimer, TickHandle, TimerEvent};

const TICK_MILLIS: u32 = 1_000;

/// Browser interval driving a rest timer.
pub struct IntervalTicker(Option<Interval>);

impl TickHandle for IntervalTicker {
    fn cancel(&mut self) {
        if let Some(interval) = self.0.take() {
            let callback = interval.cancel();
            // The interval may be cancelled from within its own callback.
            Timeout::new(0, move || drop(callback)).forget();
        }
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start `timer` with a one-second browser interval.
///
/// `on_event` is called after every tick with the timer released, so it may access the timer.
/// The interval only holds a weak reference and stops when the timer is dropped.
pub fn start<F>(timer: &Rc<RefCell<RestTimer<IntervalTicker>>>, mut on_event: F)
where
    F: FnMut(TimerEvent) + 'static,
{
    let weak = Rc::downgrade(timer);
    let interval = Interval::new(TICK_MILLIS, move || {
        let Some(timer) = weak.upgrade() else {
            return;
        };
        let event = timer.borrow_mut().tick();
        on_event(event);
    });
    timer.borrow_mut().start(IntervalTicker(Some(interval)));
}
