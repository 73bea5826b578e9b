use std::num::NonZeroUsize;

use log::debug;

/// Words cycled through in the hero headline.
pub const HEADLINE_WORDS: &[&str] = &[
    "bureaucracy",
    "overthinking",
    "spreadsheets",
    "wasted time",
    "complexity",
    "guesswork",
    "pressure",
    "manual work",
    "confusions",
    "inaccuracies",
    "endless threads",
];

/// A running periodic timer. Cancelling consumes it; dropping it must cancel too.
pub trait TimerHandle {
    fn cancel(self);
}

/// Clock the rotation runs on. Browser builds use `gloo_timers`, tests a fake clock.
pub trait Scheduler {
    type Handle: TimerHandle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Position in a cyclic word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationState {
    index: usize,
    word_count: NonZeroUsize,
}

impl RotationState {
    pub fn new(word_count: NonZeroUsize) -> Self {
        Self {
            index: 0,
            word_count,
        }
    }

    /// Rotation over `words`; `None` for an empty list.
    pub fn for_words(words: &[&str]) -> Option<Self> {
        NonZeroUsize::new(words.len()).map(Self::new)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.word_count.get();
        self.index
    }
}

/// Owns the single rotation timer of a mounted page.
pub struct Rotator<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    timer: Option<S::Handle>,
}

impl<S: Scheduler> Rotator<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            timer: None,
        }
    }

    /// Starts ticking every period. A timer left from an earlier mount is cancelled first.
    pub fn mount<F>(&mut self, tick: F)
    where
        F: FnMut() + 'static,
    {
        self.unmount();
        debug!("Starting headline rotation every {} ms", self.period_ms);
        self.timer = Some(self.scheduler.every(self.period_ms, Box::new(tick)));
    }

    pub fn unmount(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!("Stopping headline rotation");
            timer.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

impl<S: Scheduler> Drop for Rotator<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    struct FakeTimer {
        id: usize,
        period: u64,
        next_due: u64,
        tick: Box<dyn FnMut()>,
    }

    #[derive(Default)]
    struct ClockInner {
        now: u64,
        next_id: usize,
        timers: Vec<FakeTimer>,
    }

    /// Manually advanced clock.
    #[derive(Clone, Default)]
    struct FakeClock {
        inner: Rc<RefCell<ClockInner>>,
    }

    struct FakeHandle {
        id: usize,
        clock: Weak<RefCell<ClockInner>>,
    }

    impl TimerHandle for FakeHandle {
        fn cancel(self) {}
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().timers.retain(|t| t.id != self.id);
            }
        }
    }

    impl Scheduler for FakeClock {
        type Handle = FakeHandle;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> FakeHandle {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let next_due = inner.now + u64::from(period_ms);
            inner.timers.push(FakeTimer {
                id,
                period: u64::from(period_ms),
                next_due,
                tick,
            });
            FakeHandle {
                id,
                clock: Rc::downgrade(&self.inner),
            }
        }
    }

    impl FakeClock {
        /// Fires every timer that comes due within `ms`, in due order.
        fn advance(&self, ms: u64) {
            let target = self.inner.borrow().now + ms;
            loop {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .timers
                    .iter_mut()
                    .filter(|t| t.next_due <= target)
                    .min_by_key(|t| t.next_due);
                let Some(timer) = due else {
                    inner.now = target;
                    break;
                };
                let fired_at = timer.next_due;
                timer.next_due += timer.period;
                (timer.tick)();
                inner.now = fired_at;
            }
        }

        fn live_timers(&self) -> usize {
            self.inner.borrow().timers.len()
        }
    }

    fn two_words() -> RotationState {
        RotationState::for_words(&["bureaucracy", "overthinking"]).unwrap()
    }

    #[test]
    fn empty_word_list_has_no_rotation() {
        assert!(RotationState::for_words(&[]).is_none());
    }

    #[test]
    fn advancing_wraps_around_the_word_list() {
        let mut rotation = RotationState::for_words(HEADLINE_WORDS).unwrap();
        let len = HEADLINE_WORDS.len();

        for n in 1..=3 * len {
            rotation.advance();
            assert_eq!(rotation.index(), n % len);
        }
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn three_advances_over_two_words_lands_on_the_second() {
        let mut rotation = two_words();
        assert_eq!(rotation.advance(), 1);
        assert_eq!(rotation.advance(), 0);
        assert_eq!(rotation.advance(), 1);
        assert_eq!(HEADLINE_WORDS[rotation.index()], "overthinking");
    }

    #[test]
    fn single_word_stays_put() {
        let mut rotation = RotationState::for_words(&["bureaucracy"]).unwrap();
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.index(), 0);
    }

    fn mounted(clock: &FakeClock) -> (Rotator<FakeClock>, Rc<RefCell<RotationState>>) {
        let state = Rc::new(RefCell::new(two_words()));
        let mut rotator = Rotator::new(clock.clone(), 5000);
        rotator.mount({
            let state = state.clone();
            move || {
                state.borrow_mut().advance();
            }
        });
        (rotator, state)
    }

    #[test]
    fn rotator_ticks_once_per_period() {
        let clock = FakeClock::default();
        let (rotator, state) = mounted(&clock);

        clock.advance(4999);
        assert_eq!(state.borrow().index(), 0);
        clock.advance(1);
        assert_eq!(state.borrow().index(), 1);
        clock.advance(10_000);
        assert_eq!(state.borrow().index(), 1);
        assert!(rotator.is_running());
    }

    #[test]
    fn no_ticks_after_unmount() {
        let clock = FakeClock::default();
        let (mut rotator, state) = mounted(&clock);

        clock.advance(5000);
        assert_eq!(state.borrow().index(), 1);

        rotator.unmount();
        assert!(!rotator.is_running());
        assert_eq!(clock.live_timers(), 0);

        clock.advance(5000 * 7);
        assert_eq!(state.borrow().index(), 1);
    }

    #[test]
    fn dropping_the_rotator_cancels_the_timer() {
        let clock = FakeClock::default();
        let (rotator, state) = mounted(&clock);
        drop(rotator);

        clock.advance(60_000);
        assert_eq!(clock.live_timers(), 0);
        assert_eq!(state.borrow().index(), 0);
    }

    #[test]
    fn remounting_keeps_a_single_timer() {
        let clock = FakeClock::default();
        let (mut rotator, state) = mounted(&clock);
        rotator.mount({
            let state = state.clone();
            move || {
                state.borrow_mut().advance();
            }
        });
        assert_eq!(clock.live_timers(), 1);

        // one tick, not two
        clock.advance(5000);
        assert_eq!(state.borrow().index(), 1);
    }
}
