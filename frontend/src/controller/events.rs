use std::cell::RefCell;
use std::rc::Rc;

use super::navigation::{LayoutQuery, NavigationState, SectionId};

/// Source of scroll (and resize) notifications.
///
/// The returned subscription detaches the listener when dropped.
pub trait ScrollSource {
    type Subscription;

    /// Current vertical scroll offset in pixels.
    fn offset(&self) -> f64;

    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Self::Subscription;
}

/// Keeps a `NavigationState` in sync with a scroll source for as long as it lives.
pub struct ScrollTracker<S> {
    _subscription: S,
}

impl<S> ScrollTracker<S> {
    /// Evaluates the current offset once, then on every event.
    /// `on_change` runs only when the active section actually changes.
    pub fn attach<Src, L, F>(
        source: &Src,
        layout: L,
        state: Rc<RefCell<NavigationState>>,
        on_change: F,
    ) -> Self
    where
        Src: ScrollSource<Subscription = S>,
        L: LayoutQuery + 'static,
        F: Fn(Option<SectionId>) + 'static,
    {
        let mut handle = move |offset: f64| {
            let changed = state.borrow_mut().update_active_section(offset, &layout);
            if changed {
                let current = state.borrow().current();
                on_change(current);
            }
        };
        handle(source.offset());

        Self {
            _subscription: source.subscribe(Box::new(handle)),
        }
    }
}
