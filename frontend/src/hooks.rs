use std::rc::Rc;

use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::toaster::use_toast;
use crate::config;
use crate::controller::contact::{submit_contact_form, ContactField, ContactForm, ContactState};
use crate::controller::events::ScrollTracker;
use crate::controller::navigation::{NavigationState, SectionId};
use crate::controller::rotation::{RotationState, Rotator};
use crate::dom::{DomLayout, FormspreeRelay, GlooScheduler, WindowScroll};

/// Section the viewport is currently in. Re-renders only when it changes.
#[hook]
pub fn use_active_section() -> Option<SectionId> {
    let state = use_mut_ref(NavigationState::default);
    let update = use_force_update();

    {
        let state = state.clone();
        use_effect_once(move || {
            let tracker = ScrollTracker::attach(&WindowScroll, DomLayout, state, move |section| {
                debug!("Highlighting {:?}", section);
                update.force_update();
            });
            move || drop(tracker)
        });
    }

    let current = state.borrow().current();
    current
}

/// Index and text of the headline word, advancing every rotation interval.
#[hook]
pub fn use_rotating_word(words: &'static [&'static str]) -> (usize, &'static str) {
    let state = use_mut_ref(|| RotationState::for_words(words));
    let update = use_force_update();

    {
        let state = state.clone();
        use_effect_once(move || {
            let mut rotator = Rotator::new(GlooScheduler, config::ROTATION_INTERVAL_MS);
            if state.borrow().is_some() {
                rotator.mount(move || {
                    if let Some(rotation) = state.borrow_mut().as_mut() {
                        rotation.advance();
                    }
                    update.force_update();
                });
            }
            move || rotator.unmount()
        });
    }

    let index = state.borrow().map_or(0, |rotation| rotation.index());
    (index, words.get(index).copied().unwrap_or_default())
}

/// What the contact form component needs to render and drive a submission.
pub struct ContactFormHandle {
    pub form: ContactForm,
    pub submitting: bool,
    pub on_input: Callback<(ContactField, String)>,
    pub on_submit: Callback<()>,
}

#[hook]
pub fn use_contact_form() -> ContactFormHandle {
    let state = use_mut_ref(ContactState::default);
    let update = use_force_update();
    let notifier = use_toast();

    let on_input = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            state.borrow_mut().set_field(field, value);
            update.force_update();
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            if state.borrow().is_submitting() {
                return;
            }
            let weak = Rc::downgrade(&state);
            let notifier = notifier.clone();
            let done = update.clone();
            spawn_local(async move {
                let relay = FormspreeRelay::new(config::FORM_ENDPOINT);
                if let Err(e) = submit_contact_form(&weak, &relay, &notifier).await {
                    debug!("Contact submission ended with: {}", e);
                }
                done.force_update();
            });
            // queued behind the submission, so this render already sees it in flight
            update.force_update();
        })
    };

    let form = state.borrow().form().clone();
    let submitting = state.borrow().is_submitting();
    ContactFormHandle {
        form,
        submitting,
        on_input,
        on_submit,
    }
}
