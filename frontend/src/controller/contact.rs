use std::cell::RefCell;
use std::rc::Weak;

use async_trait::async_trait;
use log::{debug, error, info};
use serde::Serialize;
use thiserror::Error;

use super::toast::{Notifier, Toast};
use crate::config;

/// The four contact fields, serialized as the JSON body of the relay request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

impl ContactField {
    /// Maps an input's `name` attribute to its field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "company" => Some(ContactField::Company),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Non-200 answer or a request that never completed. Both look the same to the user.
    #[error("submission failed ({}): {reason}", status_label(.status))]
    SubmissionFailed { status: Option<u16>, reason: String },
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("contact form is no longer mounted")]
    Unmounted,
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "no response".to_string(),
    }
}

/// Sends the form to the external collector and reports the HTTP status.
#[async_trait(?Send)]
pub trait FormRelay {
    async fn post(&self, form: &ContactForm) -> Result<u16, SubmitError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

/// Form contents plus the in-flight flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactState {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    fn begin(&mut self) -> Option<ContactForm> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(self.form.clone())
    }
}

/// Puts the state back to `Idle` however the submission ends, including when
/// the future is dropped mid-request.
struct SubmittingGuard<'a> {
    state: &'a Weak<RefCell<ContactState>>,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().status = SubmissionStatus::Idle;
        }
    }
}

/// Relays the current form once.
///
/// On 200 the fields are cleared and a success toast is shown. Any other
/// status or a transport error shows the failure toast and leaves the fields
/// alone. Does nothing if a submission is already in flight. Only a weak
/// reference to the state is held, so completing after unmount is harmless.
pub async fn submit_contact_form<R, N>(
    state: &Weak<RefCell<ContactState>>,
    relay: &R,
    notifier: &N,
) -> Result<(), SubmitError>
where
    R: FormRelay + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(shared) = state.upgrade() else {
        return Err(SubmitError::Unmounted);
    };
    let begun = shared.borrow_mut().begin();
    drop(shared);
    let form = begun.ok_or(SubmitError::AlreadySubmitting)?;
    let _guard = SubmittingGuard { state };

    info!("Submitting contact form");
    let result = match relay.post(&form).await {
        Ok(200) => Ok(()),
        Ok(status) => Err(SubmitError::SubmissionFailed {
            status: Some(status),
            reason: "unexpected response status".to_string(),
        }),
        Err(e) => Err(e),
    };

    match &result {
        Ok(()) => {
            info!("Contact form sent");
            match state.upgrade() {
                Some(state) => state.borrow_mut().form.clear(),
                None => debug!("Contact form unmounted before the relay answered"),
            }
            notifier.notify(Toast::message_sent());
        }
        Err(e) => {
            error!("Error submitting form: {}", e);
            notifier.notify(Toast::message_failed(config::FALLBACK_EMAIL));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::toast::ToastVariant;
    use futures::executor::block_on;
    use futures::future::{join, poll_fn};
    use std::collections::VecDeque;
    use std::future::Future;
    use std::rc::Rc;
    use std::task::Poll;

    /// Yields to the executor once so other futures can run mid-request.
    async fn yield_now() {
        let mut yielded = false;
        poll_fn(move |cx| {
            if yielded {
                Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await
    }

    #[derive(Default)]
    struct FakeRelay {
        responses: RefCell<VecDeque<Result<u16, SubmitError>>>,
        sent: RefCell<Vec<ContactForm>>,
    }

    impl FakeRelay {
        fn answering(response: Result<u16, SubmitError>) -> Self {
            let relay = Self::default();
            relay.responses.borrow_mut().push_back(response);
            relay
        }
    }

    #[async_trait(?Send)]
    impl FormRelay for FakeRelay {
        async fn post(&self, form: &ContactForm) -> Result<u16, SubmitError> {
            self.sent.borrow_mut().push(form.clone());
            yield_now().await;
            self.responses.borrow_mut().pop_front().unwrap_or(Ok(200))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: RefCell<Vec<Toast>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            company: "C".to_string(),
            message: "M".to_string(),
        }
    }

    fn filled_state() -> Rc<RefCell<ContactState>> {
        let state = Rc::new(RefCell::new(ContactState::default()));
        {
            let mut state = state.borrow_mut();
            for (field, value) in [
                (ContactField::Name, "A"),
                (ContactField::Email, "a@b.com"),
                (ContactField::Company, "C"),
                (ContactField::Message, "M"),
            ] {
                state.set_field(field, value.to_string());
            }
        }
        state
    }

    #[test]
    fn input_names_map_to_fields() {
        assert_eq!(ContactField::from_name("company"), Some(ContactField::Company));
        assert_eq!(ContactField::from_name("phone"), None);
        assert_eq!(filled().get(ContactField::Message), "M");
    }

    #[test]
    fn body_carries_the_four_fields() {
        let body = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "company": "C",
                "message": "M",
            })
        );
    }

    #[test]
    fn ok_response_clears_the_form() {
        let state = filled_state();
        let relay = FakeRelay::answering(Ok(200));
        let notifier = RecordingNotifier::default();

        let result = block_on(submit_contact_form(&Rc::downgrade(&state), &relay, &notifier));

        assert_eq!(result, Ok(()));
        assert_eq!(*state.borrow().form(), ContactForm::default());
        assert!(!state.borrow().is_submitting());
        assert_eq!(*relay.sent.borrow(), vec![filled()]);
        assert_eq!(*notifier.toasts.borrow(), vec![Toast::message_sent()]);
    }

    #[test]
    fn rejected_submission_keeps_the_input() {
        for status in [422, 500] {
            let state = filled_state();
            let relay = FakeRelay::answering(Ok(status));
            let notifier = RecordingNotifier::default();

            let result = block_on(submit_contact_form(&Rc::downgrade(&state), &relay, &notifier));

            assert!(matches!(
                result,
                Err(SubmitError::SubmissionFailed { status: Some(s), .. }) if s == status
            ));
            assert_eq!(*state.borrow().form(), filled());
            assert!(!state.borrow().is_submitting());

            let toasts = notifier.toasts.borrow();
            assert_eq!(toasts.len(), 1);
            assert_eq!(toasts[0].variant, ToastVariant::Destructive);
            assert!(toasts[0].description.contains(config::FALLBACK_EMAIL));
        }
    }

    #[test]
    fn other_success_codes_count_as_failure() {
        let state = filled_state();
        let relay = FakeRelay::answering(Ok(201));
        let notifier = RecordingNotifier::default();

        let result = block_on(submit_contact_form(&Rc::downgrade(&state), &relay, &notifier));

        assert!(result.is_err());
        assert_eq!(*state.borrow().form(), filled());
    }

    #[test]
    fn transport_failure_behaves_like_a_rejection() {
        let state = filled_state();
        let relay = FakeRelay::answering(Err(SubmitError::SubmissionFailed {
            status: None,
            reason: "network unreachable".to_string(),
        }));
        let notifier = RecordingNotifier::default();

        let result = block_on(submit_contact_form(&Rc::downgrade(&state), &relay, &notifier));

        assert!(matches!(result, Err(SubmitError::SubmissionFailed { status: None, .. })));
        assert_eq!(*state.borrow().form(), filled());
        assert!(!state.borrow().is_submitting());
        assert_eq!(
            *notifier.toasts.borrow(),
            vec![Toast::message_failed(config::FALLBACK_EMAIL)]
        );
    }

    #[test]
    fn second_submit_while_in_flight_sends_nothing() {
        let state = filled_state();
        let weak = Rc::downgrade(&state);
        let relay = FakeRelay::default();
        let notifier = RecordingNotifier::default();

        let (first, second) = block_on(join(
            submit_contact_form(&weak, &relay, &notifier),
            submit_contact_form(&weak, &relay, &notifier),
        ));

        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(SubmitError::AlreadySubmitting));
        assert_eq!(relay.sent.borrow().len(), 1);
        assert_eq!(notifier.toasts.borrow().len(), 1);
        assert!(!state.borrow().is_submitting());
    }

    #[test]
    fn completion_after_unmount_is_harmless() {
        let state = filled_state();
        let weak = Rc::downgrade(&state);
        let relay = FakeRelay::answering(Ok(200));
        let notifier = RecordingNotifier::default();

        let (result, ()) = block_on(join(
            submit_contact_form(&weak, &relay, &notifier),
            async move { drop(state) },
        ));

        assert_eq!(result, Ok(()));
        assert_eq!(relay.sent.borrow().len(), 1);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn submit_without_a_mounted_form_does_nothing() {
        let weak = Rc::downgrade(&filled_state());
        let relay = FakeRelay::default();
        let notifier = RecordingNotifier::default();

        let result = block_on(submit_contact_form(&weak, &relay, &notifier));

        assert_eq!(result, Err(SubmitError::Unmounted));
        assert!(relay.sent.borrow().is_empty());
        assert!(notifier.toasts.borrow().is_empty());
    }

    #[test]
    fn dropping_an_in_flight_submission_resets_the_flag() {
        let state = filled_state();
        let weak = Rc::downgrade(&state);
        let relay = FakeRelay::default();
        let notifier = RecordingNotifier::default();

        let mut submission = Box::pin(submit_contact_form(&weak, &relay, &notifier));
        let waker = futures::task::noop_waker();
        let mut cx = std::task::Context::from_waker(&waker);
        assert!(submission.as_mut().poll(&mut cx).is_pending());
        assert!(state.borrow().is_submitting());

        drop(submission);
        assert!(!state.borrow().is_submitting());
        assert_eq!(*state.borrow().form(), filled());
    }
}
