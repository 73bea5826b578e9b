use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

use crate::config;
use crate::controller::toast::{Notifier, Toast, ToastVariant};

const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub toast: Toast,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

/// Toasts currently on screen, newest last.
#[derive(Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    entries: Vec<ToastEntry>,
}

impl ToastList {
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut entries = self.entries.clone();
        let mut next_id = self.next_id;
        match action {
            ToastAction::Push(toast) => {
                entries.push(ToastEntry { id: next_id, toast });
                next_id = next_id.wrapping_add(1);
                if entries.len() > MAX_VISIBLE_TOASTS {
                    entries.remove(0);
                }
            }
            ToastAction::Dismiss(id) => entries.retain(|entry| entry.id != id),
        }
        Rc::new(Self { next_id, entries })
    }
}

pub type ToastDispatcher = UseReducerDispatcher<ToastList>;

/// `Notifier` that pushes into the page's toaster.
#[derive(Clone)]
pub struct ToastNotifier {
    dispatcher: Option<ToastDispatcher>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(ToastAction::Push(toast)),
            None => warn!("No toaster mounted, dropping toast: {}", toast.title),
        }
    }
}

#[hook]
pub fn use_toast() -> ToastNotifier {
    ToastNotifier {
        dispatcher: use_context::<ToastDispatcher>(),
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    entry: ToastEntry,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.entry.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                // dropping the timeout cancels it
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let toast = &props.entry.toast;
    let variant = match toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast-destructive",
    };

    html! {
        <li class={variant} role="status">
            <div class="toast-body">
                <div class="toast-title">{&toast.title}</div>
                <div class="toast-description">{&toast.description}</div>
            </div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"✕"}</button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provides the toast dispatcher to its children and renders the toast stack.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let dispatcher = toasts.dispatcher();

    let on_dismiss = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastDispatcher> context={dispatcher}>
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        z-index: 1000;
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        width: 360px;
                        padding: 1rem 1.25rem;
                        background: #111a15;
                        border: 1px solid rgba(74, 222, 128, 0.25);
                        border-radius: 12px;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.35);
                        color: #f1f5f2;
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-destructive {
                        background: #3b1414;
                        border-color: rgba(248, 113, 113, 0.4);
                    }
                    .toast-body { flex: 1; }
                    .toast-title { font-weight: 600; margin-bottom: 0.25rem; }
                    .toast-description { font-size: 0.9rem; opacity: 0.85; }
                    .toast-close {
                        background: none;
                        border: none;
                        color: inherit;
                        cursor: pointer;
                        opacity: 0.6;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(1rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for props.children.iter() }
            <ol class="toaster">
                { for toasts.entries().iter().map(|entry| html! {
                    <ToastItem key={entry.id} entry={entry.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </ol>
        </ContextProvider<ToastDispatcher>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(list: Rc<ToastList>, action: ToastAction) -> Rc<ToastList> {
        list.reduce(action)
    }

    #[test]
    fn pushed_toasts_get_distinct_ids() {
        let list = reduce(Rc::default(), ToastAction::Push(Toast::message_sent()));
        let list = reduce(list, ToastAction::Push(Toast::message_failed("x@y.z")));

        let ids: Vec<u32> = list.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = reduce(Rc::default(), ToastAction::Push(Toast::message_sent()));
        let list = reduce(list, ToastAction::Push(Toast::message_failed("x@y.z")));
        let list = reduce(list, ToastAction::Dismiss(0));

        assert_eq!(list.entries().len(), 1);
        assert_eq!(list.entries()[0].toast.variant, ToastVariant::Destructive);

        // unknown id
        let list = reduce(list, ToastAction::Dismiss(42));
        assert_eq!(list.entries().len(), 1);
    }

    #[test]
    fn oldest_toast_is_dropped_past_the_limit() {
        let mut list = Rc::<ToastList>::default();
        for _ in 0..MAX_VISIBLE_TOASTS + 2 {
            list = reduce(list, ToastAction::Push(Toast::message_sent()));
        }

        let ids: Vec<u32> = list.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }
}
