use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use log::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::controller::contact::{ContactForm, FormRelay, SubmitError};
use crate::controller::events::ScrollSource;
use crate::controller::navigation::{LayoutQuery, SectionGeometry, SectionId};
use crate::controller::rotation::{Scheduler, TimerHandle};

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Reads section geometry straight from the rendered elements.
#[derive(Clone, Copy, Default)]
pub struct DomLayout;

impl LayoutQuery for DomLayout {
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        let element = document()?
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionGeometry::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        match document().and_then(|d| d.get_element_by_id(id)) {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

const LAYOUT_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Scroll and resize events of the browser window.
#[derive(Clone, Copy, Default)]
pub struct WindowScroll;

/// Registered window listener; removed again on drop.
pub struct WindowListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in LAYOUT_EVENTS {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }
    }
}

impl ScrollSource for WindowScroll {
    type Subscription = Option<WindowListener>;

    fn offset(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn subscribe(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Self::Subscription {
        let Some(window) = window() else {
            error!("No window to listen for scroll events on");
            return None;
        };

        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Ok(offset) = reader.scroll_y() {
                on_scroll(offset);
            }
        }) as Box<dyn FnMut()>);

        for event in LAYOUT_EVENTS {
            if let Err(e) =
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                error!("Failed to add {} listener: {:?}", event, e);
            }
        }

        Some(WindowListener { window, callback })
    }
}

/// Timers backed by `setInterval`.
#[derive(Clone, Copy, Default)]
pub struct GlooScheduler;

impl TimerHandle for Interval {
    fn cancel(self) {
        Interval::cancel(self);
    }
}

impl Scheduler for GlooScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}

/// Posts the contact form to a Formspree endpoint.
pub struct FormspreeRelay {
    endpoint: String,
}

impl FormspreeRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

fn transport_error(e: gloo_net::Error) -> SubmitError {
    SubmitError::SubmissionFailed {
        status: None,
        reason: e.to_string(),
    }
}

#[async_trait(?Send)]
impl FormRelay for FormspreeRelay {
    async fn post(&self, form: &ContactForm) -> Result<u16, SubmitError> {
        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(form)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status != 200 {
            // Formspree lists rejected fields under "errors"
            match response.json::<serde_json::Value>().await {
                Ok(body) => gloo_console::error!(format!("Form relay rejected ({}): {}", status, body)),
                Err(_) => gloo_console::error!(format!("Form relay rejected ({})", status)),
            }
        }
        Ok(status)
    }
}
