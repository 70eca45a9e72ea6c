use std::time::Duration;

use tricity::console;
use tricity::notify::{Toast, ToastSurface, Timers};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Window};

use crate::dom;

pub const TOAST_ID: &str = "toast";
pub const TOAST_CONTENT_ID: &str = "toastContent";

/// The `#toast` element and its `#toastContent` child.
#[derive(Debug, Clone)]
pub struct DomToast {
    toast: Element,
    content: Element,
}

impl DomToast {
    /// Find the toast markup; `None` if the page has none.
    pub fn locate(document: &Document) -> Option<Self> {
        Some(Self {
            toast: document.get_element_by_id(TOAST_ID)?,
            content: document.get_element_by_id(TOAST_CONTENT_ID)?,
        })
    }
}

impl ToastSurface for DomToast {
    fn is_showing(&self) -> bool {
        !dom::is_hidden(&self.toast)
    }

    fn present(&self, toast: &Toast) {
        self.content.set_text_content(Some(&toast.message));
        self.toast.set_class_name(&toast.kind.class_name());
        dom::set_hidden(&self.toast, false);
    }

    fn hide(&self) {
        dom::set_hidden(&self.toast, true);
    }

    fn after_hidden(&self, callback: Box<dyn FnOnce()>) {
        let options = AddEventListenerOptions::new();
        options.set_once(true);

        let listener = Closure::once_into_js(move || callback());

        if let Err(e) = self
            .toast
            .add_event_listener_with_callback_and_add_event_listener_options(
                "transitionend",
                listener.unchecked_ref(),
                &options,
            )
        {
            console::error(&format!(
                "Could not wait for toast transition: {}",
                dom::describe_js_error(&e)
            ));
        }
    }
}

/// `setTimeout`-backed timers.
#[derive(Debug, Clone)]
pub struct WindowTimers {
    window: Window,
}

impl WindowTimers {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Timers for WindowTimers {
    /// `None` when the browser refused to schedule the timeout.
    type Handle = Option<i32>;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<i32> {
        let timeout = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handler = Closure::once_into_js(move || callback());

        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                handler.unchecked_ref(),
                timeout,
            ) {
            Ok(id) => Some(id),
            Err(e) => {
                console::error(&format!(
                    "Could not schedule timeout: {}",
                    dom::describe_js_error(&e)
                ));
                None
            }
        }
    }

    fn cancel(&self, handle: Option<i32>) {
        if let Some(id) = handle {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
