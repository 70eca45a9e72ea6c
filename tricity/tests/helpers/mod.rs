#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tricity::prelude::*;

/// In-memory stand-in for the quote form markup.
#[derive(Debug, Default)]
pub struct FakeForm {
    pub fields: RefCell<QuoteDraft>,
    pub char_count: RefCell<String>,
    pub button_disabled: RefCell<bool>,
    pub loader_visible: RefCell<bool>,
    pub inline_errors: RefCell<Vec<(String, String)>>,
}

impl FakeForm {
    pub fn filled(draft: QuoteDraft) -> Self {
        let form = Self::default();
        *form.char_count.borrow_mut() = draft.message.encode_utf16().count().to_string();
        *form.fields.borrow_mut() = draft;
        form
    }
}

impl QuoteFormView for FakeForm {
    fn read_draft(&self) -> QuoteDraft {
        self.fields.borrow().clone()
    }

    fn clear_errors(&self) {
        self.inline_errors.borrow_mut().clear();
    }

    fn show_errors(&self, errors: &ValidationErrors) {
        let mut inline = self.inline_errors.borrow_mut();
        for (field, error) in errors.iter() {
            inline.push((field.error_slot_id(), error.to_string()));
        }
    }

    fn set_submitting(&self, submitting: bool) {
        *self.button_disabled.borrow_mut() = submitting;
        *self.loader_visible.borrow_mut() = submitting;
    }

    fn reset(&self) {
        *self.fields.borrow_mut() = QuoteDraft::default();
    }

    fn set_character_count(&self, count: usize) {
        *self.char_count.borrow_mut() = count.to_string();
    }
}

/// Endpoint answering every request with a canned HTTP exchange.
#[derive(Debug)]
pub struct MockEndpoint {
    pub status: u16,
    pub body: String,
    pub received: RefCell<Vec<String>>,
}

impl MockEndpoint {
    pub fn answering(status: u16, body: &str) -> Rc<Self> {
        Rc::new(Self {
            status,
            body: body.to_owned(),
            received: RefCell::new(Vec::new()),
        })
    }
}

impl QuoteEndpoint for MockEndpoint {
    async fn submit(&self, request: &QuoteRequest) -> Result<(), SubmitError> {
        let json = request
            .to_json()
            .map_err(|e| SubmitError::Encode(e.to_string()))?;
        self.received.borrow_mut().push(json);
        interpret_response(self.status, (200..300).contains(&self.status), &self.body)
    }
}

struct ToastElement {
    hidden: bool,
    class_name: String,
    content: String,
    on_transition_end: Vec<Box<dyn FnOnce()>>,
}

/// Toast markup whose hide transition completes when the test says so.
#[derive(Clone)]
pub struct FakeToast {
    element: Rc<RefCell<ToastElement>>,
}

impl Default for FakeToast {
    fn default() -> Self {
        Self {
            element: Rc::new(RefCell::new(ToastElement {
                hidden: true,
                class_name: "toast hidden".to_owned(),
                content: String::new(),
                on_transition_end: Vec::new(),
            })),
        }
    }
}

impl FakeToast {
    pub fn visible_text(&self) -> Option<String> {
        let element = self.element.borrow();
        (!element.hidden).then(|| element.content.clone())
    }

    pub fn class_name(&self) -> String {
        self.element.borrow().class_name.clone()
    }

    pub fn end_transition(&self) {
        let callbacks = std::mem::take(&mut self.element.borrow_mut().on_transition_end);
        for callback in callbacks {
            callback();
        }
    }
}

impl ToastSurface for FakeToast {
    fn is_showing(&self) -> bool {
        !self.element.borrow().hidden
    }

    fn present(&self, toast: &Toast) {
        let mut element = self.element.borrow_mut();
        element.content = toast.message.clone();
        element.class_name = toast.kind.class_name();
        element.hidden = false;
    }

    fn hide(&self) {
        let mut element = self.element.borrow_mut();
        element.hidden = true;
        element.class_name.push_str(" hidden");
    }

    fn after_hidden(&self, callback: Box<dyn FnOnce()>) {
        self.element.borrow_mut().on_transition_end.push(callback);
    }
}

/// Manually driven clock for the toast's dismiss timer.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<RefCell<Duration>>,
    timers: Rc<RefCell<Vec<(usize, Duration, Box<dyn FnOnce()>)>>>,
    next_id: Rc<RefCell<usize>>,
}

impl ManualClock {
    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Move time forward, firing every timer that comes due.
    pub fn advance(&self, by: Duration) {
        let now = {
            let mut now = self.now.borrow_mut();
            *now += by;
            *now
        };

        let due: Vec<_> = {
            let mut timers = self.timers.borrow_mut();
            let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut *timers)
                .into_iter()
                .partition(|(_, at, _)| *at <= now);
            *timers = waiting;
            due
        };

        for (_, _, callback) in due {
            callback();
        }
    }
}

impl Timers for ManualClock {
    type Handle = usize;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> usize {
        let mut next_id = self.next_id.borrow_mut();
        *next_id += 1;
        let at = *self.now.borrow() + delay;
        self.timers.borrow_mut().push((*next_id, at, callback));
        *next_id
    }

    fn cancel(&self, handle: usize) {
        self.timers.borrow_mut().retain(|(id, _, _)| *id != handle);
    }
}

pub type Controller = QuoteFormController<FakeForm, Rc<MockEndpoint>, FakeToast, ManualClock>;

pub fn controller(form: FakeForm, endpoint: Rc<MockEndpoint>) -> (Controller, FakeToast, ManualClock) {
    let toast = FakeToast::default();
    let clock = ManualClock::default();
    let toaster = Toaster::new(toast.clone(), clock.clone(), TOAST_DISMISS_AFTER);
    (
        QuoteFormController::new(form, endpoint, toaster, QuoteLimits::default()),
        toast,
        clock,
    )
}

pub fn valid_draft() -> QuoteDraft {
    QuoteDraft {
        first_name: " Dana ".to_owned(),
        last_name: "Reyes".to_owned(),
        email: "dana@example.com".to_owned(),
        phone: "509-555-0142".to_owned(),
        service: "kitchen-remodel".to_owned(),
        message: "Looking to redo our kitchen this spring.".to_owned(),
    }
}
