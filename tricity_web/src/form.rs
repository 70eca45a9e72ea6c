use std::rc::Rc;

use tricity::config::SiteConfig;
use tricity::form::{QuoteFormController, QuoteFormView};
use tricity::notify::{TOAST_DISMISS_AFTER, Toaster};
use tricity::quote::{Field, QuoteDraft, QuoteLimits, ValidationErrors};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::dom;
use crate::fetch::FetchEndpoint;
use crate::toast::{DomToast, WindowTimers};

pub const FORM_ID: &str = "quoteForm";
pub const SUBMIT_BUTTON_ID: &str = "submitBtn";
pub const SUBMIT_TEXT_ID: &str = "submitText";
pub const SUBMIT_LOADER_ID: &str = "submitLoader";
pub const CHAR_COUNT_ID: &str = "charCount";

const ERROR_SLOT_SELECTOR: &str = ".form-error";
const CONTROL_SELECTOR: &str = ".form-input, .form-select, .form-textarea";
const SHOW_CLASS: &str = "show";
const ERROR_CLASS: &str = "error";

pub type DomQuoteFormController =
    QuoteFormController<DomQuoteForm, FetchEndpoint, Option<DomToast>, WindowTimers>;

/// Value of an `<input>`, `<select>` or `<textarea>`.
pub fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

/// The quote form markup.
#[derive(Debug, Clone)]
pub struct DomQuoteForm {
    document: Document,
    form: HtmlFormElement,
    submit_button: Option<HtmlButtonElement>,
    submit_text: Option<Element>,
    submit_loader: Option<Element>,
    char_count: Option<Element>,
}

impl DomQuoteForm {
    /// Find the form; `None` if this page has no quote form.
    pub fn locate(document: &Document) -> Option<Self> {
        Some(Self {
            form: dom::find_by_id(document, FORM_ID)?,
            submit_button: dom::find_by_id(document, SUBMIT_BUTTON_ID),
            submit_text: document.get_element_by_id(SUBMIT_TEXT_ID),
            submit_loader: document.get_element_by_id(SUBMIT_LOADER_ID),
            char_count: document.get_element_by_id(CHAR_COUNT_ID),
            document: document.clone(),
        })
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    fn field_value(&self, field: Field) -> String {
        self.document
            .get_element_by_id(field.id())
            .map(|element| control_value(&element))
            .unwrap_or_default()
    }
}

impl QuoteFormView for DomQuoteForm {
    fn read_draft(&self) -> QuoteDraft {
        QuoteDraft {
            first_name: self.field_value(Field::FirstName),
            last_name: self.field_value(Field::LastName),
            email: self.field_value(Field::Email),
            phone: self.field_value(Field::Phone),
            service: self.field_value(Field::Service),
            message: self.field_value(Field::Message),
        }
    }

    fn clear_errors(&self) {
        if let Ok(slots) = dom::query_all::<Element>(&self.document, ERROR_SLOT_SELECTOR) {
            for slot in slots {
                slot.set_text_content(Some(""));
                let _ = slot.class_list().remove_1(SHOW_CLASS);
            }
        }

        if let Ok(controls) = dom::query_all::<Element>(&self.document, CONTROL_SELECTOR) {
            for control in controls {
                let _ = control.class_list().remove_1(ERROR_CLASS);
            }
        }
    }

    fn show_errors(&self, errors: &ValidationErrors) {
        for (field, error) in errors.iter() {
            let slot = self.document.get_element_by_id(&field.error_slot_id());
            let control = self.document.get_element_by_id(field.id());

            if let (Some(slot), Some(control)) = (slot, control) {
                slot.set_text_content(Some(&error.to_string()));
                let _ = slot.class_list().add_1(SHOW_CLASS);
                let _ = control.class_list().add_1(ERROR_CLASS);
            }
        }
    }

    fn set_submitting(&self, submitting: bool) {
        if let Some(button) = &self.submit_button {
            button.set_disabled(submitting);
        }
        if let Some(text) = &self.submit_text {
            dom::set_hidden(text, submitting);
        }
        if let Some(loader) = &self.submit_loader {
            dom::set_hidden(loader, !submitting);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn set_character_count(&self, count: usize) {
        if let Some(counter) = &self.char_count {
            counter.set_text_content(Some(&count.to_string()));
        }
    }
}

/// Wire up the quote form, if the page has one.
pub fn init_form(config: &SiteConfig) -> Result<Option<Rc<DomQuoteFormController>>, JsValue> {
    let window = dom::window()?;
    let document = window.document().ok_or("No document object")?;

    let Some(view) = DomQuoteForm::locate(&document) else {
        return Ok(None);
    };
    let form = view.form().clone();

    let toaster = Toaster::new(
        DomToast::locate(&document),
        WindowTimers::new(window),
        TOAST_DISMISS_AFTER,
    );

    let controller = Rc::new(QuoteFormController::new(
        view,
        FetchEndpoint::new(config.quote_endpoint.clone()),
        toaster,
        QuoteLimits::default(),
    ));

    if let Some(message) = document.get_element_by_id(Field::Message.id()) {
        let controller = controller.clone();
        let field = message.clone();
        dom::listen(&message, "input", move |_event| {
            controller.message_edited(&control_value(&field));
        })?;
    }

    {
        let controller = controller.clone();
        dom::listen(&form, "submit", move |event| {
            event.prevent_default();

            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.submit().await;
            });
        })?;
    }

    Ok(Some(controller))
}
