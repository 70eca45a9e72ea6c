//! The quote form's submit cycle.

use std::cell::Cell;
use std::fmt;

use crate::console;
use crate::notify::{ToastKind, ToastSurface, Toaster, Timers};
use crate::quote::{QuoteDraft, QuoteLimits, ValidationErrors, character_count};
use crate::submit::{QuoteEndpoint, SUCCESS_MESSAGE, SubmitError};

/// The form's markup, as the controller sees it.
pub trait QuoteFormView {
    /// Current raw values of every field.
    fn read_draft(&self) -> QuoteDraft;
    /// Remove every inline error message and error highlight.
    fn clear_errors(&self);
    /// Show each error next to its field.
    fn show_errors(&self, errors: &ValidationErrors);
    /// Disable the submit button and swap its label for the loader, or undo that.
    fn set_submitting(&self, submitting: bool);
    /// Clear every field.
    fn reset(&self);
    /// Update the message character counter.
    fn set_character_count(&self, count: usize);
}

/// What one submit cycle ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// Local validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// The service accepted the request and the form was reset.
    Submitted,
    /// The request was sent but did not succeed; the form keeps its values.
    Failed(SubmitError),
    /// Another submission was still in flight.
    Ignored,
}

/// Restores the submit button however the cycle ends.
struct SubmittingGuard<'a, V: QuoteFormView> {
    view: &'a V,
    in_flight: &'a Cell<bool>,
}

impl<'a, V: QuoteFormView> SubmittingGuard<'a, V> {
    fn engage(view: &'a V, in_flight: &'a Cell<bool>) -> Self {
        in_flight.set(true);
        view.set_submitting(true);
        Self { view, in_flight }
    }
}

impl<V: QuoteFormView> Drop for SubmittingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submitting(false);
        self.in_flight.set(false);
    }
}

pub struct QuoteFormController<V, E, S, T>
where
    V: QuoteFormView,
    E: QuoteEndpoint,
    S: ToastSurface + 'static,
    T: Timers + 'static,
{
    view: V,
    endpoint: E,
    toaster: Toaster<S, T>,
    limits: QuoteLimits,
    in_flight: Cell<bool>,
}

impl<V, E, S, T> QuoteFormController<V, E, S, T>
where
    V: QuoteFormView,
    E: QuoteEndpoint,
    S: ToastSurface + 'static,
    T: Timers + 'static,
{
    pub fn new(view: V, endpoint: E, toaster: Toaster<S, T>, limits: QuoteLimits) -> Self {
        Self {
            view,
            endpoint,
            toaster,
            limits,
            in_flight: Cell::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn toaster(&self) -> &Toaster<S, T> {
        &self.toaster
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    /// Keep the character counter in step with the message field.
    pub fn message_edited(&self, value: &str) {
        self.view.set_character_count(character_count(value));
    }

    /// Validate the form and, if it passes, send it.
    pub async fn submit(&self) -> SubmitReport {
        if self.in_flight.get() {
            return SubmitReport::Ignored;
        }

        self.view.clear_errors();

        let request = match self.view.read_draft().validate(self.limits) {
            Ok(request) => request,
            Err(errors) => {
                self.view.show_errors(&errors);
                return SubmitReport::Invalid(errors);
            }
        };

        let _guard = SubmittingGuard::engage(&self.view, &self.in_flight);

        match self.endpoint.submit(&request).await {
            Ok(()) => {
                self.toaster.show(SUCCESS_MESSAGE, ToastKind::Success);
                self.view.reset();
                self.view.set_character_count(0);
                SubmitReport::Submitted
            }
            Err(error) => {
                console::error(&format!("Form submission error: {error}"));
                self.toaster.show(error.user_message(), ToastKind::Error);
                SubmitReport::Failed(error)
            }
        }
    }
}

impl<V, E, S, T> fmt::Debug for QuoteFormController<V, E, S, T>
where
    V: QuoteFormView,
    E: QuoteEndpoint,
    S: ToastSurface + 'static,
    T: Timers + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteFormController")
            .field("toaster", &self.toaster)
            .field("limits", &self.limits)
            .field("in_flight", &self.in_flight.get())
            .finish_non_exhaustive()
    }
}
